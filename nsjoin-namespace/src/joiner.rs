//! Entering the network namespace of another process
//!
//! `setns(2)` with `CLONE_NEWNET` changes the network namespace of the
//! calling thread only, and the change lasts until the thread exits or
//! switches again. Callers that join from several threads must serialize
//! those calls themselves.

use std::fs::File;
use std::path::{Path, PathBuf};

use nix::sched::{CloneFlags, setns};
use nsjoin_core::{Error, ProcessId, Result};

/// Path of the network namespace handle of `pid`
#[must_use]
pub fn netns_path(pid: ProcessId) -> PathBuf {
    PathBuf::from(format!("/proc/{pid}/ns/net"))
}

/// Join the network namespace of a running process
///
/// The PID is not checked up front. A missing process, a negative PID or
/// a handle the caller may not read all surface as [`Error::Open`]. A
/// handle that opens but is refused by the kernel (usually missing
/// `CAP_SYS_ADMIN`) surfaces as [`Error::Switch`].
///
/// On success the calling thread stays in the target namespace.
pub fn join_network_namespace(pid: ProcessId) -> Result<()> {
    let path = netns_path(pid);

    tracing::debug!(pid = %pid, path = %path.display(), "Joining network namespace of process");

    join_network_namespace_path(&path)
}

/// Join the network namespace referenced by a handle path
///
/// Works with `/proc/<pid>/ns/net` as well as bind-mounted handles such
/// as `/var/run/netns/<name>`.
pub fn join_network_namespace_path(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if path.as_os_str().is_empty() {
        return Err(Error::PathConstruction {
            message: "namespace handle path is empty".to_string(),
        });
    }

    // Closed on drop, after the setns attempt, on every return path.
    let handle = File::open(path).map_err(|e| {
        tracing::error!(
            path = %path.display(),
            error = %e,
            "Failed to open namespace handle"
        );
        Error::Open {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    setns(&handle, CloneFlags::CLONE_NEWNET).map_err(|e| {
        tracing::error!(
            path = %path.display(),
            error = %e,
            "Failed to enter network namespace"
        );
        Error::Switch {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    tracing::info!(path = %path.display(), "Entered network namespace");

    Ok(())
}
