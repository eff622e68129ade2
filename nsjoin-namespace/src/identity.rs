//! Network namespace identity
//!
//! Two handles refer to the same namespace when their nsfs device and
//! inode numbers match. This is the value `readlink /proc/<pid>/ns/net`
//! shows as `net:[<inode>]`.

use std::fmt;
use std::fs::{self, File};
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use nsjoin_core::{Error, ProcessId, Result};
use serde::{Deserialize, Serialize};

use crate::joiner::netns_path;

/// Handle of the calling thread's own network namespace
const THREAD_SELF_NETNS: &str = "/proc/thread-self/ns/net";

/// Identity of a network namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetNamespaceId {
    /// Device of the nsfs mount
    pub dev: u64,
    /// Inode number of the namespace
    pub ino: u64,
}

impl NetNamespaceId {
    /// Identity of the namespace a handle path refers to
    ///
    /// A path that cannot be resolved is reported as [`Error::Open`].
    pub fn of_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let meta = fs::metadata(path).map_err(|e| Error::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self {
            dev: meta.dev(),
            ino: meta.ino(),
        })
    }

    /// Identity of the network namespace of `pid`
    pub fn of_process(pid: ProcessId) -> Result<Self> {
        Self::of_path(netns_path(pid))
    }

    /// Identity of the calling thread's network namespace
    pub fn current() -> Result<Self> {
        Self::of_path(THREAD_SELF_NETNS)
    }

    /// Identity behind an already opened handle
    pub fn of_handle(handle: &File) -> Result<Self> {
        let meta = handle.metadata()?;

        Ok(Self {
            dev: meta.dev(),
            ino: meta.ino(),
        })
    }
}

impl fmt::Display for NetNamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "net:[{}]", self.ino)
    }
}

/// Check whether the calling thread already shares the network namespace of `pid`
pub fn shares_network_namespace(pid: ProcessId) -> Result<bool> {
    let target = NetNamespaceId::of_process(pid)?;
    let current = NetNamespaceId::current()?;

    tracing::debug!(pid = %pid, target = %target, current = %current, "Compared network namespaces");

    Ok(target == current)
}
