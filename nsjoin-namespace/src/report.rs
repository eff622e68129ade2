//! Join with a before/after record of namespace membership

use std::fmt;

use nsjoin_core::{Error, ProcessId, Result};
use serde::{Deserialize, Serialize};

use crate::identity::NetNamespaceId;
use crate::joiner::join_network_namespace;

/// Outcome of a successful join
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinReport {
    /// Process whose namespace was joined
    pub target: ProcessId,
    /// Caller's namespace before the join
    pub before: NetNamespaceId,
    /// Caller's namespace after the join
    pub after: NetNamespaceId,
}

impl JoinReport {
    /// Whether the join moved the caller to a different namespace
    #[must_use]
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

impl fmt::Display for JoinReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Target PID: {}", self.target)?;
        writeln!(f, "  Before:   {}", self.before)?;
        writeln!(f, "  After:    {}", self.after)?;
        if self.changed() {
            writeln!(f, "  Network namespace changed")
        } else {
            writeln!(f, "  Already in target network namespace")
        }
    }
}

/// Join the network namespace of `pid` and record the caller's identity around it
///
/// Errors from the join are returned unchanged. If the join succeeds but
/// the caller's identity cannot be read afterwards, the error is
/// [`Error::Io`]: the caller is already in the target namespace at that point.
pub fn join_and_report(pid: ProcessId) -> Result<JoinReport> {
    let before = NetNamespaceId::current()?;

    join_network_namespace(pid)?;

    let after = NetNamespaceId::current().map_err(after_join)?;

    if after != before {
        tracing::info!(pid = %pid, before = %before, after = %after, "Network namespace changed");
    }

    Ok(JoinReport {
        target: pid,
        before,
        after,
    })
}

/// Identity lookups after a completed switch must not look like open failures
fn after_join(err: Error) -> Error {
    match err {
        Error::Open { source, .. } => Error::Io(source),
        other => other,
    }
}
