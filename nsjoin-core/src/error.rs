//! Error types for nsjoin

use std::path::PathBuf;

use nix::errno::Errno;
use thiserror::Error;

/// nsjoin error types
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Namespace handle path could not be formed
    #[error("Invalid namespace path: {message}")]
    PathConstruction {
        /// Error message
        message: String,
    },

    /// Namespace handle could not be opened
    #[error("Failed to open namespace handle {}", path.display())]
    Open {
        /// Path that was opened
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// `setns(2)` rejected the opened handle
    #[error("Failed to enter network namespace {}", path.display())]
    Switch {
        /// Path the handle was opened from
        path: PathBuf,
        /// Status reported by `setns(2)`
        #[source]
        source: Errno,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Error message
        message: String,
    },
}

impl Error {
    /// Platform error code behind an open or switch failure
    #[must_use]
    pub fn errno(&self) -> Option<Errno> {
        match self {
            Self::Open { source, .. } => source.raw_os_error().map(Errno::from_raw),
            Self::Switch { source, .. } => Some(*source),
            _ => None,
        }
    }

    /// Whether the namespace handle could not be opened
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Whether the handle opened but the switch was rejected
    #[must_use]
    pub const fn is_switch(&self) -> bool {
        matches!(self, Self::Switch { .. })
    }
}

/// Result type alias for nsjoin operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_open_error_errno() {
        let err = Error::Open {
            path: PathBuf::from("/proc/999999/ns/net"),
            source: io::Error::from_raw_os_error(Errno::ENOENT as i32),
        };

        assert!(err.is_open());
        assert!(!err.is_switch());
        assert_eq!(err.errno(), Some(Errno::ENOENT));
    }

    #[test]
    fn test_switch_error_errno() {
        let err = Error::Switch {
            path: PathBuf::from("/proc/1/ns/net"),
            source: Errno::EPERM,
        };

        assert!(err.is_switch());
        assert_eq!(err.errno(), Some(Errno::EPERM));
        assert!(err.to_string().contains("/proc/1/ns/net"));
    }

    #[test]
    fn test_synthetic_io_error_has_no_errno() {
        let err = Error::Open {
            path: PathBuf::from("/nowhere"),
            source: io::Error::other("synthetic"),
        };

        assert_eq!(err.errno(), None);
        assert_eq!(Error::InvalidConfig { message: "x".into() }.errno(), None);
    }
}
