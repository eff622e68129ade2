//! Mapping of join failures to exit codes and operator hints

use nix::errno::Errno;
use nsjoin_core::Error;

/// Generic failure
pub const EXIT_FAILURE: i32 = 1;
/// The namespace handle could not be opened
pub const EXIT_OPEN_FAILED: i32 = 2;
/// The handle opened but the switch was refused
pub const EXIT_SWITCH_FAILED: i32 = 3;

fn find_core_error(err: &anyhow::Error) -> Option<&Error> {
    err.chain().find_map(|cause| cause.downcast_ref::<Error>())
}

/// Exit code for a command failure
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match find_core_error(err) {
        Some(Error::Open { .. }) => EXIT_OPEN_FAILED,
        Some(Error::Switch { .. }) => EXIT_SWITCH_FAILED,
        _ => EXIT_FAILURE,
    }
}

/// Short explanation of a command failure, when one is known
pub fn hint(err: &anyhow::Error) -> Option<&'static str> {
    let core = find_core_error(err)?;

    match (core, core.errno()) {
        (Error::Open { .. }, Some(Errno::ENOENT | Errno::ESRCH)) => {
            Some("no such process or namespace")
        }
        (Error::Open { .. }, Some(Errno::EACCES | Errno::EPERM)) => {
            Some("permission denied opening namespace")
        }
        (Error::Switch { .. }, Some(Errno::EPERM)) => {
            Some("permission denied entering namespace (CAP_SYS_ADMIN required)")
        }
        (Error::Switch { .. }, Some(Errno::EINVAL)) => {
            Some("handle does not refer to a network namespace")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    fn open_error(errno: Errno) -> Error {
        Error::Open {
            path: PathBuf::from("/proc/999999/ns/net"),
            source: std::io::Error::from_raw_os_error(errno as i32),
        }
    }

    fn switch_error(errno: Errno) -> Error {
        Error::Switch {
            path: PathBuf::from("/proc/1/ns/net"),
            source: errno,
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            exit_code(&anyhow::Error::new(open_error(Errno::ENOENT))),
            EXIT_OPEN_FAILED
        );
        assert_eq!(
            exit_code(&anyhow::Error::new(switch_error(Errno::EPERM))),
            EXIT_SWITCH_FAILED
        );
        assert_eq!(exit_code(&anyhow::anyhow!("other")), EXIT_FAILURE);
    }

    #[test]
    fn test_exit_code_through_context() {
        let result: Result<(), Error> = Err(switch_error(Errno::EPERM));
        let err = result.context("Failed to join").unwrap_err();

        assert_eq!(exit_code(&err), EXIT_SWITCH_FAILED);
    }

    #[test]
    fn test_hints() {
        let hint_for = |e: Error| hint(&anyhow::Error::new(e));

        assert_eq!(
            hint_for(open_error(Errno::ENOENT)),
            Some("no such process or namespace")
        );
        assert_eq!(
            hint_for(open_error(Errno::EACCES)),
            Some("permission denied opening namespace")
        );
        assert!(hint_for(switch_error(Errno::EPERM)).unwrap().contains("CAP_SYS_ADMIN"));
        assert!(hint_for(switch_error(Errno::EINVAL)).unwrap().contains("not refer"));
        assert_eq!(hint_for(switch_error(Errno::EBADF)), None);
    }
}
