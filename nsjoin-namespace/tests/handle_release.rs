//! Namespace handle accounting
//!
//! Kept in its own test binary with a single test so no other test opens
//! namespace handles concurrently.

use nsjoin_core::ProcessId;
use nsjoin_namespace::{join_network_namespace, join_network_namespace_path};
use std::fs;

const NS_KINDS: &[&str] = &[
    "net", "uts", "ipc", "mnt", "pid", "user", "cgroup", "time",
];

/// Count open descriptors of this process that refer to a namespace
fn namespace_handles() -> usize {
    fs::read_dir("/proc/self/fd")
        .unwrap()
        .filter_map(|entry| fs::read_link(entry.ok()?.path()).ok())
        .filter(|target| {
            let target = target.to_string_lossy();
            NS_KINDS
                .iter()
                .any(|kind| target.starts_with(&format!("{kind}:[")))
        })
        .count()
}

#[test]
fn test_handle_released_on_every_outcome() {
    let baseline = namespace_handles();

    // Open failure
    for _ in 0..3 {
        assert!(join_network_namespace(ProcessId::from_raw(-1)).is_err());
        assert_eq!(namespace_handles(), baseline);
    }

    // Switch failure with an opened handle of the wrong class
    for _ in 0..3 {
        let err = join_network_namespace_path("/proc/self/ns/uts").unwrap_err();
        assert!(err.is_switch());
        assert_eq!(namespace_handles(), baseline);
    }

    // Own namespace: success when privileged, switch failure otherwise
    for _ in 0..3 {
        let _ = join_network_namespace(ProcessId::current());
        assert_eq!(namespace_handles(), baseline);
    }

    // PID 1: any outcome
    let _ = join_network_namespace(ProcessId::INIT);
    assert_eq!(namespace_handles(), baseline);
}
