//! Network namespace joining
//!
//! This crate attaches the calling thread to the network namespace of an
//! already running process:
//! - `joiner` - open `/proc/<pid>/ns/net` and `setns(2)` into it
//! - `identity` - compare network namespaces by their nsfs inode
//! - `report` - join with a before/after identity record

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod identity;
pub mod joiner;
pub mod report;

pub use identity::{NetNamespaceId, shares_network_namespace};
pub use joiner::{join_network_namespace, join_network_namespace_path, netns_path};
pub use report::{JoinReport, join_and_report};
