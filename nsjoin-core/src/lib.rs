//! nsjoin core - shared types and errors
//!
//! This crate provides the error taxonomy and process identifier used by
//! the namespace joiner and the `nsjoin` CLI.

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::ProcessId;
