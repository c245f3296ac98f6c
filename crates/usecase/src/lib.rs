//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: walk the source tree, bucket every file by day and copy
//!   it into the destination under the selected overwrite policy
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::{OrganizeFiles, OrganizeRequest};
