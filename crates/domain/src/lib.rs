//! # Domain
//!
//! Pure values and decisions behind date-based organizing. Nothing in this
//! crate touches the filesystem; existence checks arrive as closures.

#![allow(clippy::multiple_crate_versions)]

pub mod bucket;
pub mod model;
pub mod naming;
pub mod policy;

pub use bucket::DayBucket;
pub use model::{CopyAction, CopyOutcome, RunSummary};
pub use naming::{sibling_candidate, unique_sibling};
pub use policy::{OverwritePolicy, Resolution};
