//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: directory traversal and file copying
//! - [`progress`]: per-file progress reporting
//!
//! These ports allow the use case layer to stay independent of the real
//! filesystem and the console.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod progress;
