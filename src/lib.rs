//! Copy a directory tree into `YYYY/YYYY-MM-DD` folders keyed on each file's
//! last-modified date.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
