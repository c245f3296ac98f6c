// src/config.rs
use std::path::PathBuf;

use daysort_domain::OverwritePolicy;
use derive_builder::Builder;

/// Runtime settings for one invocation. Built once from the command line and
/// passed down unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub source: PathBuf,
    pub destination: PathBuf,
    #[builder(default)]
    pub policy: OverwritePolicy,
    /// Suppress per-file progress lines.
    #[builder(default)]
    pub quiet: bool,
    #[builder(default)]
    pub verbosity: u8,
}
