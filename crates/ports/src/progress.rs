// crates/ports/src/progress.rs
use std::path::Path;

use daysort_domain::{CopyOutcome, OverwritePolicy, RunSummary};
use daysort_shared_kernel::Result;

pub trait ProgressSink: Send + Sync {
    fn on_start(&self, source: &Path, destination: &Path, policy: OverwritePolicy) -> Result<()>;
    fn on_file(&self, outcome: &CopyOutcome) -> Result<()>;
    fn on_complete(&self, summary: &RunSummary) -> Result<()>;
}
