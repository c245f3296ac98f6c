use std::path::PathBuf;

use daysort_domain::{CopyAction, CopyOutcome, DayBucket, OverwritePolicy, Resolution, RunSummary};
use daysort_ports::{
    filesystem::{FileStore, TreeWalker, WalkEntry, WalkPlan},
    progress::ProgressSink,
};
use daysort_shared_kernel::Result;
use tracing::{debug, info};

/// Parameters of a single organize run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizeRequest {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub policy: OverwritePolicy,
}

pub struct OrganizeFiles<'a> {
    walker: &'a dyn TreeWalker,
    store: &'a dyn FileStore,
    progress: &'a dyn ProgressSink,
}

impl<'a> OrganizeFiles<'a> {
    pub fn new(walker: &'a dyn TreeWalker, store: &'a dyn FileStore, progress: &'a dyn ProgressSink) -> Self {
        Self { walker, store, progress }
    }

    /// Copy every file under `request.source` into its day bucket.
    ///
    /// Files are handled one at a time in walk order. The first walk,
    /// directory or copy failure ends the run; whatever was copied before it
    /// stays in place.
    pub fn run(&self, request: &OrganizeRequest) -> Result<RunSummary> {
        self.store.create_dir_all(&request.destination)?;
        self.progress.on_start(&request.source, &request.destination, request.policy)?;

        let plan = WalkPlan { root: request.source.clone(), exclude: Some(request.destination.clone()) };
        let mut summary = RunSummary::default();

        for entry in self.walker.walk(&plan) {
            let entry = entry?;
            if entry.is_dir {
                continue;
            }
            let outcome = self.organize_entry(&entry, request)?;
            summary.record(outcome.action);
            self.progress.on_file(&outcome)?;
        }

        info!(%summary, written = summary.written(), "organize run finished");
        self.progress.on_complete(&summary)?;
        Ok(summary)
    }

    fn organize_entry(&self, entry: &WalkEntry, request: &OrganizeRequest) -> Result<CopyOutcome> {
        let bucket = DayBucket::from_timestamp(&entry.modified);
        self.store.create_dir_all(&bucket.directory(&request.destination))?;

        let destination = bucket.destination(&request.destination, &entry.file_name);
        match request.policy.resolve(destination, |p| self.store.exists(p)) {
            Resolution::Skip { existing } => {
                debug!(source = %entry.path.display(), existing = %existing.display(), "destination taken; skipping");
                Ok(CopyOutcome { source: entry.path.clone(), destination: existing, action: CopyAction::Skipped })
            }
            // The source already sits where it would be filed.
            Resolution::CopyTo { path, .. } if self.store.same_file(&entry.path, &path) => {
                debug!(source = %entry.path.display(), "source is its own destination; skipping");
                Ok(CopyOutcome { source: entry.path.clone(), destination: path, action: CopyAction::Skipped })
            }
            Resolution::CopyTo { path, action } => {
                let bytes = self.store.copy_file(&entry.path, &path)?;
                debug!(source = %entry.path.display(), destination = %path.display(), bytes, ?action, "copied");
                Ok(CopyOutcome { source: entry.path.clone(), destination: path, action })
            }
        }
    }
}
