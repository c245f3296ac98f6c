use anyhow::Result;
use daysort_domain::RunSummary;
use daysort_infra::{LocalFileStore, LocalTreeWalker};
use daysort_shared_kernel::ErrorContext;
use daysort_usecase::{OrganizeFiles, OrganizeRequest};
use tracing::debug;

use crate::{config::Config, presentation::ConsoleProgress};

/// Run one organize pass against the local filesystem with console progress.
pub fn run(config: &Config) -> Result<RunSummary> {
    debug!(?config, "starting");

    let walker = LocalTreeWalker::new();
    let store = LocalFileStore::new();
    let progress = ConsoleProgress::stdout(config.quiet);

    let request = OrganizeRequest {
        source: config.source.clone(),
        destination: config.destination.clone(),
        policy: config.policy,
    };
    let summary = OrganizeFiles::new(&walker, &store, &progress)
        .run(&request)
        .context("organizing files")?;
    Ok(summary)
}
