// src/presentation.rs
use std::{
    io::{self, Write},
    path::Path,
    sync::Mutex,
};

use daysort_domain::{CopyAction, CopyOutcome, OverwritePolicy, RunSummary};
use daysort_ports::progress::ProgressSink;
use daysort_shared_kernel::{InfrastructureError, Result};

/// Human-readable progress on a text stream (stdout in the binary).
pub struct ConsoleProgress<W: Write + Send> {
    out: Mutex<W>,
    quiet: bool,
}

impl ConsoleProgress<io::Stdout> {
    pub fn stdout(quiet: bool) -> Self {
        Self::new(io::stdout(), quiet)
    }
}

impl<W: Write + Send> ConsoleProgress<W> {
    pub fn new(out: W, quiet: bool) -> Self {
        Self { out: Mutex::new(out), quiet }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn line(&self, text: std::fmt::Arguments<'_>) -> Result<()> {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(out, "{text}").map_err(|source| InfrastructureError::Output { source })?;
        Ok(())
    }
}

fn label(action: CopyAction) -> &'static str {
    match action {
        CopyAction::Copied => "Copied",
        CopyAction::Skipped => "Skipped (file exists)",
        CopyAction::Overwritten => "Overwriting",
        CopyAction::Renamed => "Renamed and copied",
    }
}

impl<W: Write + Send> ProgressSink for ConsoleProgress<W> {
    fn on_start(&self, source: &Path, destination: &Path, policy: OverwritePolicy) -> Result<()> {
        self.line(format_args!(
            "Organizing files from '{}' to '{}' (overwrite mode: {policy})...",
            source.display(),
            destination.display()
        ))
    }

    fn on_file(&self, outcome: &CopyOutcome) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.line(format_args!(
            "{}: {} -> {}",
            label(outcome.action),
            outcome.source.display(),
            outcome.destination.display()
        ))
    }

    fn on_complete(&self, summary: &RunSummary) -> Result<()> {
        self.line(format_args!("{summary}"))?;
        self.line(format_args!("File organization completed successfully!"))
    }
}
