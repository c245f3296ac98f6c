use std::{fmt, path::PathBuf};

/// What happened to a single source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyAction {
    Copied,
    Skipped,
    Overwritten,
    Renamed,
}

/// A processed file together with where it went (or where the blocking file is).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub action: CopyAction,
}

/// Per-action counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub copied: usize,
    pub overwritten: usize,
    pub renamed: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn record(&mut self, action: CopyAction) {
        match action {
            CopyAction::Copied => self.copied += 1,
            CopyAction::Skipped => self.skipped += 1,
            CopyAction::Overwritten => self.overwritten += 1,
            CopyAction::Renamed => self.renamed += 1,
        }
    }

    /// Files whose bytes were written to the destination.
    pub fn written(&self) -> usize {
        self.copied + self.overwritten + self.renamed
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} copied, {} overwritten, {} renamed, {} skipped",
            self.copied, self.overwritten, self.renamed, self.skipped
        )
    }
}
