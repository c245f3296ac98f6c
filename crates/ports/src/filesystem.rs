// crates/ports/src/filesystem.rs
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use daysort_shared_kernel::Result;

/// Input parameters controlling a tree walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkPlan {
    pub root: PathBuf,
    /// Subtree to leave out when it lies inside `root` (the destination).
    pub exclude: Option<PathBuf>,
}

/// A filesystem entry visited during the walk. Lives only for one iteration step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub file_name: OsString,
    pub is_dir: bool,
    pub modified: DateTime<Local>,
}

pub type WalkEntries<'a> = Box<dyn Iterator<Item = Result<WalkEntry>> + 'a>;

/// Port for lazily enumerating a tree depth-first.
pub trait TreeWalker: Send + Sync {
    fn walk<'a>(&'a self, plan: &WalkPlan) -> WalkEntries<'a>;
}

/// Port for the destination side: existence checks, directories and byte copies.
pub trait FileStore: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    /// Whether `a` and `b` resolve to the same file on disk.
    fn same_file(&self, a: &Path, b: &Path) -> bool;

    /// Create `path` and any missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Stream `from` into `to` (created or truncated), then give `to` the
    /// permission bits of `from`. Returns the number of bytes copied.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<u64>;
}
