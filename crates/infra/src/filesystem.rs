// crates/infra/src/filesystem.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use daysort_ports::filesystem::{FileStore, TreeWalker, WalkEntries, WalkEntry, WalkPlan};
use daysort_shared_kernel::{InfrastructureError, Result};
use ignore::{DirEntry, WalkBuilder};
use tracing::{debug, trace};

use crate::persistence::FileCopier;

/// Sequential depth-first walker over the `ignore` crate, with every
/// ignore-file and hidden-file filter switched off.
///
/// Siblings are visited in file-name order so runs are reproducible.
/// Symbolic links are not followed.
#[derive(Debug, Default)]
pub struct LocalTreeWalker;

impl LocalTreeWalker {
    pub fn new() -> Self {
        Self
    }
}

impl TreeWalker for LocalTreeWalker {
    fn walk<'a>(&'a self, plan: &WalkPlan) -> WalkEntries<'a> {
        let root = plan.root.clone();
        let mut builder = WalkBuilder::new(&plan.root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        if let Some(pruned) = plan.exclude.as_deref().and_then(|ex| nested_subtree(&plan.root, ex)) {
            debug!(path = %pruned.display(), "destination lies inside source; pruning it from the walk");
            builder.filter_entry(move |entry| entry.path() != pruned.as_path());
        }

        Box::new(builder.build().map(move |item| -> Result<WalkEntry> {
            let entry = item.map_err(|err| InfrastructureError::Walk {
                path: root.clone(),
                reason: err.to_string(),
            })?;
            to_walk_entry(&entry)
        }))
    }
}

/// `exclude` re-expressed under `root`'s spelling when it is a proper
/// descendant of `root`; entry paths from the walker can then be compared directly.
fn nested_subtree(root: &Path, exclude: &Path) -> Option<PathBuf> {
    let root_real = fs::canonicalize(root).ok()?;
    let exclude_real = fs::canonicalize(exclude).ok()?;
    let rel = exclude_real.strip_prefix(&root_real).ok()?;
    if rel.as_os_str().is_empty() {
        return None;
    }
    Some(root.join(rel))
}

fn to_walk_entry(entry: &DirEntry) -> Result<WalkEntry> {
    let metadata = entry.metadata().map_err(|err| InfrastructureError::Walk {
        path: entry.path().to_path_buf(),
        reason: err.to_string(),
    })?;
    let modified = metadata.modified().map_err(|err| InfrastructureError::Walk {
        path: entry.path().to_path_buf(),
        reason: format!("modification time unavailable: {err}"),
    })?;

    trace!(path = %entry.path().display(), depth = entry.depth(), "visited");
    Ok(WalkEntry {
        path: entry.path().to_path_buf(),
        file_name: entry.file_name().to_os_string(),
        is_dir: metadata.is_dir(),
        modified: DateTime::<Local>::from(modified),
    })
}

/// Filesystem adapter implementing the `FileStore` port on the local disk.
#[derive(Debug, Default)]
pub struct LocalFileStore;

impl LocalFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl FileStore for LocalFileStore {
    fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok()
    }

    fn same_file(&self, a: &Path, b: &Path) -> bool {
        FileCopier::same_file(a, b)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .map_err(|source| InfrastructureError::DirectoryCreate { path: path.to_path_buf(), source })?;
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<u64> {
        Ok(FileCopier::copy(from, to)?)
    }
}
