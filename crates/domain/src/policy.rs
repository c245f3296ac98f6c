use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use daysort_shared_kernel::DomainError;

use crate::{model::CopyAction, naming::unique_sibling};

/// How to treat a destination file that already exists. Fixed for the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OverwritePolicy {
    /// Leave the existing file alone and move on.
    #[default]
    Skip,
    /// Replace contents and permission bits of the existing file.
    Overwrite,
    /// Copy next to it as `name_N.ext`.
    Rename,
}

impl OverwritePolicy {
    pub const ALL: [Self; 3] = [Self::Skip, Self::Overwrite, Self::Rename];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::Overwrite => "overwrite",
            Self::Rename => "rename",
        }
    }

    /// Decide where (and whether) a file lands given its computed destination.
    ///
    /// `exists` is consulted for the destination and, under [`Self::Rename`],
    /// for every sibling candidate until a free one is found.
    pub fn resolve<F>(self, destination: PathBuf, mut exists: F) -> Resolution
    where
        F: FnMut(&Path) -> bool,
    {
        if !exists(&destination) {
            return Resolution::CopyTo { path: destination, action: CopyAction::Copied };
        }

        match self {
            Self::Skip => Resolution::Skip { existing: destination },
            Self::Overwrite => Resolution::CopyTo { path: destination, action: CopyAction::Overwritten },
            Self::Rename => {
                let path = unique_sibling(&destination, exists);
                Resolution::CopyTo { path, action: CopyAction::Renamed }
            }
        }
    }
}

impl fmt::Display for OverwritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverwritePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str() == s)
            .ok_or_else(|| DomainError::InvalidOverwriteMode { value: s.to_string() })
    }
}

/// Outcome of applying a policy to one destination path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    CopyTo { path: PathBuf, action: CopyAction },
    Skip { existing: PathBuf },
}
