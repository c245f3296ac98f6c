// crates/infra/src/persistence/file_copier.rs
use std::{
    fs::{self, File},
    io,
    path::Path,
};

use daysort_shared_kernel::{InfraResult, InfrastructureError};

/// Byte copy plus permission bits. Timestamps and ownership are not carried over.
pub struct FileCopier;

impl FileCopier {
    /// Stream `from` into `to`, creating or truncating `to`, then apply the
    /// source's permission bits to `to`.
    pub fn copy(from: &Path, to: &Path) -> InfraResult<u64> {
        let fail = |operation, source| Self::error(from, to, operation, source);

        // Truncating `to` would empty `from` before a single byte is read.
        if Self::same_file(from, to) {
            let reason = io::Error::new(io::ErrorKind::InvalidInput, "source and destination are the same file");
            return Err(fail("same file", reason));
        }

        let bytes = {
            let mut reader = File::open(from).map_err(|e| fail("open source", e))?;
            let mut writer = File::create(to).map_err(|e| fail("create destination", e))?;
            io::copy(&mut reader, &mut writer).map_err(|e| fail("stream bytes", e))?
        };

        let permissions = fs::metadata(from).map_err(|e| fail("read source mode", e))?.permissions();
        fs::set_permissions(to, permissions).map_err(|e| fail("set destination mode", e))?;

        Ok(bytes)
    }

    /// Both paths exist and canonicalize to the same location.
    pub fn same_file(a: &Path, b: &Path) -> bool {
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    fn error(from: &Path, to: &Path, operation: &'static str, source: io::Error) -> InfrastructureError {
        InfrastructureError::Copy { from: from.to_path_buf(), to: to.to_path_buf(), operation, source }
    }
}
