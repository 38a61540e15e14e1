//! The [`ProjectFs`] trait and its local-disk implementation.

use super::atomic_write;
use crate::error::{CrxError, Result};
use std::fs;
use std::path::Path;

/// Filesystem operations used by the project generator.
pub trait ProjectFs {
    /// Create `path` and any missing parents. Succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Create or replace the file at `path` with `contents`.
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<()>;

    /// Copy `from` to `to`, replacing `to` if it exists.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<()>;
}

/// [`ProjectFs`] backed by the local filesystem.
///
/// File writes go through [`atomic_write`], so a file is either absent, the
/// previous version, or the complete new version.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl ProjectFs for LocalFs {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| CrxError::write(path, e))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<()> {
        atomic_write(path, contents)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<()> {
        fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| CrxError::write(to, e))
    }
}
