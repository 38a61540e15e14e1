//! Atomic file writes.
//!
//! Every generated file is written the same way:
//! 1. Write content to a temporary file (`.{filename}.tmp`) in the same directory
//! 2. Sync the file to disk
//! 3. Rename it over the target
//!
//! `rename` replaces an existing target on both POSIX and Windows, and is
//! atomic as long as source and target share a filesystem, which holds since
//! the temporary file lives next to the target. A crash can leave the
//! temporary file behind but never a half-written target.

use crate::error::{CrxError, Result};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating missing parent directories.
///
/// # Example
///
/// ```no_run
/// use crx_scaffold::fs::atomic_write;
/// use std::path::Path;
///
/// atomic_write(Path::new("demo/manifest.json"), b"{}")?;
/// # Ok::<(), crx_scaffold::error::CrxError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| CrxError::write(parent, e))?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CrxError::write(path, e)
    })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CrxError::write(path, e)
    })?;

    Ok(())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            CrxError::write(
                target,
                io::Error::new(io::ErrorKind::InvalidInput, "invalid file path"),
            )
        })?;

    let parent = target.parent().unwrap_or(Path::new("."));
    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}
