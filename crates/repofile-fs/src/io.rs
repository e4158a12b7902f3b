//! Atomic file commits
//!
//! Content is written to a uniquely named temp file beside the destination
//! and renamed over it, so readers see either the old file or the complete
//! new one.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{CancelToken, Error, FileSystem, Result, StdFs, SyncWrite, checksum};

/// Durability settings for [`write_atomic_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobustnessConfig {
    /// Sync the temp file to disk before renaming it into place.
    pub enable_fsync: bool,
}

impl Default for RobustnessConfig {
    fn default() -> Self {
        Self { enable_fsync: true }
    }
}

/// What a successful commit wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitReport {
    pub path: PathBuf,
    pub bytes: usize,
    /// `sha256:<hex>` of the committed content
    pub checksum: String,
}

/// Removes the temp file on drop unless the commit went through.
struct TempGuard<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    path: PathBuf,
    armed: bool,
}

impl<F: FileSystem + ?Sized> Drop for TempGuard<'_, F> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        match self.fs.remove_file(&self.path) {
            Ok(()) => debug!(temp = %self.path.display(), "discarded temp file"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(temp = %self.path.display(), error = %e, "failed to remove temp file"),
        }
    }
}

/// Temp file path for `destination`, in the same directory.
///
/// The name is `.<file_name>.<uuid>.tmp` so concurrent writers never share
/// a temp file.
pub fn temp_path_for(destination: &Path) -> Result<PathBuf> {
    let file_name = destination.file_name().ok_or_else(|| {
        Error::prepare(
            destination,
            io::Error::new(io::ErrorKind::InvalidInput, "destination has no file name"),
        )
    })?;
    let temp_name = format!(
        ".{}.{}.tmp",
        file_name.to_string_lossy(),
        Uuid::new_v4().simple()
    );
    Ok(destination.with_file_name(temp_name))
}

/// Commit `content` to `path` through `fs`.
///
/// Cancellation is checked before any I/O and again before the rename. The
/// rename itself is not cancellable. On every failure the temp file is
/// removed and `path` is left as it was. The parent directory must exist.
pub fn write_atomic_with<F: FileSystem + ?Sized>(
    fs: &F,
    path: &Path,
    content: &[u8],
    config: RobustnessConfig,
    cancel: &CancelToken,
) -> Result<CommitReport> {
    cancel.check(path)?;

    let temp_path = temp_path_for(path)?;
    let mut file = fs
        .create_new(&temp_path)
        .map_err(|e| Error::prepare(&temp_path, e))?;
    let mut guard = TempGuard {
        fs,
        path: temp_path,
        armed: true,
    };
    debug!(temp = %guard.path.display(), "created temp file");

    let staged = stage(&mut *file, content, config);
    // Close the handle before renaming.
    drop(file);
    staged.map_err(|e| Error::write(&guard.path, e))?;

    cancel.check(path)?;

    fs.rename(&guard.path, path).map_err(|e| Error::commit(path, e))?;
    guard.armed = false;

    let report = CommitReport {
        path: path.to_path_buf(),
        bytes: content.len(),
        checksum: checksum::compute_content_checksum(content),
    };
    info!(
        path = %path.display(),
        bytes = report.bytes,
        checksum = %report.checksum,
        "committed file"
    );
    Ok(report)
}

fn stage(file: &mut dyn SyncWrite, content: &[u8], config: RobustnessConfig) -> io::Result<()> {
    file.write_all(content)?;
    file.flush()?;
    if config.enable_fsync {
        file.sync_all()?;
    }
    Ok(())
}

/// Commit `content` to `path` on the host filesystem without cancellation.
pub fn write_atomic(path: &Path, content: &[u8], config: RobustnessConfig) -> Result<CommitReport> {
    write_atomic_with(&StdFs, path, content, config, &CancelToken::new())
}

/// Commit text content to `path` with default settings.
pub fn write_text(path: &Path, content: &str) -> Result<CommitReport> {
    write_atomic(path, content.as_bytes(), RobustnessConfig::default())
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
