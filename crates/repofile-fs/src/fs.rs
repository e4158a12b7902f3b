//! Filesystem seam used by the atomic commit
//!
//! Production code goes through [`StdFs`]. Tests substitute implementations
//! that fail at a chosen stage to exercise the cleanup paths.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// A writable handle that can be flushed to stable storage.
pub trait SyncWrite: Write {
    fn sync_all(&mut self) -> io::Result<()>;
}

impl SyncWrite for File {
    fn sync_all(&mut self) -> io::Result<()> {
        File::sync_all(self)
    }
}

/// The filesystem operations a commit needs.
pub trait FileSystem {
    /// Create `path`, failing if it already exists.
    fn create_new(&self, path: &Path) -> io::Result<Box<dyn SyncWrite>>;

    /// Rename `from` onto `to`, replacing `to` if present.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// The host filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFs;

impl FileSystem for StdFs {
    fn create_new(&self, path: &Path) -> io::Result<Box<dyn SyncWrite>> {
        let file = OpenOptions::new().write(true).create_new(true).open(path)?;
        Ok(Box::new(file))
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn create_new(&self, path: &Path) -> io::Result<Box<dyn SyncWrite>> {
        (**self).create_new(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).rename(from, to)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        (**self).remove_file(path)
    }
}
