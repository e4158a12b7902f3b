//! Fault injection for atomic commits.

use repofile_fs::{CancelToken, FileSystem, StdFs, SyncWrite};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// The commit step at which [`FaultyFs`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Creating the temp file.
    Create,
    /// Writing bytes into the temp file.
    Write,
    /// Syncing the temp file to disk.
    Sync,
    /// Renaming the temp file over the destination.
    Rename,
}

/// Delegates to the host filesystem but fails at one [`Stage`].
///
/// Every path passed to `create_new` is recorded so tests can assert that
/// temp files were cleaned up.
#[derive(Debug)]
pub struct FaultyFs {
    fail_at: Option<Stage>,
    cancel_on_create: Option<CancelToken>,
    created: Mutex<Vec<PathBuf>>,
}

impl FaultyFs {
    /// A filesystem that fails at `stage`.
    pub fn failing_at(stage: Stage) -> Self {
        Self {
            fail_at: Some(stage),
            cancel_on_create: None,
            created: Mutex::new(Vec::new()),
        }
    }

    /// A filesystem that never fails but still records created paths.
    pub fn passthrough() -> Self {
        Self {
            fail_at: None,
            cancel_on_create: None,
            created: Mutex::new(Vec::new()),
        }
    }

    /// A filesystem that never fails but cancels `token` once the temp file
    /// exists, so the commit is cancelled after its content is staged.
    pub fn cancelling(token: CancelToken) -> Self {
        Self {
            cancel_on_create: Some(token),
            ..Self::passthrough()
        }
    }

    /// Temp paths created so far.
    pub fn created(&self) -> Vec<PathBuf> {
        self.created.lock().unwrap().clone()
    }

    fn injected(stage: Stage) -> io::Error {
        io::Error::other(format!("injected failure at {:?}", stage))
    }
}

struct FaultyFile {
    inner: Box<dyn SyncWrite>,
    fail_at: Option<Stage>,
}

impl Write for FaultyFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.fail_at == Some(Stage::Write) {
            // Leave a partial write behind before failing.
            let half = buf.len() / 2;
            self.inner.write_all(&buf[..half])?;
            return Err(FaultyFs::injected(Stage::Write));
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl SyncWrite for FaultyFile {
    fn sync_all(&mut self) -> io::Result<()> {
        if self.fail_at == Some(Stage::Sync) {
            return Err(FaultyFs::injected(Stage::Sync));
        }
        self.inner.sync_all()
    }
}

impl FileSystem for FaultyFs {
    fn create_new(&self, path: &Path) -> io::Result<Box<dyn SyncWrite>> {
        if self.fail_at == Some(Stage::Create) {
            return Err(Self::injected(Stage::Create));
        }
        let inner = StdFs.create_new(path)?;
        self.created.lock().unwrap().push(path.to_path_buf());
        if let Some(token) = &self.cancel_on_create {
            token.cancel();
        }
        Ok(Box::new(FaultyFile {
            inner,
            fail_at: self.fail_at,
        }))
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        if self.fail_at == Some(Stage::Rename) {
            return Err(Self::injected(Stage::Rename));
        }
        StdFs.rename(from, to)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        StdFs.remove_file(path)
    }
}
