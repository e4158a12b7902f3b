//! Error types for repofile-core

/// Result type for repofile-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in repofile-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem or commit error from repofile-fs
    #[error(transparent)]
    Fs(#[from] repofile_fs::Error),
}

impl Error {
    /// Whether the operation stopped because it was cancelled.
    pub fn is_cancelled(&self) -> bool {
        match self {
            Self::Fs(e) => e.is_cancelled(),
        }
    }
}
