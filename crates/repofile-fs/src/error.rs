//! Error types for repofile-fs

use std::path::PathBuf;

/// Result type for repofile-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in repofile-fs operations
///
/// The commit variants (`Cancelled`, `Prepare`, `Write`, `Commit`) name the
/// stage that failed. None of them leave the destination modified.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cancelled before committing {path}")]
    Cancelled { path: PathBuf },

    #[error("Failed to prepare temp file {path}: {source}")]
    Prepare {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write temp file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to commit {path}: {source}")]
    Commit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn prepare(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Prepare {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub fn commit(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Commit {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from a cancelled commit.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}
