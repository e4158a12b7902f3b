//! Cooperative cancellation for commit operations

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::{Error, Result};

/// Cancellation signal shared between a caller and a running commit.
///
/// Clones share the same flag. A token may also carry a deadline, after
/// which it reports itself as cancelled without anyone calling [`cancel`].
///
/// [`cancel`]: CancelToken::cancel
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelToken {
    /// Create a token that is only cancelled explicitly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a token that expires at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            flag: Arc::default(),
            deadline: Some(deadline),
        }
    }

    /// Create a token that expires `timeout` from now.
    ///
    /// A timeout too large to represent yields a token without a deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            flag: Arc::default(),
            deadline: Instant::now().checked_add(timeout),
        }
    }

    /// Request cancellation. Visible to every clone of this token.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.is_cancelled_at(Instant::now())
    }

    /// Whether the token counts as cancelled when the clock reads `now`.
    pub fn is_cancelled_at(&self, now: Instant) -> bool {
        self.flag.load(Ordering::SeqCst) || self.deadline.is_some_and(|d| now >= d)
    }

    /// Fail with [`Error::Cancelled`] for `path` if cancellation was requested.
    pub fn check(&self, path: &Path) -> Result<()> {
        if self.is_cancelled() {
            return Err(Error::Cancelled {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }
}
