//! Filesystem layer for the managed repo file renderer
//!
//! Provides crash-safe file commits (write-to-temp-then-rename), cooperative
//! cancellation, content checksums and format-agnostic config loading.

pub mod cancel;
pub mod checksum;
pub mod config;
pub mod error;
pub mod fs;
pub mod io;

pub use cancel::CancelToken;
pub use config::ConfigStore;
pub use error::{Error, Result};
pub use fs::{FileSystem, StdFs, SyncWrite};
pub use io::{CommitReport, RobustnessConfig};
