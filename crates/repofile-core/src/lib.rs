//! Managed yum repository file rendering
//!
//! Turns an ordered list of [`RepositoryDescriptor`]s into the exact text of
//! an agent-managed `.repo` file and commits it atomically:
//!
//! ```text
//!   descriptors --serialize--> RepoFileDocument --Display--> text
//!                                                              |
//!                                         repofile-fs::io::write_atomic_with
//!                                                              |
//!                                                         destination
//! ```
//!
//! # Example
//!
//! ```
//! use repofile_core::{RepositoryDescriptor, serialize};
//!
//! let text = serialize(&[RepositoryDescriptor::new("id", "http://repo1-url/")]);
//! assert!(text.ends_with("[id]\nname=id\nbaseurl=http://repo1-url/\nenabled=1\ngpgcheck=1\n"));
//! ```

pub mod descriptor;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod policy;
pub mod renderer;

pub use descriptor::RepositoryDescriptor;
pub use diagnostics::{Diagnostic, diagnose};
pub use document::{Entry, MANAGED_HEADER, RepoFileDocument, Section};
pub use error::{Error, Result};
pub use policy::{DEFAULT_DESTINATION, RepositoryPolicy};
pub use renderer::{RepoFileRenderer, serialize};

pub use repofile_fs::{CancelToken, CommitReport, RobustnessConfig};
