//! Repository policy files
//!
//! A policy names the destination repo file and the repositories it should
//! contain. It can be written as TOML, JSON or YAML:
//!
//! ```toml
//! destination = "/etc/yum.repos.d/google_osconfig.repo"
//!
//! [[repositories]]
//! id = "epel"
//! display_name = "Extra Packages"
//! base_url = "https://mirror/epel/"
//! gpg_keys = ["https://mirror/RPM-GPG-KEY-EPEL"]
//! ```

use std::path::{Path, PathBuf};

use repofile_fs::ConfigStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{RepositoryDescriptor, Result};

/// Where the agent writes its managed yum repo file by default.
pub const DEFAULT_DESTINATION: &str = "/etc/yum.repos.d/google_osconfig.repo";

fn default_destination() -> PathBuf {
    PathBuf::from(DEFAULT_DESTINATION)
}

/// Desired set of yum repositories and where to write them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryPolicy {
    #[serde(default = "default_destination")]
    pub destination: PathBuf,

    /// Repositories in the order they should appear
    #[serde(default, alias = "yumRepositories")]
    pub repositories: Vec<RepositoryDescriptor>,
}

impl Default for RepositoryPolicy {
    fn default() -> Self {
        Self {
            destination: default_destination(),
            repositories: Vec::new(),
        }
    }
}

impl RepositoryPolicy {
    /// Load a policy file; the format follows the file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let policy: Self = ConfigStore::new().load(path)?;
        debug!(
            path = %path.display(),
            repositories = policy.repositories.len(),
            "loaded repository policy"
        );
        Ok(policy)
    }
}
