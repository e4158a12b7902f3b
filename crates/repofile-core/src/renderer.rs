//! Serialize descriptors and commit the result

use std::path::Path;

use repofile_fs::{CancelToken, CommitReport, FileSystem, RobustnessConfig, StdFs, io};
use tracing::{debug, warn};

use crate::{RepoFileDocument, RepositoryDescriptor, Result, diagnose};

/// Exact text of the managed repo file for `descriptors`.
///
/// Deterministic: the same input always yields the same bytes.
pub fn serialize(descriptors: &[RepositoryDescriptor]) -> String {
    RepoFileDocument::from_descriptors(descriptors).to_string()
}

/// Writes managed repo files.
///
/// Generic over the filesystem so tests can inject failures; production
/// code uses [`RepoFileRenderer::new`] with the host filesystem.
#[derive(Debug, Clone, Default)]
pub struct RepoFileRenderer<F = StdFs> {
    fs: F,
    robustness: RobustnessConfig,
}

impl RepoFileRenderer<StdFs> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: FileSystem> RepoFileRenderer<F> {
    pub fn with_fs(fs: F) -> Self {
        Self {
            fs,
            robustness: RobustnessConfig::default(),
        }
    }

    pub fn with_robustness(mut self, robustness: RobustnessConfig) -> Self {
        self.robustness = robustness;
        self
    }

    /// Render `descriptors` and atomically replace `destination` with the result.
    ///
    /// Fails without touching the filesystem if `cancel` is already set.
    /// On any failure `destination` keeps its previous content, or stays absent.
    pub fn render(
        &self,
        descriptors: &[RepositoryDescriptor],
        destination: &Path,
        cancel: &CancelToken,
    ) -> Result<CommitReport> {
        cancel.check(destination)?;

        for finding in diagnose(descriptors) {
            warn!(path = %destination.display(), "{}", finding);
        }

        let text = serialize(descriptors);
        debug!(
            path = %destination.display(),
            repositories = descriptors.len(),
            bytes = text.len(),
            "serialized repo file"
        );

        let report =
            io::write_atomic_with(&self.fs, destination, text.as_bytes(), self.robustness, cancel)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serialize_empty_list() {
        assert_eq!(
            serialize(&[]),
            "# Repo file managed by Google OSConfig agent\n[main]\ngpgcheck=1\n"
        );
    }

    #[test]
    fn serialize_is_deterministic() {
        let repos = [
            RepositoryDescriptor::new("a", "http://a/").with_gpg_keys(["k1", "k2"]),
            RepositoryDescriptor::new("b", "http://b/").with_display_name("B"),
        ];
        assert_eq!(serialize(&repos), serialize(&repos));
    }

    #[test]
    fn render_writes_serialized_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("google_osconfig.repo");
        let repos = [RepositoryDescriptor::new("id", "http://repo1-url/")];

        let report = RepoFileRenderer::new()
            .render(&repos, &path, &CancelToken::new())
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, serialize(&repos));
        assert_eq!(report.bytes, written.len());
    }

    #[test]
    fn cancelled_render_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("google_osconfig.repo");
        let cancel = CancelToken::new();
        cancel.cancel();

        let err = RepoFileRenderer::new()
            .render(&[], &path, &cancel)
            .unwrap_err();

        assert!(err.is_cancelled());
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
