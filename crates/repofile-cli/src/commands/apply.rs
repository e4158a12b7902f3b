//! Apply command implementation

use std::path::{Path, PathBuf};
use std::time::Duration;

use colored::Colorize;
use repofile_core::{
    CancelToken, CommitReport, RepoFileRenderer, RepositoryPolicy, RobustnessConfig,
};
use tracing::debug;

use crate::error::Result;

/// Flags for [`run_apply`].
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// Overrides the policy's destination
    pub dest: Option<PathBuf>,
    pub fsync: bool,
    pub timeout_ms: Option<u64>,
    pub json: bool,
}

/// Render `policy_path` and commit it to its destination.
pub fn run_apply(policy_path: &Path, options: &ApplyOptions) -> Result<()> {
    let report = apply(policy_path, options)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} {} ({} bytes, {})",
            "Wrote".green().bold(),
            report.path.display(),
            report.bytes,
            report.checksum.dimmed()
        );
    }
    Ok(())
}

fn apply(policy_path: &Path, options: &ApplyOptions) -> Result<CommitReport> {
    let policy = RepositoryPolicy::load(policy_path)?;
    let destination = options.dest.as_ref().unwrap_or(&policy.destination);

    let cancel = match options.timeout_ms {
        Some(ms) => CancelToken::with_timeout(Duration::from_millis(ms)),
        None => CancelToken::new(),
    };
    debug!(
        destination = %destination.display(),
        deadline = ?cancel.deadline(),
        "applying repository policy"
    );

    let renderer = RepoFileRenderer::new().with_robustness(RobustnessConfig {
        enable_fsync: options.fsync,
    });
    let report = renderer.render(&policy.repositories, destination, &cancel)?;
    Ok(report)
}
