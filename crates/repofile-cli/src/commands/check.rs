//! Check command implementation

use std::path::Path;

use colored::Colorize;
use repofile_core::{RepositoryPolicy, diagnose};

use crate::error::{CliError, Result};

/// Print diagnostics for `policy`; fails when there are any.
pub fn run_check(policy_path: &Path) -> Result<()> {
    let policy = RepositoryPolicy::load(policy_path)?;
    let findings = diagnose(&policy.repositories);

    if findings.is_empty() {
        println!(
            "{} {} repositories, no problems found",
            "OK".green().bold(),
            policy.repositories.len()
        );
        return Ok(());
    }

    for finding in &findings {
        println!("  {} {}", "!".yellow(), finding);
    }
    Err(CliError::user(format!(
        "{} problem(s) found in {}",
        findings.len(),
        policy_path.display()
    )))
}
