//! Render command implementation

use std::io::Write;
use std::path::Path;

use repofile_core::{RepositoryPolicy, serialize};

use crate::error::Result;

/// Print the repo file `policy` would produce.
pub fn run_render(policy: &Path) -> Result<()> {
    let policy = RepositoryPolicy::load(policy)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(serialize(&policy.repositories).as_bytes())?;
    stdout.flush()?;
    Ok(())
}
