//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Render and apply agent-managed yum repository files
#[derive(Parser, Debug)]
#[command(name = "repofile")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the repo file a policy would produce
    Render {
        /// Policy file (.toml, .json, .yaml)
        policy: PathBuf,
    },

    /// Write the repo file for a policy atomically
    ///
    /// Examples:
    ///   repofile apply policy.toml
    ///   repofile apply policy.json --dest /tmp/test.repo --json
    Apply {
        /// Policy file (.toml, .json, .yaml)
        policy: PathBuf,

        /// Override the policy's destination path
        #[arg(short, long, env = "REPOFILE_DEST")]
        dest: Option<PathBuf>,

        /// Skip syncing the file to disk before the rename
        #[arg(long)]
        no_fsync: bool,

        /// Give up if the write has not been committed within this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Output the commit report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report repositories whose ids or urls will render oddly
    Check {
        /// Policy file (.toml, .json, .yaml)
        policy: PathBuf,
    },
}
