//! repofile CLI
//!
//! Renders yum repository policies into the agent-managed repo file.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow(), e);
    }
    tracing::debug!("Verbose mode enabled");

    execute_command(cli.command)
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Render { policy } => commands::run_render(&policy),
        Commands::Apply {
            policy,
            dest,
            no_fsync,
            timeout_ms,
            json,
        } => commands::run_apply(
            &policy,
            &commands::ApplyOptions {
                dest,
                fsync: !no_fsync,
                timeout_ms,
                json,
            },
        ),
        Commands::Check { policy } => commands::run_check(&policy),
    }
}
