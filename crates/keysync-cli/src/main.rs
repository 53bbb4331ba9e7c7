//! keysync CLI
//!
//! Keeps the key structure of JSON documents, typically localization files,
//! aligned with a primary document in the same directory.

mod cli;
mod commands;
mod context;
mod error;

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use keysync_core::Mode;

use cli::{Cli, Commands};
use context::RunContext;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.config.as_deref(), cli.verbose),
        None => {
            println!("{} JSON key structure sync", "keysync".green().bold());
            println!();
            println!("Run {} for available commands.", "keysync --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, config: Option<&Path>, verbose: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::Sync { targets, dry_run } => {
            let ctx = RunContext::resolve(&cwd, config, &targets, None, verbose)?;
            commands::run_sync(&ctx, dry_run)
        }
        Commands::Check { targets } => {
            let ctx = RunContext::resolve(&cwd, config, &targets, Some(Mode::Report), verbose)?;
            commands::run_check(&ctx)
        }
        Commands::Diff { targets } => {
            let ctx = RunContext::resolve(&cwd, config, &targets, Some(Mode::Write), verbose)?;
            commands::run_diff(&ctx)
        }
    }
}
