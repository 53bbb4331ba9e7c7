//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// keysync - Keep the key structure of JSON documents aligned with a primary file
#[derive(Parser, Debug)]
#[command(name = "keysync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ./keysync.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Arguments shared by every command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TargetArgs {
    /// Files or directories to process
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// File name of the primary document in each directory (e.g. en.json)
    #[arg(short, long, env = "KEYSYNC_PRIMARY")]
    pub primary: Option<String>,

    /// Indentation width for written documents (0 for compact output)
    #[arg(short, long)]
    pub indent: Option<usize>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Align target documents with their primary and write them back
    ///
    /// Examples:
    ///   keysync sync -p en.json locales/     # Align every directory under locales/
    ///   keysync sync -p en.json --dry-run    # Preview without writing
    Sync {
        #[command(flatten)]
        targets: TargetArgs,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Report unaligned documents without changing them
    ///
    /// Exits with an error when any document is unaligned, which makes it
    /// suitable for CI.
    Check {
        #[command(flatten)]
        targets: TargetArgs,
    },

    /// Show what sync would change as a unified diff
    Diff {
        #[command(flatten)]
        targets: TargetArgs,
    },
}
