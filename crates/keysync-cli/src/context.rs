//! Resolution of the effective run configuration
//!
//! Precedence, lowest first: built-in defaults, the config file, command-line
//! flags. `check` and `diff` fix the mode; `sync` keeps the configured one.

use std::path::{Path, PathBuf};

use keysync_core::{Mode, SyncConfig};

use crate::cli::TargetArgs;
use crate::error::Result;

/// Everything a command needs to run
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Directory display names and relative paths are resolved against
    pub cwd: PathBuf,
    pub config: SyncConfig,
    /// Inputs, resolved against `cwd`
    pub paths: Vec<PathBuf>,
}

impl RunContext {
    pub fn resolve(
        cwd: &Path,
        config_path: Option<&Path>,
        targets: &TargetArgs,
        mode: Option<Mode>,
        verbose: bool,
    ) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => SyncConfig::load(&cwd.join(path))?,
            None => SyncConfig::discover(cwd)?,
        };

        if let Some(primary) = &targets.primary {
            config.primary = Some(primary.clone());
        }
        if let Some(indent) = targets.indent {
            config.indent = indent;
        }
        if let Some(mode) = mode {
            config.mode = mode;
        }
        config.verbose |= verbose;

        let paths = targets.paths.iter().map(|p| cwd.join(p)).collect();

        Ok(Self {
            cwd: cwd.to_path_buf(),
            config,
            paths,
        })
    }
}
