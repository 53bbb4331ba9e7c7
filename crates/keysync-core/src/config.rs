//! Run configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use keysync_fs::ConfigStore;

use crate::engine::SyncOptions;
use crate::{Error, Mode, Result};

/// Settings for a keysync run, as read from `keysync.toml`.
///
/// ```toml
/// primary = "en.json"
/// indent = 2
/// mode = "report"
/// verbose = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// File name of the primary document in each directory
    pub primary: Option<String>,
    /// Indentation width for written documents
    pub indent: usize,
    pub mode: Mode,
    /// Print per-document change summaries
    pub verbose: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            primary: None,
            indent: 4,
            mode: Mode::Write,
            verbose: false,
        }
    }
}

impl SyncConfig {
    /// Config file looked up in the working directory
    pub const FILE_NAME: &'static str = "keysync.toml";

    /// Load from a `.toml`, `.json` or `.yaml` file.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    /// Load `keysync.toml` from `dir` when present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(Self::FILE_NAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn primary_name(&self) -> Result<&str> {
        self.primary.as_deref().ok_or(Error::MissingPrimary)
    }

    pub fn options(&self) -> SyncOptions {
        SyncOptions {
            mode: self.mode,
            indent: self.indent,
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let config = SyncConfig::discover(temp.path()).unwrap();
        assert_eq!(config, SyncConfig::default());
        assert!(matches!(config.primary_name(), Err(Error::MissingPrimary)));
    }

    #[test]
    fn test_discover_reads_toml() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("keysync.toml"),
            "primary = \"en.json\"\nindent = 2\nmode = \"verify\"\n",
        )
        .unwrap();

        let config = SyncConfig::discover(temp.path()).unwrap();
        assert_eq!(config.primary_name().unwrap(), "en.json");
        assert_eq!(config.indent, 2);
        assert_eq!(config.mode, Mode::Report);
        assert!(!config.verbose);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("keysync.toml");
        fs::write(&path, "primary = \"en.json\"\nspaces = 2\n").unwrap();

        assert!(matches!(SyncConfig::load(&path), Err(Error::Fs(_))));
    }
}
