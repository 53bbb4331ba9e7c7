//! [`LocaleTree`] builder for keysync test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// A temporary directory of JSON documents with helpers for setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use keysync_test_utils::LocaleTree;
/// use serde_json::json;
///
/// let tree = LocaleTree::new();
/// tree.write_json("locales/en.json", &json!({"hello": "Hello"}))
///     .write("locales/fr.json", "{}");
/// tree.assert_file_exists("locales/fr.json");
/// ```
pub struct LocaleTree {
    temp_dir: TempDir,
}

impl Default for LocaleTree {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("LocaleTree::new: failed to create temp dir"),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a file inside the tree.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write raw text, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("LocaleTree::write: {}: {e}", path.display()));
        self
    }

    /// Write a JSON value, pretty-printed.
    pub fn write_json(&self, relative: &str, value: &Value) -> &Self {
        let text = serde_json::to_string_pretty(value).unwrap();
        self.write(relative, &text)
    }

    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("LocaleTree::read: {}: {e}", path.display()))
    }

    pub fn read_json(&self, relative: &str) -> Value {
        let text = self.read(relative);
        serde_json::from_str(&text)
            .unwrap_or_else(|e| panic!("LocaleTree::read_json: {relative}: {e}"))
    }

    /// Assert that a file exists at `relative`.
    pub fn assert_file_exists(&self, relative: &str) {
        assert!(
            self.path(relative).is_file(),
            "expected file {relative} to exist"
        );
    }

    /// Assert that a file parses to `expected`.
    pub fn assert_json(&self, relative: &str, expected: &Value) {
        let actual = self.read_json(relative);
        assert_eq!(&actual, expected, "unexpected content in {relative}");
    }
}
