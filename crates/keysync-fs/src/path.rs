//! Display names for documents

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Absolute form of `path` without Windows verbatim prefixes.
pub fn canonical(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path).map_err(|e| Error::io(path, e))
}

/// Name a document by its path relative to `base`, with forward slashes.
///
/// Paths outside `base` keep their full form.
pub fn display_name(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative.to_string_lossy().replace('\\', "/")
}
