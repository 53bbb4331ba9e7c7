//! Discovery of JSON documents and grouping around a primary file
//!
//! Every directory forms one group: the file named like the primary is the
//! template, every other JSON file next to it is a target.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::{Error, Result};

/// The documents of one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentGroup {
    pub dir: PathBuf,
    pub primary: Option<PathBuf>,
    pub targets: Vec<PathBuf>,
}

impl DocumentGroup {
    fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            ..Self::default()
        }
    }

    /// A group needs a primary and at least one target to be synchronized.
    pub fn is_syncable(&self) -> bool {
        self.primary.is_some() && !self.targets.is_empty()
    }

    /// All files of the group, primary first.
    pub fn files(&self) -> impl Iterator<Item = &PathBuf> {
        self.primary.iter().chain(self.targets.iter())
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn is_node_modules(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == "node_modules"
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Expand files and directories into a sorted list of JSON files.
///
/// Files are taken as given. Directories are walked recursively, skipping
/// hidden entries and `node_modules`.
pub fn collect_json_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        let path = path.as_ref();
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if !path.is_dir() {
            return Err(Error::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
            ));
        }

        for entry in WalkDir::new(path)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !(is_hidden(e) || is_node_modules(e)))
        {
            let entry = entry.map_err(|e| Error::Walk {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            if entry.file_type().is_file() && is_json(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }

    files.sort();
    files.dedup();
    tracing::debug!(count = files.len(), "collected JSON files");
    Ok(files)
}

/// Group files by parent directory around the file named `primary_name`.
pub fn group_files<I>(files: I, primary_name: &str) -> Vec<DocumentGroup>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut groups: BTreeMap<PathBuf, DocumentGroup> = BTreeMap::new();

    for file in files {
        let dir = file.parent().map(Path::to_path_buf).unwrap_or_default();
        let group = groups
            .entry(dir.clone())
            .or_insert_with(|| DocumentGroup::new(dir));

        let is_primary = file
            .file_name()
            .is_some_and(|name| name == primary_name);
        if is_primary {
            group.primary = Some(file);
        } else {
            group.targets.push(file);
        }
    }

    groups.into_values().collect()
}
