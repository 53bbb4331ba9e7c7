//! Bounded, human-readable change summaries

use crate::{Mode, SyncResult};

/// How many key names a summary lists before collapsing the rest
pub const SHOWN_KEYS: usize = 3;

/// A key name list cut down to [`SHOWN_KEYS`] entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyList {
    shown: Vec<String>,
    more: usize,
}

impl KeyList {
    pub fn new(keys: &[String]) -> Self {
        let shown: Vec<String> = keys.iter().take(SHOWN_KEYS).cloned().collect();
        let more = keys.len() - shown.len();
        Self { shown, more }
    }

    /// The key names listed explicitly.
    pub fn shown(&self) -> &[String] {
        &self.shown
    }

    /// How many keys were left out.
    pub fn more(&self) -> usize {
        self.more
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }
}

impl std::fmt::Display for KeyList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.shown.join(", "))?;
        if self.more > 0 {
            write!(f, " and {} more", self.more)?;
        }
        Ok(())
    }
}

/// One line of a document's change summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub prefix: &'static str,
    pub name: String,
    pub keys: KeyList,
}

impl std::fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.prefix, self.name, self.keys)
    }
}

/// Pushed and removed key summaries for one document.
///
/// Wording follows the mode: in report mode nothing was changed, so pushed
/// keys are "missing" and removed keys are "orphaned".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    pub pushed: Option<SummaryLine>,
    pub removed: Option<SummaryLine>,
}

impl ChangeSummary {
    pub fn new(name: &str, result: &SyncResult, mode: Mode) -> Self {
        let (pushed_prefix, removed_prefix) = match mode {
            Mode::Write => ("Pushed to", "Removed from"),
            Mode::Report => ("Missing keys in", "Orphaned keys found in"),
        };

        Self {
            pushed: summary_line(pushed_prefix, name, &result.pushed),
            removed: summary_line(removed_prefix, name, &result.removed),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &SummaryLine> {
        self.pushed.iter().chain(self.removed.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.pushed.is_none() && self.removed.is_none()
    }
}

fn summary_line(prefix: &'static str, name: &str, keys: &[String]) -> Option<SummaryLine> {
    if keys.is_empty() {
        return None;
    }
    Some(SummaryLine {
        prefix,
        name: name.to_string(),
        keys: KeyList::new(keys),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_short_list_shows_everything() {
        let list = KeyList::new(&keys(&["a", "b", "c"]));
        assert_eq!(list.to_string(), "a, b, c");
        assert_eq!(list.more(), 0);
    }

    #[test]
    fn test_long_list_is_collapsed() {
        let list = KeyList::new(&keys(&["a", "b", "c", "d", "e"]));
        assert_eq!(list.to_string(), "a, b, c and 2 more");
        assert_eq!(list.shown().len(), SHOWN_KEYS);
    }

    #[test]
    fn test_empty_result_has_no_lines() {
        let summary = ChangeSummary::new("fr.json", &SyncResult::new(), Mode::Write);
        assert!(summary.is_empty());
        assert_eq!(summary.lines().count(), 0);
    }
}
