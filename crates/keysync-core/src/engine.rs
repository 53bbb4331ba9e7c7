//! SyncEngine implementation
//!
//! The SyncEngine walks every directory group, synchronizes each target
//! document against its primary, and applies the mode policy to the outcome.

use std::path::{Path, PathBuf};

use keysync_fs::{DocumentGroup, RobustnessConfig, canonical, display_name, io};
use keysync_tree::{ChangeSummary, Document, SyncResult, synchronize_with};

use crate::mode::{Mode, SyncPolicy};
use crate::observer::TracingSink;
use crate::{Result, SyncConfig};

/// Options for a sync run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    pub mode: Mode,
    /// Indentation width for written documents; `0` writes compact JSON
    pub indent: usize,
    /// Compute everything but write nothing
    pub dry_run: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Write,
            indent: 4,
            dry_run: false,
        }
    }
}

/// What happened to one target document
#[derive(Debug, Clone)]
pub struct TargetOutcome {
    /// Display name, relative to the engine's base directory
    pub name: String,
    pub path: PathBuf,
    pub result: SyncResult,
    /// Text as read from disk
    pub original: String,
    /// Text after synchronization, rendered with the configured indent
    pub rendered: String,
    /// Whether `rendered` was written back
    pub written: bool,
}

impl TargetOutcome {
    /// Whether synchronization would change the file's text.
    pub fn is_changed(&self) -> bool {
        self.original != self.rendered
    }

    pub fn summary(&self, mode: Mode) -> ChangeSummary {
        ChangeSummary::new(&self.name, &self.result, mode)
    }
}

/// Report from a sync run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub mode: Mode,
    pub outcomes: Vec<TargetOutcome>,
    /// Problems deferred by report mode
    pub findings: Vec<String>,
    /// Files in groups lacking a primary or targets
    pub ignored: Vec<PathBuf>,
}

impl RunReport {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Fail with the number of findings when report mode found problems.
    pub fn ensure_clean(&self) -> Result<()> {
        if self.is_clean() {
            Ok(())
        } else {
            Err(crate::Error::ReportFailed {
                count: self.findings.len(),
            })
        }
    }

    pub fn written(&self) -> impl Iterator<Item = &TargetOutcome> {
        self.outcomes.iter().filter(|o| o.written)
    }

    pub fn changed(&self) -> impl Iterator<Item = &TargetOutcome> {
        self.outcomes.iter().filter(|o| o.is_changed())
    }

    /// Change summaries of every target that gained or lost keys.
    pub fn summaries(&self) -> impl Iterator<Item = ChangeSummary> + '_ {
        self.outcomes
            .iter()
            .map(|o| o.summary(self.mode))
            .filter(|s| !s.is_empty())
    }
}

/// Engine for synchronizing directories of JSON documents
pub struct SyncEngine {
    /// File name of the primary document in each directory
    primary_name: String,
    options: SyncOptions,
    /// Directory display names are relative to
    base: PathBuf,
    robustness: RobustnessConfig,
}

impl SyncEngine {
    /// Create an engine whose display names are relative to the current
    /// directory.
    pub fn new(primary_name: impl Into<String>, options: SyncOptions) -> Self {
        let base = std::env::current_dir().unwrap_or_default();
        Self {
            primary_name: primary_name.into(),
            options,
            base: canonical(&base).unwrap_or(base),
            robustness: RobustnessConfig::default(),
        }
    }

    /// Create an engine from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingPrimary`] if no primary is configured.
    pub fn from_config(config: &SyncConfig) -> Result<Self> {
        Ok(Self::new(config.primary_name()?, config.options()))
    }

    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        self.base = canonical(&base).unwrap_or(base);
        self
    }

    pub fn with_robustness(mut self, robustness: RobustnessConfig) -> Self {
        self.robustness = robustness;
        self
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    pub fn primary_name(&self) -> &str {
        &self.primary_name
    }

    /// Discover the JSON files under `paths` and synchronize every group.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or malformed files, and in write mode on the first
    /// sync problem. Report mode collects problems into
    /// [`RunReport::findings`] instead.
    pub fn run<P: AsRef<Path>>(&self, paths: &[P]) -> Result<RunReport> {
        let roots = paths
            .iter()
            .map(|p| canonical(p.as_ref()))
            .collect::<keysync_fs::Result<Vec<_>>>()?;
        let files = keysync_fs::collect_json_files(roots.as_slice())?;
        let groups = keysync_fs::group_files(files, &self.primary_name);
        self.run_groups(&groups)
    }

    /// Synchronize already grouped documents.
    pub fn run_groups(&self, groups: &[DocumentGroup]) -> Result<RunReport> {
        let mut report = RunReport::new(self.options.mode);

        for group in groups {
            if !group.is_syncable() {
                tracing::debug!(dir = %group.dir.display(), "ignoring group without primary or targets");
                report.ignored.extend(group.files().cloned());
                continue;
            }
            self.sync_group(group, &mut report)?;
        }

        if !report.findings.is_empty() {
            tracing::warn!(count = report.findings.len(), "report found problems");
        }
        Ok(report)
    }

    fn sync_group(&self, group: &DocumentGroup, report: &mut RunReport) -> Result<()> {
        let Some(primary_path) = &group.primary else {
            return Ok(());
        };
        // An unsyncable primary leaves the whole group alone
        let Some((primary, _)) = self.load(primary_path, report)? else {
            return Ok(());
        };

        for target_path in &group.targets {
            self.sync_target(&primary, target_path, report)?;
        }
        Ok(())
    }

    /// Read and parse one document, routing a non-object root through the
    /// mode policy.
    fn load(&self, path: &Path, report: &mut RunReport) -> Result<Option<(Document, String)>> {
        let name = display_name(path, &self.base);
        let text = io::read_text(path)?;

        match Document::parse(name, &text) {
            Ok(document) => Ok(Some((document, text))),
            Err(err @ keysync_tree::Error::UnsyncableRoot { .. }) => {
                self.options
                    .mode
                    .on_sync_error(err.to_string(), &mut report.findings)?;
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn sync_target(&self, primary: &Document, path: &Path, report: &mut RunReport) -> Result<()> {
        let Some((mut target, original)) = self.load(path, report)? else {
            return Ok(());
        };
        let name = target.name().to_string();
        let mode = self.options.mode;

        let mut result = SyncResult::new();
        synchronize_with(
            primary.root(),
            target.root_mut(),
            &mut TracingSink::new(&name, &mut result),
        );

        for mismatch in &result.mismatches {
            mode.on_sync_error(format!("{name} contains {mismatch}"), &mut report.findings)?;
        }
        for key in &result.depth_exceeded {
            mode.on_sync_error(
                format!("{name} exceeds maximum nesting depth at {key}"),
                &mut report.findings,
            )?;
        }

        let rendered = target.render(self.options.indent)?;
        let mut written = false;

        if mode.writes_targets() {
            if rendered != original && !self.options.dry_run {
                io::write_atomic(path, rendered.as_bytes(), self.robustness)?;
                written = true;
                tracing::info!(document = %name, "wrote synchronized document");
            }
        } else if !result.is_aligned() {
            let finding = format!("{name} contains unaligned key structure");
            tracing::warn!("{finding}");
            report.findings.push(finding);
        }

        report.outcomes.push(TargetOutcome {
            name,
            path: path.to_path_buf(),
            result,
            original,
            rendered,
            written,
        });
        Ok(())
    }
}
