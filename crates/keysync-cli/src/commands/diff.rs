//! Diff command implementation
//!
//! Runs a write-mode sync in memory and prints what would change.

use colored::Colorize;
use similar::{ChangeTag, TextDiff};

use keysync_core::{Mode, SyncEngine, TargetOutcome};

use crate::context::RunContext;
use crate::error::Result;

/// Run the diff command
pub fn run_diff(ctx: &RunContext) -> Result<()> {
    let mut options = ctx.config.options();
    options.mode = Mode::Write;
    options.dry_run = true;
    let engine = SyncEngine::new(ctx.config.primary_name()?, options).with_base(&ctx.cwd);

    let report = engine.run(ctx.paths.as_slice())?;

    let mut changed = 0;
    for outcome in report.changed() {
        print!("{}", render_diff(outcome, true));
        changed += 1;
    }

    if changed == 0 {
        println!("{} No changes. Documents are in sync.", "OK".green().bold());
    } else {
        println!();
        println!("{} {} document(s) would change.", "=>".blue().bold(), changed);
    }
    Ok(())
}

/// Unified diff between a target's current and synchronized text.
pub(crate) fn render_diff(outcome: &TargetOutcome, color: bool) -> String {
    let paint = |text: String, tag: Option<ChangeTag>| -> String {
        if !color {
            return text;
        }
        match tag {
            Some(ChangeTag::Delete) => text.red().to_string(),
            Some(ChangeTag::Insert) => text.green().to_string(),
            Some(ChangeTag::Equal) => text,
            None => text.cyan().to_string(),
        }
    };

    let diff = TextDiff::from_lines(outcome.original.as_str(), outcome.rendered.as_str());
    let mut unified = diff.unified_diff();
    unified.context_radius(3);

    let mut out = String::new();
    out.push_str(&paint(format!("--- a/{}\n", outcome.name), Some(ChangeTag::Delete)));
    out.push_str(&paint(format!("+++ b/{}\n", outcome.name), Some(ChangeTag::Insert)));

    for hunk in unified.iter_hunks() {
        out.push_str(&paint(format!("{}\n", hunk.header()), None));
        for change in hunk.iter_changes() {
            let sign = match change.tag() {
                ChangeTag::Delete => "-",
                ChangeTag::Insert => "+",
                ChangeTag::Equal => " ",
            };
            let mut line = format!("{sign}{}", change.value());
            if change.missing_newline() {
                line.push('\n');
            }
            out.push_str(&paint(line, Some(change.tag())));
        }
    }
    out
}
