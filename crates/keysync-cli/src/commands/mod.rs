//! Command implementations

pub mod diff;
pub mod sync;

pub use diff::run_diff;
pub use sync::{run_check, run_sync};

use colored::Colorize;

use keysync_core::RunReport;
use keysync_tree::KeyList;

/// Print the per-document change summaries of a run.
pub(crate) fn print_summaries(report: &RunReport) {
    for summary in report.summaries() {
        for line in summary.lines() {
            println!(
                "   {} {}: {}",
                line.prefix,
                line.name.cyan(),
                colorize_keys(&line.keys)
            );
        }
    }
}

fn colorize_keys(keys: &KeyList) -> String {
    let shown = keys
        .shown()
        .iter()
        .map(|k| k.cyan().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    if keys.more() > 0 {
        format!("{shown} and {} more", keys.more().to_string().magenta())
    } else {
        shown
    }
}
