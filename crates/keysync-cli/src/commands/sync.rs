//! Sync and check command implementations

use colored::Colorize;

use keysync_core::{Mode, SyncEngine};

use super::print_summaries;
use crate::context::RunContext;
use crate::error::Result;

/// Run the sync command
///
/// Aligns every target with its primary and writes the result. A config file
/// that sets report mode turns this into [`run_check`].
pub fn run_sync(ctx: &RunContext, dry_run: bool) -> Result<()> {
    if ctx.config.mode.is_report() {
        return run_check(ctx);
    }

    println!("{} Synchronizing JSON documents...", "=>".blue().bold());

    let mut options = ctx.config.options();
    options.mode = Mode::Write;
    options.dry_run = dry_run;
    let engine = SyncEngine::new(ctx.config.primary_name()?, options).with_base(&ctx.cwd);

    let report = engine.run(ctx.paths.as_slice())?;

    if ctx.config.verbose {
        print_summaries(&report);
    }

    let updated: Vec<&str> = if dry_run {
        report.changed().map(|o| o.name.as_str()).collect()
    } else {
        report.written().map(|o| o.name.as_str()).collect()
    };

    if updated.is_empty() {
        println!("{} Already synchronized. No changes needed.", "OK".green().bold());
    } else if dry_run {
        println!("{} Dry run, nothing written:", "OK".green().bold());
        for name in updated {
            println!("   {} [dry-run] Would update {}", "~".yellow(), name.cyan());
        }
    } else {
        println!("{} Synchronization complete:", "OK".green().bold());
        for name in updated {
            println!("   {} {}", "+".green(), name.cyan());
        }
    }

    Ok(())
}

/// Run the check command
///
/// Reports unaligned documents and fails if there are any. Never writes.
pub fn run_check(ctx: &RunContext) -> Result<()> {
    println!("{} Checking key structure...", "=>".blue().bold());

    let mut options = ctx.config.options();
    options.mode = Mode::Report;
    let engine = SyncEngine::new(ctx.config.primary_name()?, options).with_base(&ctx.cwd);

    let report = engine.run(ctx.paths.as_slice())?;

    if ctx.config.verbose {
        print_summaries(&report);
    }

    if report.is_clean() {
        println!(
            "{} All {} documents are aligned.",
            "OK".green().bold(),
            report.outcomes.len()
        );
        return Ok(());
    }

    println!("{} report found the following:", "keysync".cyan());
    for finding in &report.findings {
        println!("   {} {}", "!".red(), finding);
    }

    report.ensure_clean()?;
    Ok(())
}
