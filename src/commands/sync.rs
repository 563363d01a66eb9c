use anyhow::{Context, Result};
use colored::Colorize;
use std::io;

use crate::core::pipeline::IndexerResult;
use crate::core::{
    AutoConfirm, Config, Confirmer, ExternalIndexer, PlaylistStyle, SyncMode, SyncOutcome,
    SyncPipeline, SyncPlan, SyncSummary,
};
use crate::ui::{error, format_size, plural, select_mode, success, warn, ConsoleObserver};

/// `ipodsync sync`: selected categories, cleared without asking
pub fn execute(matches: &clap::ArgMatches, config: &Config) -> Result<()> {
    let mode = match matches.get_one::<String>("mode") {
        Some(value) => value.parse::<SyncMode>()?,
        None => {
            let stdin = io::stdin();
            select_mode(&mut stdin.lock()).context("Failed to read menu choice")?
        }
    };
    log::debug!("Sync mode: {}", mode.cli_name());

    let plan = apply_indexer_flags(SyncPlan::categories(config, mode), matches)?;
    run_plan(&plan, config, &mut AutoConfirm)
}

/// Shared `--playlists` / `--skip-indexer` handling
pub(crate) fn apply_indexer_flags(plan: SyncPlan, matches: &clap::ArgMatches) -> Result<SyncPlan> {
    if matches.get_flag("skip-indexer") {
        return Ok(plan.without_indexer());
    }

    match matches.get_one::<String>("playlists") {
        Some(style) => Ok(plan.with_playlist_style(style.parse::<PlaylistStyle>()?)),
        None => Ok(plan),
    }
}

/// Run a plan against the real indexer with console output
pub(crate) fn run_plan(plan: &SyncPlan, config: &Config, confirmer: &mut dyn Confirmer) -> Result<()> {
    let mut indexer = ExternalIndexer::new(config.indexer.clone());
    let mut observer = ConsoleObserver::new();

    let outcome = SyncPipeline::new(confirmer, &mut indexer, &mut observer).run(plan);
    observer.finish();

    match outcome? {
        SyncOutcome::Cancelled => {
            println!("{}", "🚫 Operation cancelled.".yellow());
        }
        SyncOutcome::NothingToCopy { .. } => {
            warn("No files found on the source.");
        }
        SyncOutcome::Completed(summary) => {
            print_summary(&summary);
            success("🎧 iPod sync finished!");
        }
    }

    Ok(())
}

fn print_summary(summary: &SyncSummary) {
    let report = &summary.report;

    println!();
    println!("{}", "─".repeat(50));
    println!("{}", "Sync Summary".white().bold());
    println!("{}", "─".repeat(50));
    println!(
        "{} {} ({})",
        "Copied:".green().bold(),
        plural(report.copied_files, "file", "files").yellow().bold(),
        format_size(report.copied_bytes).yellow().bold()
    );

    if !report.is_clean() {
        println!(
            "{} {}",
            "Failed:".red().bold(),
            plural(report.failed_files(), "file", "files").red()
        );
        for failure in &report.failures {
            error(&format!(
                "  ❌ {}: {}",
                failure.source.display(),
                failure.error
            ));
        }
    }

    for label in &summary.skipped_sources {
        println!("{} {}", "Skipped:".yellow().bold(), label);
    }

    match &summary.indexer {
        IndexerResult::NotRun => println!("{}", "Playlist indexer skipped.".dimmed()),
        IndexerResult::Finished(status) if status.success() => {}
        IndexerResult::Finished(status) => warn(&format!("playlist indexer exited with {}", status)),
        IndexerResult::Failed(message) => warn(message),
    }

    println!();
}
