// Byte progress bar and console reporting of pipeline events

use colored::Colorize;
use std::io::{self, Write};

use crate::core::cleaner::CleanAction;
use crate::core::pipeline::{SyncEvent, SyncObserver};
use crate::ui::formatters::{format_size, percentage, plural};
use crate::ui::prompts::{info, success, warn};

/// Display a byte progress bar on the current line
///
/// # Arguments
/// * `copied` - Bytes copied so far
/// * `total` - Total bytes expected
/// * `prefix` - Text to display before the progress bar
pub fn show_progress_bar(copied: u64, total: u64, prefix: &str) {
    let percent = percentage(copied, total);

    let bar_length: usize = 30;
    let filled = percent * bar_length / 100;
    let empty = bar_length.saturating_sub(filled);

    print!(
        "\r{} [{}{}] {}% ({}/{}) ",
        prefix.white(),
        "=".repeat(filled).green(),
        " ".repeat(empty),
        percent,
        format_size(copied),
        format_size(total)
    );

    io::stdout().flush().ok();
}

/// Prints pipeline events for a human at the terminal
#[derive(Debug, Default)]
pub struct ConsoleObserver {
    bar_visible: bool,
}

impl ConsoleObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// End the progress line so following output starts on a fresh one
    pub fn finish(&mut self) {
        if self.bar_visible {
            println!();
            self.bar_visible = false;
        }
    }
}

impl SyncObserver for ConsoleObserver {
    fn on_event(&mut self, event: SyncEvent<'_>) {
        match event {
            SyncEvent::CheckingMounts => info("🔍 Checking mounts..."),
            SyncEvent::MountsReady => success("✅ Network share and device found."),
            SyncEvent::Cleaned { task, action } => {
                let path = task.destination.display().to_string();
                match action {
                    CleanAction::Cleared => {
                        println!("{} {}", "🗑️  Cleared".green(), path.dimmed())
                    }
                    CleanAction::Created => {
                        println!("{} {}", "📂 Created".green(), path.dimmed())
                    }
                }
            }
            SyncEvent::Mapping => info("📦 Mapping files on the share..."),
            SyncEvent::SourceSkipped { label } => {
                warn(&format!("no source folder for '{}', skipping it", label))
            }
            SyncEvent::Copying { files, total_bytes } => {
                println!(
                    "{} {} ({})",
                    "🚀 Copying".cyan().bold(),
                    plural(files, "file", "files").yellow().bold(),
                    format_size(total_bytes).yellow().bold()
                );
                show_progress_bar(0, total_bytes, "Syncing");
                self.bar_visible = true;
            }
            SyncEvent::Progress {
                copied_bytes,
                total_bytes,
            } => {
                show_progress_bar(copied_bytes, total_bytes, "Syncing");
                self.bar_visible = true;
            }
            SyncEvent::Indexing => {
                self.finish();
                info("🎵 Rebuilding playlists...");
            }
        }
    }
}
