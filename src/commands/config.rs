use crate::core::config::SETTABLE_KEYS;
use crate::core::{Category, Config, CopyTask};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

pub fn execute(matches: &clap::ArgMatches, config: Config, config_path: &Path) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => show(&config, config_path),
        Some(("path", _)) => {
            println!("{}", config_path.display());
            Ok(())
        }
        Some(("set", sub_matches)) => set(sub_matches, config, config_path),
        Some(("reset", _)) => {
            Config::default().save_to(config_path)?;
            println!("{}", "✓ Configuration reset to defaults".green());
            Ok(())
        }
        _ => {
            println!("Use 'ipodsync config --help' for more information.");
            Ok(())
        }
    }
}

fn set(matches: &clap::ArgMatches, mut config: Config, config_path: &Path) -> Result<()> {
    let key = matches
        .get_one::<String>("key")
        .context("Key argument is required")?;
    let value = matches
        .get_one::<String>("value")
        .context("Value argument is required")?;

    config.set(key, value)?;
    config.save_to(config_path)?;

    println!("{} {}", format!("✓ {} set to:", key).green(), value.cyan().bold());
    Ok(())
}

fn show(config: &Config, config_path: &Path) -> Result<()> {
    println!(
        "{} {}",
        "Configuration".white().bold(),
        format!("({})", config_path.display()).dimmed()
    );
    println!();

    let row = |name: &str, value: String| println!("  {:<16} {}", name.white(), value.cyan());

    row("source", config.source_root.display().to_string());
    row("device", config.device_root.display().to_string());
    row("music-subdir", config.music_subpath.display().to_string());
    row("confirm-token", config.confirm_token.clone());
    row(
        "indexer",
        std::iter::once(config.indexer.program.as_str())
            .chain(config.indexer.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" "),
    );

    println!();
    println!("{}", "Sync tasks:".white().bold());
    for category in Category::ALL {
        let task = CopyTask::for_category(config, category);
        println!(
            "  {:<10} {} {} {}",
            category.name().yellow(),
            task.source.display(),
            "→".dimmed(),
            task.destination.display()
        );
    }
    let mirror = CopyTask::mirror(config);
    println!(
        "  {:<10} {} {} {}",
        "mirror".yellow(),
        mirror.source.display(),
        "→".dimmed(),
        mirror.destination.display()
    );

    println!();
    println!(
        "{} {}",
        "Settable keys:".dimmed(),
        SETTABLE_KEYS.join(", ").dimmed()
    );

    Ok(())
}
