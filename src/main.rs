use anyhow::Result;
use std::path::PathBuf;
use std::process;

use ipodsync::cli::build_cli;
use ipodsync::commands;
use ipodsync::core::Config;
use ipodsync::ui;
use ipodsync::SyncError;

fn main() {
    if let Err(e) = run() {
        ui::error(&format!("❌ Error: {:#}", e));
        if e
            .downcast_ref::<SyncError>()
            .is_some_and(SyncError::is_missing_mount)
        {
            ui::error_hint("Check that the network share and the iPod are mounted, or fix the paths with 'ipodsync config set'.");
        }
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = build_cli().get_matches();

    ipodsync::init_logging(matches.get_flag("verbose"));

    if matches.get_flag("version") {
        return commands::version();
    }

    let config_path = match matches.get_one::<String>("config") {
        Some(path) => PathBuf::from(path),
        None => Config::get_config_path()?,
    };
    let config = Config::load_from(&config_path)?;
    log::debug!("Loaded configuration from {:?}", config_path);

    match matches.subcommand() {
        Some(("mirror", sub_matches)) => commands::mirror(sub_matches, &config),
        Some(("sync", sub_matches)) => commands::sync(sub_matches, &config),
        Some(("config", sub_matches)) => {
            commands::config::execute(sub_matches, config, &config_path)
        }
        Some(("completions", sub_matches)) => {
            let mut cli = build_cli();
            commands::completions::execute(sub_matches, &mut cli)
        }
        Some(("version", _)) => commands::version(),
        _ => {
            println!("Welcome to ipodsync!");
            println!("Use 'ipodsync --help' for more information.");
            Ok(())
        }
    }
}
