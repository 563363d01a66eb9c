// Command line definition, shared by main and shell completions

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, Command};

use crate::core::config::SETTABLE_KEYS;
use crate::core::SyncMode;

fn indexer_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("playlists")
            .long("playlists")
            .value_name("STYLE")
            .help("Playlist style passed to the indexer (dir: one per folder, id3: from tags)")
            .value_parser(PossibleValuesParser::new(["dir", "id3"])),
    )
    .arg(
        Arg::new("skip-indexer")
            .long("skip-indexer")
            .help("Do not run the playlist indexer after copying")
            .action(ArgAction::SetTrue),
    )
}

pub fn build_cli() -> Command {
    Command::new("ipodsync")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Mirror a network music share onto an iPod and rebuild its playlists")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .help("Show debug logging")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("FILE")
                .help("Use this configuration file instead of the default one"),
        )
        .subcommand(indexer_args(
            Command::new("mirror")
                .about("Wipe the whole music folder and copy the whole share onto it")
                .arg(
                    Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .help("Do not ask for the confirmation word before wiping")
                        .action(ArgAction::SetTrue),
                ),
        ))
        .subcommand(indexer_args(
            Command::new("sync")
                .about("Replace music, podcasts or both on the device")
                .arg(
                    Arg::new("mode")
                        .short('m')
                        .long("mode")
                        .value_name("MODE")
                        .help("What to sync; asks with a menu when omitted")
                        .value_parser(PossibleValuesParser::new(SyncMode::CLI_VALUES)),
                ),
        ))
        .subcommand(
            Command::new("config")
                .about("Show or change paths and the indexer command")
                .subcommand_required(true)
                .subcommand(Command::new("show").about("Show the current configuration"))
                .subcommand(Command::new("path").about("Print the configuration file path"))
                .subcommand(Command::new("reset").about("Restore the default configuration"))
                .subcommand(
                    Command::new("set")
                        .about("Change one setting")
                        .arg(
                            Arg::new("key")
                                .required(true)
                                .value_parser(PossibleValuesParser::new(SETTABLE_KEYS)),
                        )
                        .arg(Arg::new("value").required(true)),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .help("bash, zsh, fish, powershell or elvish"),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}
