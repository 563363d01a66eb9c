//! Mirror a network share's music and podcasts onto an iPod
//!
//! `core` holds the sync pipeline, `ui` the terminal output and `commands`
//! the handlers behind the `ipodsync` binary.

pub mod error;
pub use error::{Result, SyncError};

pub mod cli;
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

pub use crate::core::config::Config;

/// Initialize logging. `RUST_LOG` wins over the default level.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
