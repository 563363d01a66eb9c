//! External playlist indexer
//!
//! After copying, the device database and playlists are rebuilt by a
//! separately maintained tool. Its behavior is opaque to us; we only build
//! its command line and report its exit status.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::str::FromStr;

use crate::core::config::IndexerCommand;
use crate::error::{Result, SyncError};

/// How the indexer groups tracks into playlists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistStyle {
    /// One playlist per folder (`--auto-dir-playlists`)
    Directory,
    /// Playlists from ID3 tags (`--auto-id3-playlists`)
    Id3,
}

impl PlaylistStyle {
    pub fn flag(&self) -> &'static str {
        match self {
            PlaylistStyle::Directory => "--auto-dir-playlists",
            PlaylistStyle::Id3 => "--auto-id3-playlists",
        }
    }
}

impl FromStr for PlaylistStyle {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dir" | "directory" => Ok(PlaylistStyle::Directory),
            "id3" => Ok(PlaylistStyle::Id3),
            other => Err(SyncError::config(format!(
                "Unknown playlist style '{}' (expected dir or id3)",
                other
            ))),
        }
    }
}

impl fmt::Display for PlaylistStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaylistStyle::Directory => f.write_str("dir"),
            PlaylistStyle::Id3 => f.write_str("id3"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexerOptions {
    pub playlist_style: PlaylistStyle,
    pub verbose: bool,
    pub track_voiceover: bool,
    pub playlist_voiceover: bool,
    pub rename_unicode: bool,
}

impl IndexerOptions {
    pub fn with_style(playlist_style: PlaylistStyle) -> Self {
        Self {
            playlist_style,
            verbose: true,
            track_voiceover: true,
            playlist_voiceover: true,
            rename_unicode: true,
        }
    }

    /// Flags in the order the tool expects them
    pub fn flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.verbose {
            flags.push("--verbose");
        }
        flags.push(self.playlist_style.flag());
        if self.track_voiceover {
            flags.push("--track-voiceover");
        }
        if self.playlist_voiceover {
            flags.push("--playlist-voiceover");
        }
        if self.rename_unicode {
            flags.push("--rename-unicode");
        }
        flags
    }
}

/// Collaborator invoked as the last step of a sync
pub trait PlaylistIndexer {
    fn run(&mut self, device_root: &Path, options: &IndexerOptions) -> Result<ExitStatus>;
}

/// Runs the configured program, inheriting the terminal
pub struct ExternalIndexer {
    command: IndexerCommand,
}

impl ExternalIndexer {
    pub fn new(command: IndexerCommand) -> Self {
        Self { command }
    }

    /// Full argument list after the program name
    pub fn arguments(&self, device_root: &Path, options: &IndexerOptions) -> Vec<String> {
        let mut args = self.command.args.clone();
        args.extend(options.flags().into_iter().map(str::to_string));
        args.push(device_root.to_string_lossy().to_string());
        args
    }

    fn resolve_program(&self) -> Result<PathBuf> {
        which::which(&self.command.program).map_err(|e| {
            SyncError::indexer(format!("'{}' not found: {}", self.command.program, e))
        })
    }
}

impl PlaylistIndexer for ExternalIndexer {
    fn run(&mut self, device_root: &Path, options: &IndexerOptions) -> Result<ExitStatus> {
        let program = self.resolve_program()?;
        let args = self.arguments(device_root, options);
        log::debug!("Running indexer: {:?} {:?}", program, args);

        Command::new(&program)
            .args(&args)
            .status()
            .map_err(|e| SyncError::indexer(format!("Failed to start {:?}: {}", program, e)))
    }
}
