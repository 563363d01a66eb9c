//! Persisted settings for the sync paths and the indexer command
//!
//! Stored as JSON under the user config directory. Values read from disk go
//! through the same checks as `ipodsync config set`.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::core::task::Category;
use crate::error::SyncError;

pub const DEFAULT_SOURCE_ROOT: &str = "/Volumes/Downloads/pace";
pub const DEFAULT_DEVICE_ROOT: &str = "/Volumes/IPOD";
pub const DEFAULT_MUSIC_SUBPATH: &str = "iPod_Control/Music";
pub const DEFAULT_CONFIRM_TOKEN: &str = "sim";

/// Keys accepted by `ipodsync config set`
pub const SETTABLE_KEYS: [&str; 9] = [
    "source",
    "device",
    "music-subdir",
    "music-source",
    "music-dest",
    "podcasts-source",
    "podcasts-dest",
    "indexer",
    "confirm-token",
];

/// Folder names for one category: below the share root and below the
/// device music folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDirs {
    pub source: String,
    pub destination: String,
}

/// Command line of the external playlist indexer (device root is appended)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexerCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for IndexerCommand {
    fn default() -> Self {
        Self {
            program: "python3".to_string(),
            args: vec!["ipod-shuffle-4g.py".to_string()],
        }
    }
}

impl IndexerCommand {
    /// Parse a whitespace separated command line
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the network share
    pub source_root: PathBuf,
    /// Mount point of the device
    pub device_root: PathBuf,
    /// Music folder, relative to the device root
    pub music_subpath: PathBuf,
    pub music: CategoryDirs,
    pub podcasts: CategoryDirs,
    /// Word the operator must type before the mirror workflow wipes the device
    pub confirm_token: String,
    pub indexer: IndexerCommand,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            device_root: PathBuf::from(DEFAULT_DEVICE_ROOT),
            music_subpath: PathBuf::from(DEFAULT_MUSIC_SUBPATH),
            music: CategoryDirs {
                source: "musicas".to_string(),
                destination: "Musicas".to_string(),
            },
            podcasts: CategoryDirs {
                source: "podcasts".to_string(),
                destination: "Podcasts".to_string(),
            },
            confirm_token: DEFAULT_CONFIRM_TOKEN.to_string(),
            indexer: IndexerCommand::default(),
        }
    }
}

impl Config {
    /// Load from an explicit file. A missing, empty, unreadable or unsafe file
    /// yields the defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Config::default());
        }

        let config = match serde_json::from_slice::<Config>(&data) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable config file {:?} ({}), using defaults",
                    config_path,
                    e
                );
                return Ok(Config::default());
            }
        };

        if let Err(e) = config.validate() {
            log::warn!("Ignoring config file {:?} ({}), using defaults", config_path, e);
            return Ok(Config::default());
        }

        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("ipodsync").join("config.json"))
    }

    /// `<device>/iPod_Control/Music`
    pub fn destination_root(&self) -> PathBuf {
        self.device_root.join(&self.music_subpath)
    }

    pub fn category_dirs(&self, category: Category) -> &CategoryDirs {
        match category {
            Category::Music => &self.music,
            Category::Podcasts => &self.podcasts,
        }
    }

    /// Update one setting by its CLI key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            bail!("Value for '{}' cannot be empty", key);
        }

        match key {
            "source" => self.source_root = PathBuf::from(value),
            "device" => self.device_root = PathBuf::from(value),
            "music-subdir" => self.music_subpath = relative_subpath(value)?,
            "music-source" => self.music.source = folder_name(key, value)?,
            "music-dest" => self.music.destination = folder_name(key, value)?,
            "podcasts-source" => self.podcasts.source = folder_name(key, value)?,
            "podcasts-dest" => self.podcasts.destination = folder_name(key, value)?,
            "indexer" => {
                self.indexer = IndexerCommand::parse(value)
                    .with_context(|| format!("Invalid indexer command: {}", value))?;
            }
            "confirm-token" => self.confirm_token = value.to_string(),
            _ => bail!(
                "Unknown setting '{}'. Valid keys: {}",
                key,
                SETTABLE_KEYS.join(", ")
            ),
        }

        Ok(())
    }

    /// Check the invariants `set` enforces on values read from disk.
    /// The music folder and every category folder must stay below the device root.
    pub fn validate(&self) -> crate::Result<()> {
        if self.source_root.as_os_str().is_empty() || self.device_root.as_os_str().is_empty() {
            return Err(SyncError::config("source and device roots cannot be empty"));
        }

        relative_subpath(&self.music_subpath.to_string_lossy())
            .map_err(|e| SyncError::config(e.to_string()))?;

        let folders = [
            ("music-source", &self.music.source),
            ("music-dest", &self.music.destination),
            ("podcasts-source", &self.podcasts.source),
            ("podcasts-dest", &self.podcasts.destination),
        ];
        for (key, value) in folders {
            folder_name(key, value).map_err(|e| SyncError::config(e.to_string()))?;
        }

        Ok(())
    }
}

/// The music folder is a relative path made only of plain names, so the wipe
/// never leaves the device
fn relative_subpath(value: &str) -> Result<PathBuf> {
    let path = PathBuf::from(value);
    let plain = path
        .components()
        .all(|component| matches!(component, Component::Normal(_)));

    if value.is_empty() || !plain {
        bail!(
            "music-subdir must be a relative path of plain folder names, got '{}'",
            value
        );
    }

    Ok(path)
}

/// Category folders must be a single path component so that every task stays
/// inside the share and inside the device music folder
fn folder_name(key: &str, value: &str) -> Result<String> {
    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(value.to_string()),
        _ => bail!("{} must be a plain folder name, got '{}'", key, value),
    }
}
