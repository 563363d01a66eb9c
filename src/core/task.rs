//! Copy tasks and sync mode selection
//!
//! A [`CopyTask`] pairs a source root on the network share with a destination
//! root on the device. The mirror workflow builds a single task for the whole
//! share; the sync workflow builds one task per selected [`Category`].

use std::path::PathBuf;
use std::str::FromStr;

use crate::core::Config;
use crate::error::SyncError;

/// Content category kept in its own folder on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Music,
    Podcasts,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Music, Category::Podcasts];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Music => "music",
            Category::Podcasts => "podcasts",
        }
    }
}

/// Which categories a sync run covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    Music,
    Podcasts,
    Both,
}

impl SyncMode {
    /// Values accepted by `--mode`
    pub const CLI_VALUES: [&'static str; 3] = ["musicas", "podcasts", "ambos"];

    /// Resolve an interactive menu answer. Anything unrecognized means both.
    pub fn from_menu_choice(input: &str) -> Self {
        match input.trim() {
            "1" => SyncMode::Music,
            "2" => SyncMode::Podcasts,
            _ => SyncMode::Both,
        }
    }

    pub fn categories(&self) -> Vec<Category> {
        match self {
            SyncMode::Music => vec![Category::Music],
            SyncMode::Podcasts => vec![Category::Podcasts],
            SyncMode::Both => Category::ALL.to_vec(),
        }
    }

    pub fn cli_name(&self) -> &'static str {
        match self {
            SyncMode::Music => "musicas",
            SyncMode::Podcasts => "podcasts",
            SyncMode::Both => "ambos",
        }
    }
}

impl FromStr for SyncMode {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "musicas" | "music" => Ok(SyncMode::Music),
            "podcasts" => Ok(SyncMode::Podcasts),
            "ambos" | "both" => Ok(SyncMode::Both),
            other => Err(SyncError::InvalidMode(other.to_string())),
        }
    }
}

/// A source root mirrored onto a destination root as one unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTask {
    pub label: String,
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl CopyTask {
    pub fn new<L, S, D>(label: L, source: S, destination: D) -> Self
    where
        L: Into<String>,
        S: Into<PathBuf>,
        D: Into<PathBuf>,
    {
        Self {
            label: label.into(),
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// The whole share onto the whole music folder
    pub fn mirror(config: &Config) -> Self {
        Self::new("all", &config.source_root, config.destination_root())
    }

    pub fn for_category(config: &Config, category: Category) -> Self {
        let dirs = config.category_dirs(category);
        Self::new(
            category.name(),
            config.source_root.join(&dirs.source),
            config.destination_root().join(&dirs.destination),
        )
    }

    /// Tasks for every category selected by `mode`, in menu order
    pub fn for_mode(config: &Config, mode: SyncMode) -> Vec<Self> {
        mode.categories()
            .into_iter()
            .map(|category| Self::for_category(config, category))
            .collect()
    }
}
