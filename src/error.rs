use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for ipodsync
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Source not found (check the network share): {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Device not found (check that it is mounted): {}", .0.display())]
    DeviceNotMounted(PathBuf),

    #[error("Failed to clean {}: {source}", path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Playlist indexer error: {0}")]
    Indexer(String),

    #[error("Invalid mode '{0}' (expected musicas, podcasts or ambos)")]
    InvalidMode(String),
}

/// Result type alias for ipodsync
pub type Result<T> = std::result::Result<T, SyncError>;

impl SyncError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SyncError::Config(msg.into())
    }

    /// Create an indexer error
    pub fn indexer<S: Into<String>>(msg: S) -> Self {
        SyncError::Indexer(msg.into())
    }

    pub fn cleanup<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        SyncError::Cleanup {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means a mount point is missing
    pub fn is_missing_mount(&self) -> bool {
        matches!(
            self,
            SyncError::SourceNotFound(_) | SyncError::DeviceNotMounted(_)
        )
    }
}
