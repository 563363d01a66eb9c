//! File mapper: turns copy tasks into an ordered list of file copies
//!
//! Each task's source tree is walked in file-name order. Every regular,
//! non-hidden file becomes a [`FileEntry`] whose destination keeps the path
//! relative to the source root, so the folder structure of the share is
//! reproduced on the device.

use std::fs;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::core::task::CopyTask;
use crate::error::{Result, SyncError};
use crate::platform::is_hidden;

/// What to do when a task's source root is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSource {
    /// Warn and keep mapping the other tasks
    Skip,
    /// Abort the whole mapping
    Fail,
}

/// One file to copy. Immutable once mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub size: u64,
}

/// Run-scoped result of mapping
#[derive(Debug, Default)]
pub struct SyncSession {
    pub entries: Vec<FileEntry>,
    pub total_bytes: u64,
    /// Labels of tasks whose source root did not exist
    pub skipped: Vec<String>,
}

impl SyncSession {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn file_count(&self) -> usize {
        self.entries.len()
    }
}

pub struct FileMapper {
    missing_source: MissingSource,
}

impl FileMapper {
    pub fn new(missing_source: MissingSource) -> Self {
        Self { missing_source }
    }

    /// Map every task, in order
    pub fn map(&self, tasks: &[CopyTask]) -> Result<SyncSession> {
        let mut session = SyncSession::default();

        for task in tasks {
            if !task.source.is_dir() {
                match self.missing_source {
                    MissingSource::Skip => {
                        log::warn!(
                            "Source for '{}' not found, skipping: {:?}",
                            task.label,
                            task.source
                        );
                        session.skipped.push(task.label.clone());
                        continue;
                    }
                    MissingSource::Fail => {
                        return Err(SyncError::SourceNotFound(task.source.clone()));
                    }
                }
            }

            self.map_task(task, &mut session);
        }

        Ok(session)
    }

    fn map_task(&self, task: &CopyTask, session: &mut SyncSession) {
        let before = session.entries.len();

        for entry in WalkDir::new(&task.source).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::debug!("Skipping unreadable entry under {:?}: {}", task.source, e);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            // Follows symlinks, so a linked file is copied as its target
            let metadata = match fs::metadata(entry.path()) {
                Ok(metadata) => metadata,
                Err(e) => {
                    log::debug!("Cannot read size of {:?}: {}", entry.path(), e);
                    continue;
                }
            };

            if !metadata.is_file() || is_hidden(entry.file_name(), &metadata) {
                continue;
            }

            let relative = match entry.path().strip_prefix(&task.source) {
                Ok(relative) => relative,
                Err(_) => continue,
            };

            session.total_bytes += metadata.len();
            session.entries.push(FileEntry {
                source: entry.path().to_path_buf(),
                destination: task.destination.join(relative),
                size: metadata.len(),
            });
        }

        log::debug!(
            "Mapped {} file(s) for '{}'",
            session.entries.len() - before,
            task.label
        );
    }
}
