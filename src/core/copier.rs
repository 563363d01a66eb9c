//! Copier: performs the mapped copies in order
//!
//! Per-file failures are recorded and logged, then the next file is copied.
//! Files already written stay in place whatever happens afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;

use crate::core::mapper::FileEntry;

/// Statistics from a copy run
#[derive(Debug, Default)]
pub struct CopyReport {
    pub copied_files: usize,
    pub copied_bytes: u64,
    pub failures: Vec<CopyFailure>,
}

#[derive(Debug)]
pub struct CopyFailure {
    pub source: PathBuf,
    pub error: String,
}

impl CopyReport {
    pub fn failed_files(&self) -> usize {
        self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Copier;

impl Copier {
    pub fn new() -> Self {
        Self
    }

    /// Copy every entry with progress callback
    ///
    /// # Arguments
    /// * `entries` - Files to copy, in order
    /// * `total_bytes` - Expected byte total, passed through to the callback
    /// * `on_progress` - Called with (bytes copied so far, total bytes) after each copied file
    pub fn copy<F>(&self, entries: &[FileEntry], total_bytes: u64, mut on_progress: F) -> CopyReport
    where
        F: FnMut(u64, u64),
    {
        let mut report = CopyReport::default();

        for entry in entries {
            match copy_entry(entry) {
                Ok(()) => {
                    report.copied_files += 1;
                    report.copied_bytes += entry.size;
                    on_progress(report.copied_bytes, total_bytes);
                }
                Err(e) => {
                    log::error!("Failed to copy {:?}: {}", entry.source, e);
                    report.failures.push(CopyFailure {
                        source: entry.source.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        report
    }
}

/// Copy content, permissions and timestamps of one file
fn copy_entry(entry: &FileEntry) -> std::io::Result<()> {
    if let Some(parent) = entry.destination.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::copy(&entry.source, &entry.destination)?;
    copy_times(&entry.source, &entry.destination);

    Ok(())
}

/// Some device filesystems reject access times; the content is already
/// there, so this only logs.
fn copy_times(source: &Path, destination: &Path) {
    let metadata = match fs::metadata(source) {
        Ok(metadata) => metadata,
        Err(e) => {
            log::debug!("Cannot read timestamps of {:?}: {}", source, e);
            return;
        }
    };

    let atime = FileTime::from_last_access_time(&metadata);
    let mtime = FileTime::from_last_modification_time(&metadata);

    if let Err(e) = filetime::set_file_times(destination, atime, mtime) {
        log::debug!("Cannot set timestamps on {:?}: {}", destination, e);
    }
}
