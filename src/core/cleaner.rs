//! Destination cleaner for device music folders
//!
//! Every destination root is wiped and recreated before anything is copied
//! into it, so nothing from a previous sync survives next to new content.
//! Wiping can be gated by a [`Confirmer`], asked once per existing root
//! before any root is touched.
//!
//! # Examples
//!
//! ```no_run
//! use ipodsync::core::cleaner::{AutoConfirm, CleanOutcome, DestinationCleaner};
//! use ipodsync::core::{Config, CopyTask};
//!
//! let config = Config::default();
//! let tasks = vec![CopyTask::mirror(&config)];
//! let cleaner = DestinationCleaner::new(false, "sim");
//!
//! match cleaner.prepare_all(&tasks, &mut AutoConfirm)? {
//!     CleanOutcome::Ready(actions) => println!("{} destination(s) ready", actions.len()),
//!     CleanOutcome::Cancelled => println!("cancelled"),
//! }
//! # Ok::<(), ipodsync::SyncError>(())
//! ```

use std::fs;
use std::path::Path;

use crate::core::task::CopyTask;
use crate::error::{Result, SyncError};

/// Capability that approves wiping a destination
pub trait Confirmer {
    /// Returns true when the operator approved wiping `path` by typing `token`
    fn confirm_wipe(&mut self, path: &Path, token: &str) -> Result<bool>;
}

/// Approves everything (`--yes`, or workflows that already imply intent)
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm;

impl Confirmer for AutoConfirm {
    fn confirm_wipe(&mut self, _path: &Path, _token: &str) -> Result<bool> {
        Ok(true)
    }
}

/// What happened to one destination root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanAction {
    /// Existing folder deleted and recreated empty
    Cleared,
    /// Folder did not exist and was created
    Created,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanOutcome {
    Ready(Vec<CleanAction>),
    Cancelled,
}

pub struct DestinationCleaner {
    pub require_confirmation: bool,
    pub confirm_token: String,
}

impl DestinationCleaner {
    pub fn new<S: Into<String>>(require_confirmation: bool, confirm_token: S) -> Self {
        Self {
            require_confirmation,
            confirm_token: confirm_token.into(),
        }
    }

    /// Prepare every task destination.
    ///
    /// All confirmations happen first; a single refusal cancels the run with
    /// nothing deleted.
    pub fn prepare_all(
        &self,
        tasks: &[CopyTask],
        confirmer: &mut dyn Confirmer,
    ) -> Result<CleanOutcome> {
        if self.require_confirmation {
            for task in tasks.iter().filter(|t| t.destination.exists()) {
                if !confirmer.confirm_wipe(&task.destination, &self.confirm_token)? {
                    log::info!("Wipe of {:?} refused by operator", task.destination);
                    return Ok(CleanOutcome::Cancelled);
                }
            }
        }

        let mut actions = Vec::with_capacity(tasks.len());
        for task in tasks {
            actions.push(reset_directory(&task.destination)?);
        }

        Ok(CleanOutcome::Ready(actions))
    }
}

/// Delete `path` with its whole subtree and recreate it empty, or create it
/// when missing.
pub fn reset_directory(path: &Path) -> Result<CleanAction> {
    if path.exists() {
        log::debug!("Removing {:?}", path);
        fs::remove_dir_all(path).map_err(|e| SyncError::cleanup(path, e))?;
        fs::create_dir_all(path).map_err(|e| SyncError::cleanup(path, e))?;
        Ok(CleanAction::Cleared)
    } else {
        log::debug!("Creating {:?}", path);
        fs::create_dir_all(path).map_err(|e| SyncError::cleanup(path, e))?;
        Ok(CleanAction::Created)
    }
}
