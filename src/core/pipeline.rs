//! Sync pipeline: mount check, clean, map, copy, index
//!
//! The pipeline owns no global state. Paths come from [`Config`], the
//! interactive parts come in as collaborators ([`Confirmer`],
//! [`PlaylistIndexer`], [`SyncObserver`]) so that every stage can be driven
//! from tests.

use std::path::PathBuf;
use std::process::ExitStatus;

use crate::core::cleaner::{CleanAction, CleanOutcome, Confirmer, DestinationCleaner};
use crate::core::copier::{CopyReport, Copier};
use crate::core::indexer::{IndexerOptions, PlaylistIndexer, PlaylistStyle};
use crate::core::mapper::{FileMapper, MissingSource};
use crate::core::mount::check_mounts;
use crate::core::task::{CopyTask, SyncMode};
use crate::core::Config;
use crate::error::Result;

/// Everything a run needs to know, resolved before anything is touched
#[derive(Debug, Clone)]
pub struct SyncPlan {
    pub tasks: Vec<CopyTask>,
    /// Share root checked before anything else
    pub source_root: PathBuf,
    pub device_root: PathBuf,
    pub require_confirmation: bool,
    pub confirm_token: String,
    pub missing_source: MissingSource,
    /// `None` skips the indexer
    pub indexer: Option<IndexerOptions>,
}

impl SyncPlan {
    /// Whole share onto the whole music folder, confirmed by the operator,
    /// folder playlists
    pub fn mirror(config: &Config) -> Self {
        Self {
            tasks: vec![CopyTask::mirror(config)],
            source_root: config.source_root.clone(),
            device_root: config.device_root.clone(),
            require_confirmation: true,
            confirm_token: config.confirm_token.clone(),
            missing_source: MissingSource::Fail,
            indexer: Some(IndexerOptions::with_style(PlaylistStyle::Directory)),
        }
    }

    /// Selected categories, cleared without asking, ID3 playlists
    pub fn categories(config: &Config, mode: SyncMode) -> Self {
        Self {
            tasks: CopyTask::for_mode(config, mode),
            source_root: config.source_root.clone(),
            device_root: config.device_root.clone(),
            require_confirmation: false,
            confirm_token: config.confirm_token.clone(),
            missing_source: MissingSource::Skip,
            indexer: Some(IndexerOptions::with_style(PlaylistStyle::Id3)),
        }
    }

    pub fn with_playlist_style(mut self, style: PlaylistStyle) -> Self {
        if let Some(options) = self.indexer.as_mut() {
            options.playlist_style = style;
        }
        self
    }

    pub fn without_indexer(mut self) -> Self {
        self.indexer = None;
        self
    }

    pub fn with_confirmation(mut self, require: bool) -> Self {
        self.require_confirmation = require;
        self
    }
}

/// Progress notifications from a running pipeline
#[derive(Debug)]
pub enum SyncEvent<'a> {
    CheckingMounts,
    MountsReady,
    Cleaned {
        task: &'a CopyTask,
        action: CleanAction,
    },
    Mapping,
    SourceSkipped {
        label: &'a str,
    },
    Copying {
        files: usize,
        total_bytes: u64,
    },
    Progress {
        copied_bytes: u64,
        total_bytes: u64,
    },
    Indexing,
}

pub trait SyncObserver {
    fn on_event(&mut self, event: SyncEvent<'_>);
}

/// Observer that ignores everything
#[derive(Debug, Default)]
pub struct Silent;

impl SyncObserver for Silent {
    fn on_event(&mut self, _event: SyncEvent<'_>) {}
}

#[derive(Debug)]
pub enum IndexerResult {
    NotRun,
    Finished(ExitStatus),
    Failed(String),
}

#[derive(Debug)]
pub struct SyncSummary {
    pub mapped_files: usize,
    pub total_bytes: u64,
    pub skipped_sources: Vec<String>,
    pub report: CopyReport,
    pub indexer: IndexerResult,
}

#[derive(Debug)]
pub enum SyncOutcome {
    /// Operator refused the wipe; nothing was deleted
    Cancelled,
    /// Mapping found nothing; copy and indexing were skipped
    NothingToCopy { skipped_sources: Vec<String> },
    Completed(SyncSummary),
}

pub struct SyncPipeline<'a> {
    confirmer: &'a mut dyn Confirmer,
    indexer: &'a mut dyn PlaylistIndexer,
    observer: &'a mut dyn SyncObserver,
}

impl<'a> SyncPipeline<'a> {
    pub fn new(
        confirmer: &'a mut dyn Confirmer,
        indexer: &'a mut dyn PlaylistIndexer,
        observer: &'a mut dyn SyncObserver,
    ) -> Self {
        Self {
            confirmer,
            indexer,
            observer,
        }
    }

    /// Run the plan.
    ///
    /// Missing mounts and cleanup failures are errors. Per-file copy failures
    /// and indexer failures are reported in the outcome.
    pub fn run(&mut self, plan: &SyncPlan) -> Result<SyncOutcome> {
        self.observer.on_event(SyncEvent::CheckingMounts);
        check_mounts(&plan.source_root, &plan.device_root)?;
        self.observer.on_event(SyncEvent::MountsReady);

        let cleaner = DestinationCleaner::new(plan.require_confirmation, &plan.confirm_token);
        let actions = match cleaner.prepare_all(&plan.tasks, &mut *self.confirmer)? {
            CleanOutcome::Cancelled => return Ok(SyncOutcome::Cancelled),
            CleanOutcome::Ready(actions) => actions,
        };
        for (task, action) in plan.tasks.iter().zip(actions) {
            self.observer.on_event(SyncEvent::Cleaned { task, action });
        }

        self.observer.on_event(SyncEvent::Mapping);
        let session = FileMapper::new(plan.missing_source).map(&plan.tasks)?;
        for label in &session.skipped {
            self.observer.on_event(SyncEvent::SourceSkipped { label });
        }

        if session.is_empty() {
            return Ok(SyncOutcome::NothingToCopy {
                skipped_sources: session.skipped,
            });
        }

        self.observer.on_event(SyncEvent::Copying {
            files: session.file_count(),
            total_bytes: session.total_bytes,
        });
        let observer = &mut *self.observer;
        let report = Copier::new().copy(&session.entries, session.total_bytes, |copied, total| {
            observer.on_event(SyncEvent::Progress {
                copied_bytes: copied,
                total_bytes: total,
            })
        });

        let indexer = match &plan.indexer {
            Some(options) => {
                self.observer.on_event(SyncEvent::Indexing);
                match self.indexer.run(&plan.device_root, options) {
                    Ok(status) => {
                        if !status.success() {
                            log::warn!("Playlist indexer exited with {}", status);
                        }
                        IndexerResult::Finished(status)
                    }
                    Err(e) => {
                        log::warn!("{}", e);
                        IndexerResult::Failed(e.to_string())
                    }
                }
            }
            None => IndexerResult::NotRun,
        };

        Ok(SyncOutcome::Completed(SyncSummary {
            mapped_files: session.file_count(),
            total_bytes: session.total_bytes,
            skipped_sources: session.skipped,
            report,
            indexer,
        }))
    }
}
