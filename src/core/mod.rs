//! Sync pipeline and the pieces it drives

pub mod cleaner;
pub mod config;
pub mod copier;
pub mod indexer;
pub mod mapper;
pub mod mount;
pub mod pipeline;
pub mod task;

pub use cleaner::{AutoConfirm, CleanAction, CleanOutcome, Confirmer, DestinationCleaner};
pub use config::Config;
pub use copier::{CopyReport, Copier};
pub use indexer::{ExternalIndexer, IndexerOptions, PlaylistIndexer, PlaylistStyle};
pub use mapper::{FileEntry, FileMapper, MissingSource, SyncSession};
pub use mount::check_mounts;
pub use pipeline::{SyncEvent, SyncObserver, SyncOutcome, SyncPipeline, SyncPlan, SyncSummary};
pub use task::{Category, CopyTask, SyncMode};
