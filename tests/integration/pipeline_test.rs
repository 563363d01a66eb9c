use ipodsync::core::pipeline::{IndexerResult, Silent};
use ipodsync::core::{
    AutoConfirm, Confirmer, IndexerOptions, PlaylistIndexer, PlaylistStyle, SyncMode,
    SyncOutcome, SyncPipeline, SyncPlan, SyncSummary,
};
use ipodsync::{Result, SyncError};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use super::common::{list_files, Fixture};

/// Answers every confirmation with a fixed value and counts the questions
struct FixedAnswer {
    answer: bool,
    asked: Vec<PathBuf>,
}

impl FixedAnswer {
    fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Vec::new(),
        }
    }
}

impl Confirmer for FixedAnswer {
    fn confirm_wipe(&mut self, path: &Path, token: &str) -> Result<bool> {
        assert_eq!(token, "sim");
        self.asked.push(path.to_path_buf());
        Ok(self.answer)
    }
}

/// Records invocations instead of running anything
#[derive(Default)]
struct RecordingIndexer {
    calls: Vec<(PathBuf, IndexerOptions)>,
}

impl PlaylistIndexer for RecordingIndexer {
    fn run(&mut self, device_root: &Path, options: &IndexerOptions) -> Result<ExitStatus> {
        self.calls.push((device_root.to_path_buf(), options.clone()));
        Err(SyncError::indexer("recording only"))
    }
}

fn completed(outcome: SyncOutcome) -> SyncSummary {
    match outcome {
        SyncOutcome::Completed(summary) => summary,
        other => panic!("expected a completed sync, got {:?}", other),
    }
}

#[test]
fn test_podcasts_mode_example() {
    let fx = Fixture::new();
    fx.share_file("podcasts/ep1.mp3", 10 * 1024 * 1024);
    fx.share_file(".DS_Store", 6);
    fx.share_file("podcasts/.DS_Store", 6);
    fx.share_file("musicas/song.mp3", 5);
    fx.device_file("Musicas/existing.mp3", 3);

    let mut indexer = RecordingIndexer::default();
    let plan = SyncPlan::categories(&fx.config, SyncMode::Podcasts);
    let summary = completed(
        SyncPipeline::new(&mut AutoConfirm, &mut indexer, &mut Silent)
            .run(&plan)
            .unwrap(),
    );

    let music = fx.config.destination_root();
    let copied = music.join("Podcasts").join("ep1.mp3");
    assert_eq!(fs::metadata(&copied).unwrap().len(), 10 * 1024 * 1024);
    assert_eq!(list_files(&music.join("Podcasts")), vec!["ep1.mp3"]);

    // Musicas untouched: old content kept, new music not copied
    assert_eq!(list_files(&music.join("Musicas")), vec!["existing.mp3"]);

    assert_eq!(summary.mapped_files, 1);
    assert!(summary.report.is_clean());
    assert_eq!(indexer.calls.len(), 1);
    assert_eq!(indexer.calls[0].0, fx.config.device_root);
    assert_eq!(indexer.calls[0].1.playlist_style, PlaylistStyle::Id3);
    // Indexer failure does not turn the run into an error
    assert!(matches!(summary.indexer, IndexerResult::Failed(_)));
}

#[test]
fn test_mirror_replaces_stale_content() {
    let fx = Fixture::new();
    fx.share_file("Artist/Album/01.mp3", 100);
    fx.share_file("Artist/Album/02.mp3", 200);
    fx.share_file("Other/cover.jpg", 50);
    fx.share_file("Artist/._01.mp3", 4);
    fx.device_file("Old/stale.mp3", 10);

    let mut confirm = FixedAnswer::new(true);
    let mut indexer = RecordingIndexer::default();
    let summary = completed(
        SyncPipeline::new(&mut confirm, &mut indexer, &mut Silent)
            .run(&SyncPlan::mirror(&fx.config))
            .unwrap(),
    );

    let music = fx.config.destination_root();
    assert_eq!(confirm.asked, vec![music.clone()]);
    assert_eq!(
        list_files(&music),
        vec!["Artist/Album/01.mp3", "Artist/Album/02.mp3", "Other/cover.jpg"]
    );
    assert_eq!(summary.total_bytes, 350);
    assert_eq!(summary.report.copied_bytes, 350);
    assert_eq!(indexer.calls[0].1.playlist_style, PlaylistStyle::Directory);
}

#[test]
fn test_every_visible_file_lands_at_substituted_path() {
    let fx = Fixture::new();
    let files = [
        ("a.mp3", 1usize),
        ("deep/er/still/b.mp3", 2),
        ("with space/c d.m4a", 3),
    ];
    for (path, size) in files {
        fx.share_file(path, size);
    }

    let mut indexer = RecordingIndexer::default();
    let plan = SyncPlan::mirror(&fx.config).with_confirmation(false);
    completed(
        SyncPipeline::new(&mut AutoConfirm, &mut indexer, &mut Silent)
            .run(&plan)
            .unwrap(),
    );

    for (path, size) in files {
        let source = fx.config.source_root.join(path);
        let destination = fx.config.destination_root().join(path);
        assert_eq!(
            fs::metadata(&destination).unwrap().len(),
            fs::metadata(&source).unwrap().len()
        );
        assert_eq!(fs::metadata(&destination).unwrap().len(), size as u64);
    }
}

#[test]
fn test_refused_confirmation_cancels_without_touching_device() {
    let fx = Fixture::new();
    fx.share_file("new.mp3", 10);
    fx.device_file("keep.mp3", 10);

    let mut confirm = FixedAnswer::new(false);
    let mut indexer = RecordingIndexer::default();
    let outcome = SyncPipeline::new(&mut confirm, &mut indexer, &mut Silent)
        .run(&SyncPlan::mirror(&fx.config))
        .unwrap();

    assert!(matches!(outcome, SyncOutcome::Cancelled));
    assert_eq!(list_files(&fx.config.destination_root()), vec!["keep.mp3"]);
    assert!(indexer.calls.is_empty());
}

#[test]
fn test_mirror_with_missing_share_aborts_before_cleaning() {
    let fx = Fixture::new();
    fx.device_file("keep.mp3", 10);
    fs::remove_dir_all(&fx.config.source_root).unwrap();

    let mut confirm = FixedAnswer::new(true);
    let mut indexer = RecordingIndexer::default();
    let err = SyncPipeline::new(&mut confirm, &mut indexer, &mut Silent)
        .run(&SyncPlan::mirror(&fx.config))
        .unwrap_err();

    assert!(matches!(err, SyncError::SourceNotFound(_)));
    assert!(confirm.asked.is_empty());
    assert_eq!(list_files(&fx.config.destination_root()), vec!["keep.mp3"]);
}

#[test]
fn test_sync_both_skips_missing_category() {
    let fx = Fixture::new();
    fx.share_file("musicas/Band/song.mp3", 8);
    fx.device_file("Podcasts/old-episode.mp3", 8);

    let mut indexer = RecordingIndexer::default();
    let summary = completed(
        SyncPipeline::new(&mut AutoConfirm, &mut indexer, &mut Silent)
            .run(&SyncPlan::categories(&fx.config, SyncMode::Both))
            .unwrap(),
    );

    let music = fx.config.destination_root();
    assert_eq!(summary.skipped_sources, vec!["podcasts"]);
    assert_eq!(list_files(&music.join("Musicas")), vec!["Band/song.mp3"]);
    // Selected category is still wiped even when its source is missing
    assert!(music.join("Podcasts").is_dir());
    assert!(list_files(&music.join("Podcasts")).is_empty());
}

#[test]
fn test_nothing_to_copy_skips_indexer() {
    let fx = Fixture::new();
    fx.share_file("podcasts/.hidden.mp3", 8);

    let mut indexer = RecordingIndexer::default();
    let outcome = SyncPipeline::new(&mut AutoConfirm, &mut indexer, &mut Silent)
        .run(&SyncPlan::categories(&fx.config, SyncMode::Podcasts))
        .unwrap();

    assert!(matches!(outcome, SyncOutcome::NothingToCopy { .. }));
    assert!(indexer.calls.is_empty());
}

#[test]
fn test_skip_indexer_plan() {
    let fx = Fixture::new();
    fx.share_file("podcasts/ep.mp3", 8);

    let mut indexer = RecordingIndexer::default();
    let plan = SyncPlan::categories(&fx.config, SyncMode::Podcasts).without_indexer();
    let summary = completed(
        SyncPipeline::new(&mut AutoConfirm, &mut indexer, &mut Silent)
            .run(&plan)
            .unwrap(),
    );

    assert!(matches!(summary.indexer, IndexerResult::NotRun));
    assert!(indexer.calls.is_empty());
}
