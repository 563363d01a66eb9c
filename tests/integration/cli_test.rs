// Runs the real binary to check exit statuses

use ipodsync::core::config::IndexerCommand;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use super::common::{list_files, write_file, Fixture};

fn config_file(fx: &Fixture) -> PathBuf {
    let path = fx.temp.path().join("config.json");
    fx.config.save_to(&path).unwrap();
    path
}

fn run(fx: &Fixture, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ipodsync"))
        .arg("--config")
        .arg(config_file(fx))
        .args(args)
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_sync_podcasts_succeeds() {
    let fx = Fixture::new();
    fx.share_file("podcasts/ep1.mp3", 64);

    let output = run(&fx, &["sync", "--mode", "podcasts", "--skip-indexer"], "");

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        list_files(&fx.config.destination_root().join("Podcasts")),
        vec!["ep1.mp3"]
    );
}

#[test]
fn test_menu_answer_selects_mode() {
    let fx = Fixture::new();
    fx.share_file("musicas/a.mp3", 1);
    fx.share_file("podcasts/b.mp3", 1);

    let output = run(&fx, &["sync", "--skip-indexer"], "1\n");

    assert!(output.status.success(), "{:?}", output);
    let music = fx.config.destination_root();
    assert_eq!(list_files(&music), vec!["Musicas/a.mp3"]);
}

#[test]
fn test_missing_device_exits_non_zero() {
    let mut fx = Fixture::new();
    fx.config.device_root = fx.temp.path().join("NOT_MOUNTED");
    fx.share_file("podcasts/ep1.mp3", 1);

    let output = run(&fx, &["sync", "--mode", "ambos", "--skip-indexer"], "");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("NOT_MOUNTED"), "{}", stderr);
}

#[test]
fn test_missing_share_exits_non_zero() {
    let mut fx = Fixture::new();
    fx.config.source_root = fx.temp.path().join("offline-share");

    let output = run(&fx, &["mirror", "--yes", "--skip-indexer"], "");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_mirror_refusal_exits_zero_and_keeps_device() {
    let fx = Fixture::new();
    fx.share_file("new.mp3", 4);
    fx.device_file("keep.mp3", 4);

    let output = run(&fx, &["mirror", "--skip-indexer"], "nao\n");

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(list_files(&fx.config.destination_root()), vec!["keep.mp3"]);
}

#[test]
fn test_mirror_typed_confirmation_proceeds() {
    let fx = Fixture::new();
    fx.share_file("new.mp3", 4);
    fx.device_file("stale.mp3", 4);

    let output = run(&fx, &["mirror", "--skip-indexer"], "sim\n");

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(list_files(&fx.config.destination_root()), vec!["new.mp3"]);
}

#[test]
fn test_empty_share_is_not_an_error() {
    let fx = Fixture::new();
    fx.share_file(".DS_Store", 4);

    let output = run(&fx, &["mirror", "--yes"], "");

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No files found"), "{}", stdout);
    assert!(!stdout.contains("Rebuilding playlists"), "{}", stdout);
}

#[cfg(unix)]
#[test]
fn test_failing_indexer_does_not_change_exit_status() {
    let mut fx = Fixture::new();
    fx.config.indexer = IndexerCommand {
        program: "false".to_string(),
        args: Vec::new(),
    };
    fx.share_file("podcasts/ep.mp3", 4);

    let output = run(&fx, &["sync", "--mode", "podcasts"], "");

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rebuilding playlists"), "{}", stdout);
}

#[test]
fn test_config_set_persists() {
    let fx = Fixture::new();
    let path = config_file(&fx);

    let output = Command::new(env!("CARGO_BIN_EXE_ipodsync"))
        .arg("--config")
        .arg(&path)
        .args(["config", "set", "podcasts-dest", "Episodes"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    let saved = ipodsync::Config::load_from(&path).unwrap();
    assert_eq!(saved.podcasts.destination, "Episodes");
}

fn run_raw(config_path: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ipodsync"))
        .arg("--config")
        .arg(config_path)
        .args(args)
        .env("NO_COLOR", "1")
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

#[test]
fn test_config_reset_recovers_from_non_utf8_file() {
    let fx = Fixture::new();
    let path = fx.temp.path().join("config.json");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x81]).unwrap();

    let output = run_raw(&path, &["config", "reset"]);

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        ipodsync::Config::load_from(&path).unwrap(),
        ipodsync::Config::default()
    );
}

#[test]
fn test_music_subdir_escaping_device_is_ignored() {
    let fx = Fixture::new();
    fx.share_file("musicas/a.mp3", 1);
    let beside_device = fx.temp.path().join("Musicas").join("OTHER_VOLUME_DATA");
    write_file(&beside_device, 8);

    // `<tmp>/IPOD/../Musicas` would be the folder next to the device
    let path = fx.temp.path().join("config.json");
    let body = format!(
        r#"{{ "source_root": {:?}, "device_root": {:?}, "music_subpath": ".." }}"#,
        fx.config.source_root.to_string_lossy(),
        fx.config.device_root.to_string_lossy()
    );
    fs::write(&path, body).unwrap();

    let output = run_raw(&path, &["sync", "--mode", "musicas", "--skip-indexer"]);

    assert!(beside_device.exists(), "{:?}", output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("music-subdir"), "{}", stderr);
}

#[test]
fn test_missing_mount_message_stays_on_stderr() {
    let mut fx = Fixture::new();
    fx.config.device_root = fx.temp.path().join("NOT_MOUNTED");

    let output = run(&fx, &["sync", "--mode", "podcasts", "--skip-indexer"], "");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stderr.contains("Check that the network share"), "{}", stderr);
    assert!(!stdout.contains("Check that the network share"), "{}", stdout);
}
