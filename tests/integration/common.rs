// Shared fixtures: a fake share and a fake device under one temp dir

use ipodsync::core::Config;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub struct Fixture {
    pub temp: TempDir,
    pub config: Config,
}

impl Fixture {
    /// Share at `<tmp>/Downloads/pace`, device at `<tmp>/IPOD`, both present
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let config = Config {
            source_root: temp.path().join("Downloads").join("pace"),
            device_root: temp.path().join("IPOD"),
            ..Config::default()
        };
        fs::create_dir_all(&config.source_root).unwrap();
        fs::create_dir_all(&config.device_root).unwrap();
        Self { temp, config }
    }

    pub fn share_file(&self, relative: &str, bytes: usize) {
        write_file(&self.config.source_root.join(relative), bytes);
    }

    pub fn device_file(&self, relative: &str, bytes: usize) {
        write_file(&self.config.destination_root().join(relative), bytes);
    }
}

pub fn write_file(path: &Path, bytes: usize) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, vec![7u8; bytes]).unwrap();
}

/// Relative paths of every file below `root`, sorted
pub fn list_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}
