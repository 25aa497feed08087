//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for the host integration tests.

#![allow(dead_code)]

use app_lib::Settings;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Temporary workspace with settings pointing into it.
pub struct TestHarness {
    pub dir: TempDir,
    pub settings: Arc<Settings>,
}

impl TestHarness {
    /// Create a harness whose fonts and output live in an empty temp dir.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let settings = Settings {
            font_dir: dir.path().join("fonts"),
            font_family: "Roboto".to_string(),
            output_dir: Some(dir.path().join("out")),
            ipc_addr: None,
            log_path: dir.path().join("log.log"),
        };
        TestHarness {
            dir,
            settings: Arc::new(settings),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file under the harness root and return its path.
    pub fn write_file(&self, relative: &str, contents: &[u8]) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn path_arg(&self, relative: &str) -> String {
        self.root().join(relative).to_string_lossy().to_string()
    }

    /// Files written to the output directory so far.
    pub fn outputs(&self) -> Vec<PathBuf> {
        match std::fs::read_dir(self.root().join("out")) {
            Ok(entries) => entries.filter_map(|e| e.ok().map(|e| e.path())).collect(),
            Err(_) => Vec::new(),
        }
    }
}
