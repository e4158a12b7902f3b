//! Scratch directories for commit tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temp directory holding a destination repo file.
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `name` inside the directory.
    pub fn child(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `content` to `name` directly, bypassing the atomic commit.
    pub fn seed(&self, name: &str, content: &str) -> PathBuf {
        let path = self.child(name);
        fs::write(&path, content).expect("Failed to seed file");
        path
    }

    /// File names present in the directory, sorted.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dir.path())
            .expect("Failed to read temp dir")
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Names of leftover `.tmp` files.
    pub fn temp_files(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|n| n.ends_with(".tmp"))
            .collect()
    }
}

impl Default for ScratchDir {
    fn default() -> Self {
        Self::new()
    }
}
