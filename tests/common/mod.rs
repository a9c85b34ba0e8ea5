// Shared fixtures: a throwaway GOPATH with Go packages written into it.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct GoPath {
    pub dir: TempDir,
}

impl GoPath {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp GOPATH"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn src(&self) -> PathBuf {
        self.root().join("src")
    }

    /// Write `contents` to `src/<relative>`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.src().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }
}
