//! Common test utilities for integration tests.
//!
//! This module provides a filesystem fixture for building PATH values out
//! of directories that do or do not exist.

use std::path::{Path, PathBuf};

use pathdoc::path::join_segments;
use tempfile::TempDir;

/// A temporary directory tree for PATH fixtures.
///
/// Paths handed out are canonical, so they compare equal to the
/// normalized paths of snapshot entries.
#[allow(dead_code)]
pub struct PathFixture {
    _dir: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl PathFixture {
    /// Creates an empty fixture.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dir.path().canonicalize().expect("Failed to canonicalize");
        Self { _dir: dir, root }
    }

    /// Root of the fixture tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates a directory (and its parents) and returns its path as a string.
    pub fn dir(&self, relative: &str) -> String {
        let path = self.root.join(relative);
        std::fs::create_dir_all(&path).expect("Failed to create fixture dir");
        path.to_string_lossy().into_owned()
    }

    /// Creates a regular file and returns its path as a string.
    pub fn file(&self, relative: &str) -> String {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create fixture dir");
        }
        std::fs::write(&path, b"").expect("Failed to create fixture file");
        path.to_string_lossy().into_owned()
    }

    /// A path under the fixture that does not exist.
    pub fn missing(&self, relative: &str) -> String {
        self.root
            .join("missing")
            .join(relative)
            .to_string_lossy()
            .into_owned()
    }
}

impl Default for PathFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Joins segments into a PATH value.
#[allow(dead_code)]
pub fn path_of(segments: &[&str]) -> String {
    join_segments(segments)
}
