//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home directory
//! - Command builder helpers for common patterns
//! - Fixtures for PATH values with good and broken entries

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the developer's settings into tests.
const SCRUBBED_VARS: [&str; 8] = [
    "PATHDOC_SUGGESTION_LIMIT",
    "PATHDOC_LOG_DIR",
    "PATHDOC_ACTION_LOG",
    "PATHDOC_OUTPUT_FORMAT",
    "PATHDOC_SHELL",
    "PATHDOC_COLOR",
    "PATHDOC_LOG_MODE",
    "NO_COLOR",
];

/// Test environment with an isolated home directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory for test files
/// - `HOME` pointed at that directory, so `~/.pathdoc` is private
/// - Helper methods for building PATH values
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        // Canonical so that expected paths match what the tool prints
        let temp_path = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder with the environment isolated.
    ///
    /// `HOME` points at the temp directory and `PATHDOC_*` variables are
    /// removed. `--path-string` is not set.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathdoc").expect("Failed to find pathdoc binary");
        cmd.env("HOME", &self.temp_path);
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder that analyzes `path_string`.
    pub fn command_with_path(&self, path_string: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("--path-string").arg(path_string);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Path to a directory that does not exist.
    pub fn missing(&self, name: &str) -> PathBuf {
        self.temp_path.join("missing").join(name)
    }

    /// Default action log directory inside the isolated home.
    pub fn log_dir(&self) -> PathBuf {
        self.temp_path.join(".pathdoc").join("logs")
    }

    /// Write `~/.pathdoc/config.yaml`.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.temp_path.join(".pathdoc");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Contents of every action log written so far, concatenated.
    pub fn read_logs(&self, dir: &Path) -> String {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return String::new();
        };
        let mut contents = String::new();
        for entry in entries {
            let path = entry.expect("Failed to read log dir").path();
            contents.push_str(&std::fs::read_to_string(path).expect("Failed to read log"));
        }
        contents
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Join paths with the platform separator.
#[allow(dead_code)]
pub fn join_path(parts: &[&Path]) -> String {
    std::env::join_paths(parts)
        .expect("Failed to join paths")
        .into_string()
        .expect("Non-UTF-8 path")
}
