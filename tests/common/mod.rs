//! Shared testing utilities for bcdc CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `bcdc` binary with the
    /// directory overrides cleared.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("bcdc").expect("Failed to locate bcdc binary");
        cmd.current_dir(&self.work_dir).env_remove("BCD_DIR").env_remove("RESULTS_DIR");
        cmd
    }
}
