//! Shared testing utilities for madlibs CLI tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated directory for CLI exercises.
pub struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path of the isolated working directory.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Write a data file with the given contents and return its path.
    pub fn write_data_file(&self, contents: &str) -> PathBuf {
        let path = self.root.path().join("madlibs.json");
        fs::write(&path, contents).expect("Failed to write test data file");
        path
    }

    /// Write the data file at the default relative location the binary reads.
    pub fn write_default_data_file(&self, contents: &str) {
        let data_dir = self.root.path().join("data");
        fs::create_dir_all(&data_dir).expect("Failed to create data directory");
        fs::write(data_dir.join("madlibs.json"), contents)
            .expect("Failed to write default data file");
    }

    /// Build a command for invoking the compiled `madlibs` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("madlibs").expect("Failed to locate madlibs binary");
        cmd.current_dir(self.root.path());
        cmd
    }

    /// Build a command pointed at a freshly written data file.
    pub fn cli_with_data(&self, contents: &str) -> Command {
        let path = self.write_data_file(contents);
        let mut cmd = self.cli();
        cmd.arg("--file").arg(path);
        cmd
    }
}

/// A one-template collection: `"I like <noun>."`.
pub const PIZZA_DATA: &str = r#"[
    {"title": "T", "blanks": ["noun"], "value": ["I like ", "."]}
]"#;

/// A one-template collection with two blanks: `"A <x> and a <y>."`.
pub const PETS_DATA: &str = r#"[
    {"title": "Pets", "blanks": ["animal", "animal"], "value": ["A ", " and a ", "."]}
]"#;
