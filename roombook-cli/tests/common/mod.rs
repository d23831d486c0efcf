//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated test environment with a temporary data directory
//! and helpers for the frequent reserve/cancel patterns.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the roombook data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created up front; the CLI creates it on
    /// first write.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("roombook-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// The process environment is scrubbed of roombook variables and HOME
    /// points into the temp dir, so a developer's own config file cannot
    /// leak into tests.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("roombook").expect("Failed to find roombook binary");
        cmd.env("HOME", &self.temp_path)
            .env_remove("ROOMBOOK_DATA_DIR")
            .env_remove("ROOMBOOK_OUTPUT_FORMAT")
            .env_remove("ROOMBOOK_LOG_MODE");
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path to the snapshot file inside the data directory.
    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join("rooms.json")
    }

    /// Reserve a room and return the printed reservation id.
    ///
    /// # Panics
    /// Panics if the reserve command fails or does not print a valid id.
    pub fn reserve_simple(&self, name: &str, room: &str, date: &str, start: &str, hours: &str) -> u64 {
        let output = self
            .command()
            .args(["reserve", "--name", name, "--room", room])
            .args(["--date", date, "--start", start, "--hours", hours])
            .output()
            .expect("Failed to run reserve command");

        assert!(
            output.status.success(),
            "Reserve failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        stdout
            .trim()
            .parse()
            .expect("Output is not a valid reservation id")
    }

    /// Query the remaining capacity of a room via `rooms --format json`.
    ///
    /// # Panics
    /// Panics if the rooms command fails or the room is missing.
    pub fn capacity_of(&self, room: u64) -> u64 {
        let output = self
            .command()
            .args(["rooms", "--format", "json"])
            .output()
            .expect("Failed to run rooms command");
        assert!(output.status.success());

        let rooms: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("rooms output is not JSON");
        rooms
            .as_array()
            .expect("expected a JSON array")
            .iter()
            .find(|r| r["number"] == room)
            .unwrap_or_else(|| panic!("room {room} not in output"))["capacity"]
            .as_u64()
            .expect("capacity is not a number")
    }
}
