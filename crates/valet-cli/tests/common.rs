//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".valet");

        Self { temp_dir, data_dir }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("valet");
        cmd.env_remove("VALET_PATH")
            .env_remove("RUST_LOG")
            .arg("--data-dir")
            .arg(self.data_dir());
        cmd
    }

    pub fn json_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--format").arg("json");
        cmd
    }

    /// Register a plate through the CLI and return the stored record id.
    pub fn entry(&self, plate: &str) -> i64 {
        let output = self
            .json_command()
            .arg("entry")
            .arg(plate)
            .output()
            .expect("Failed to run entry");
        assert!(
            output.status.success(),
            "entry failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let value: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("entry output is not JSON");
        value["record"]["id"].as_i64().expect("record id missing")
    }

    pub fn list_json(&self) -> serde_json::Value {
        let output = self
            .json_command()
            .arg("list")
            .output()
            .expect("Failed to run list");
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).expect("list output is not JSON")
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn dmy(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
