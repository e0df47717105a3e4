// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A typical application configuration used across the tests.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    pub name: String,
    pub port: u16,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A well-formed YAML document for [`ServerConfig`].
pub const VALID_YAML: &str = "name: api\nport: 8080\ntags:\n  - blue\n  - green\n";

/// Single-error validator: the first violation wins.
pub fn validate_single(config: &ServerConfig) -> Result<(), String> {
    if config.name.is_empty() {
        return Err("name must not be empty".to_string());
    }
    if config.port == 0 {
        return Err("port must be non-zero".to_string());
    }
    Ok(())
}

/// Multi-error validator: every violation is reported.
pub fn validate_all(config: &ServerConfig) -> Vec<String> {
    let mut errors = Vec::new();
    if config.name.is_empty() {
        errors.push("name must not be empty".to_string());
    }
    if config.port == 0 {
        errors.push("port must be non-zero".to_string());
    }
    errors
}

/// Writes `content` to `name` inside `dir` and returns the full path.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Installs a test subscriber so `tracing` output shows up with `--nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
