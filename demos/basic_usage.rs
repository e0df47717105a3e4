// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the confpipe crate.
//!
//! This example demonstrates:
//! - Building a fallback search list
//! - Loading a YAML file into a typed configuration
//! - Reporting every validation violation at once
//!
//! To run this example:
//! ```bash
//! # Use an explicit file
//! cargo run --example basic_usage -- ./myapp.yaml
//!
//! # Or let the search list find one
//! cargo run --example basic_usage
//! ```

use confpipe::prelude::*;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct AppConfig {
    name: String,
    port: u16,
    #[serde(default)]
    workers: usize,
}

fn validate(config: &AppConfig) -> Vec<String> {
    let mut errors = Vec::new();
    if config.name.trim().is_empty() {
        errors.push("name must not be empty".to_string());
    }
    if config.port == 0 {
        errors.push("port must be non-zero".to_string());
    }
    if config.workers > 256 {
        errors.push(format!("workers must be at most 256, got {}", config.workers));
    }
    errors
}

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== confpipe: Basic Usage ===\n");

    let explicit = std::env::args().nth(1);

    // Most preferred location goes last
    let search = SearchPaths::new()
        .with("/etc/myapp/config.yaml")
        .with_config_dir("myapp", "com.example", "config.yaml")
        .with_current_dir("myapp.yaml");

    println!("Search order:");
    for path in &search {
        println!("  {}", path.display());
    }

    let mut config = AppConfig::default();
    match read_config(
        explicit.as_deref(),
        search.as_slice(),
        &mut config,
        &YamlParser::new(),
        &validate,
    ) {
        Ok(path) => {
            println!("\n✓ Loaded {}", path.display());
            println!("  {:?}", config);
        }
        Err(ConfigError::ValidationErrors(errors)) => {
            println!("\n✗ Configuration is invalid:");
            for error in &errors {
                println!("  - {}", error);
            }
        }
        Err(e) => {
            println!("\n✗ {}", e);
        }
    }
}
