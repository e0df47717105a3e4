// SPDX-License-Identifier: MIT OR Apache-2.0

//! Locate, read, deserialize and validate a configuration file in one call.
//!
//! This crate provides a uniform "find → read → parse → validate" pipeline for
//! application configuration. The file format and the business rules are both
//! supplied by the caller; the crate only orchestrates them and reports which
//! stage failed.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Error taxonomy and validation outcomes (`ConfigError`, `ValidationOutcome`)
//! - **Ports**: Trait definitions for the caller's capabilities (`ConfigParser`, `ConfigValidator`)
//! - **Service**: Path resolution and the loading pipeline (`find_config`, `read_config`)
//! - **Adapters**: Ready-made pieces (`YamlParser`, `SearchPaths`)
//!
//! # Path Resolution
//!
//! An explicit path, when given and non-empty, must exist and is used as is.
//! Otherwise every fallback candidate is checked in order and the **last**
//! existing one is used.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the `serde_yaml` backed `YamlParser` adapter (default)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use confpipe::prelude::*;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct AppConfig {
//!     name: String,
//!     port: u16,
//! }
//!
//! fn validate(config: &AppConfig) -> Vec<String> {
//!     let mut errors = Vec::new();
//!     if config.name.is_empty() {
//!         errors.push("name must not be empty".to_string());
//!     }
//!     if config.port == 0 {
//!         errors.push("port must be non-zero".to_string());
//!     }
//!     errors
//! }
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let search = SearchPaths::new()
//!     .with("/etc/myapp/config.yaml")
//!     .with_config_dir("myapp", "com.example", "config.yaml");
//!
//! let mut config = AppConfig::default();
//! let path = read_config(
//!     None::<&str>,
//!     search.as_slice(),
//!     &mut config,
//!     &YamlParser::new(),
//!     &validate,
//! )?;
//! println!("loaded {} from {}", config.name, path.display());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::SearchPaths;
    pub use crate::domain::{ConfigError, Result, ValidationErrors, ValidationOutcome};
    pub use crate::ports::{AcceptAll, ConfigParser, ConfigValidator};
    pub use crate::service::{
        find_config, read_config, read_found_config, ConfigLoader, ConfigLoaderBuilder,
    };

    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
