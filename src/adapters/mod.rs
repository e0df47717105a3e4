// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing ready-made pieces for the loading pipeline.
//!
//! This module contains a YAML implementation of the `ConfigParser` port and a
//! builder for the ordered fallback list consumed by the path resolver.

pub mod search_paths;
#[cfg(feature = "yaml")]
pub mod yaml_file;

pub use search_paths::SearchPaths;
#[cfg(feature = "yaml")]
pub use yaml_file::YamlParser;
