// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the path resolver and the loading pipeline.
//!
//! [`find_config`] decides which file to use; [`read_config`] and
//! [`read_found_config`] read, parse and validate it.

pub mod loader;
pub mod resolver;

// Re-export commonly used types
pub use loader::{read_config, read_found_config, ConfigLoader, ConfigLoaderBuilder};
pub use resolver::find_config;
