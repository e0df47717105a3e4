// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the traits for the two capabilities the caller plugs
//! into the loading pipeline: deserializing file contents and validating the
//! resulting configuration object.

pub mod parser;
pub mod validator;

// Re-export commonly used types
pub use parser::ConfigParser;
pub use validator::{AcceptAll, ConfigValidator};
