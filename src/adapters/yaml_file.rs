// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML configuration parser adapter.
//!
//! This module provides a [`ConfigParser`] that deserializes YAML into any
//! `serde`-deserializable configuration type.

use crate::domain::BoxError;
use crate::ports::ConfigParser;
use serde::de::DeserializeOwned;

/// YAML parser implementation.
///
/// The whole document is deserialized into a fresh value which then replaces
/// the target, so a malformed file leaves the target untouched.
///
/// # Examples
///
/// ```rust
/// use confpipe::adapters::YamlParser;
/// use confpipe::ports::ConfigParser;
/// use serde::Deserialize;
///
/// #[derive(Debug, Default, Deserialize)]
/// struct Database {
///     host: String,
///     port: u16,
/// }
///
/// let mut db = Database::default();
/// YamlParser::new()
///     .parse(b"host: localhost\nport: 5432", &mut db)
///     .unwrap();
/// assert_eq!(db.host, "localhost");
/// assert_eq!(db.port, 5432);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> ConfigParser<T> for YamlParser {
    fn parse(&self, content: &[u8], target: &mut T) -> Result<(), BoxError> {
        *target = serde_yaml::from_slice(content)?;
        Ok(())
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
