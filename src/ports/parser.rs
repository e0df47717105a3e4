// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which provides an interface for
//! deserializing raw configuration file bytes (YAML, TOML, JSON, etc.) into a
//! caller-owned configuration object.

use crate::domain::BoxError;

/// A trait for deserializing configuration file contents.
///
/// The loader never interprets the file format itself: it reads the bytes and
/// hands them to a `ConfigParser`, which populates the target in place.
///
/// A parser that fails is allowed to leave the target partially populated.
///
/// Any function or closure with the signature
/// `Fn(&[u8], &mut T) -> Result<(), E>` is a parser, so most callers never
/// implement this trait by hand.
///
/// # Examples
///
/// ```rust
/// use confpipe::ports::ConfigParser;
/// use confpipe::domain::BoxError;
///
/// struct LineParser;
///
/// impl ConfigParser<Vec<String>> for LineParser {
///     fn parse(&self, content: &[u8], target: &mut Vec<String>) -> Result<(), BoxError> {
///         let text = std::str::from_utf8(content)?;
///         *target = text.lines().map(str::to_string).collect();
///         Ok(())
///     }
/// }
///
/// let mut lines = Vec::new();
/// LineParser.parse(b"a\nb", &mut lines).unwrap();
/// assert_eq!(lines, vec!["a", "b"]);
/// ```
pub trait ConfigParser<T: ?Sized> {
    /// Deserializes `content` into `target`.
    ///
    /// # Arguments
    ///
    /// * `content` - The raw bytes of the configuration file
    /// * `target` - The configuration object to populate
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The target was populated
    /// * `Err(BoxError)` - The content is malformed for this format
    fn parse(&self, content: &[u8], target: &mut T) -> Result<(), BoxError>;

    /// Returns the file extensions this parser is meant for, without the leading dot.
    ///
    /// Informational only; the loader does not select parsers by extension.
    fn supported_extensions(&self) -> &[&str] {
        &[]
    }
}

impl<T, F, E> ConfigParser<T> for F
where
    T: ?Sized,
    F: Fn(&[u8], &mut T) -> Result<(), E>,
    E: Into<BoxError>,
{
    fn parse(&self, content: &[u8], target: &mut T) -> Result<(), BoxError> {
        self(content, target).map_err(Into::into)
    }
}
