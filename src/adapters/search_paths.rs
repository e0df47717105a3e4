// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fallback search path construction.
//!
//! This module provides [`SearchPaths`], an ordered list of candidate
//! configuration file locations, with helpers for the usual places an
//! application keeps its configuration.

use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

/// An ordered list of fallback configuration file candidates.
///
/// The resolver scans every candidate and keeps the **last** one that exists,
/// so push the most preferred location last.
///
/// # Examples
///
/// ```rust
/// use confpipe::adapters::SearchPaths;
///
/// let paths = SearchPaths::new()
///     .with("/etc/myapp/config.yaml")
///     .with_config_dir("myapp", "com.example", "config.yaml")
///     .with_current_dir("myapp.yaml");
///
/// assert!(!paths.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPaths {
    paths: Vec<PathBuf>,
}

impl SearchPaths {
    /// Creates an empty search path list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a candidate.
    pub fn push(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    /// Appends a candidate, builder style.
    pub fn with(mut self, path: impl Into<PathBuf>) -> Self {
        self.push(path);
        self
    }

    /// Appends `file_name` inside the OS-appropriate configuration directory.
    ///
    /// This uses the `directories` crate, e.g. `~/.config/<app_name>/` on Linux.
    /// Nothing is appended when the platform has no home directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    /// * `file_name` - The configuration file name (e.g., "config.yaml")
    pub fn with_config_dir(mut self, app_name: &str, qualifier: &str, file_name: &str) -> Self {
        match ProjectDirs::from(qualifier, "", app_name) {
            Some(dirs) => self.push(dirs.config_dir().join(file_name)),
            None => tracing::debug!(
                "No configuration directory for '{}', skipping {}",
                app_name,
                file_name
            ),
        }
        self
    }

    /// Appends `file_name` inside the current working directory.
    ///
    /// Nothing is appended when the current directory cannot be determined.
    pub fn with_current_dir(mut self, file_name: &str) -> Self {
        match env::current_dir() {
            Ok(dir) => self.push(dir.join(file_name)),
            Err(e) => tracing::debug!("Cannot determine current directory: {}", e),
        }
        self
    }

    /// Returns the candidates in scan order.
    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Returns the number of candidates.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns `true` if there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Consumes the list and returns the candidates.
    pub fn into_vec(self) -> Vec<PathBuf> {
        self.paths
    }
}

impl AsRef<[PathBuf]> for SearchPaths {
    fn as_ref(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for SearchPaths {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for SearchPaths {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a> IntoIterator for &'a SearchPaths {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
