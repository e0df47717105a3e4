// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration pipeline.
//!
//! Every stage of the pipeline (locate, stat, read, parse, validate) has its own
//! variant so callers can tell exactly where loading stopped. All errors use
//! `thiserror` for proper error handling and conversion.

use crate::domain::validation::ValidationErrors;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A boxed, thread-safe error as produced by caller-supplied parsers and validators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The main error type for configuration loading.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use confpipe::domain::ConfigError;
///
/// let error = ConfigError::NotFound;
/// assert_eq!(error.to_string(), "could not locate configuration file");
/// assert!(error.path().is_none());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// No explicit path was given and none of the fallback candidates exist.
    #[error("could not locate configuration file")]
    NotFound,

    /// An explicit path was given but it could not be stat-checked.
    #[error("could not stat configuration file {}: {source}", path.display())]
    Inaccessible {
        /// The explicit path that was checked
        path: PathBuf,
        /// The underlying filesystem error
        source: std::io::Error,
    },

    /// The resolved file could not be read.
    #[error("unable to read configuration file {}: {source}", path.display())]
    ReadError {
        /// The resolved path
        path: PathBuf,
        /// The underlying filesystem error
        source: std::io::Error,
    },

    /// The parser rejected the file contents.
    #[error("unable to unmarshal configuration file {}: {source}", path.display())]
    UnmarshalError {
        /// The resolved path
        path: PathBuf,
        /// The error returned by the parser
        source: BoxError,
    },

    /// A single-error validator rejected the configuration.
    #[error("{source}")]
    ValidationError {
        /// The error returned by the validator
        source: BoxError,
    },

    /// A multi-error validator reported one or more violations.
    #[error("{0}")]
    ValidationErrors(ValidationErrors),
}

impl ConfigError {
    /// Returns the file path associated with this error, if the failing stage had one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Inaccessible { path, .. }
            | ConfigError::ReadError { path, .. }
            | ConfigError::UnmarshalError { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Returns the validation failures carried by this error.
    ///
    /// A single-error validation failure yields a one-element slice; every
    /// other variant yields an empty slice.
    pub fn validation_errors(&self) -> &[BoxError] {
        match self {
            ConfigError::ValidationError { source } => std::slice::from_ref(source),
            ConfigError::ValidationErrors(errors) => errors.as_slice(),
            _ => &[],
        }
    }

    /// Returns `true` if this error was produced by the validation stage.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ConfigError::ValidationError { .. } | ConfigError::ValidationErrors(_)
        )
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
