// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loading pipeline.
//!
//! This module reads a configuration file, hands its bytes to a caller-supplied
//! parser and checks the populated object with a caller-supplied validator.
//! Every failure is returned to the caller immediately; nothing is retried.

use crate::domain::{ConfigError, Result, ValidationOutcome};
use crate::ports::{ConfigParser, ConfigValidator};
use crate::service::resolver::find_config;
use std::fs;
use std::path::{Path, PathBuf};

/// Locates, reads, parses and validates a configuration file.
///
/// The path is resolved with [`find_config`], so an empty or absent `path`
/// triggers the fallback search over `search_paths`. On success the resolved
/// path is returned and `config` holds the validated configuration.
///
/// # Errors
///
/// Resolution errors ([`ConfigError::NotFound`], [`ConfigError::Inaccessible`])
/// are returned before anything is read. The remaining errors are those of
/// [`read_found_config`].
///
/// # Examples
///
/// ```rust,no_run
/// use confpipe::service::read_config;
///
/// #[derive(Default)]
/// struct Settings {
///     raw: String,
/// }
///
/// fn parse(content: &[u8], settings: &mut Settings) -> Result<(), std::str::Utf8Error> {
///     settings.raw = std::str::from_utf8(content)?.to_string();
///     Ok(())
/// }
///
/// fn validate(settings: &Settings) -> Result<(), &'static str> {
///     if settings.raw.is_empty() {
///         return Err("configuration is empty");
///     }
///     Ok(())
/// }
///
/// # fn main() -> confpipe::domain::Result<()> {
/// let mut settings = Settings::default();
/// let path = read_config(
///     None::<&str>,
///     &["/etc/myapp/config.txt", "./config.txt"],
///     &mut settings,
///     &parse,
///     &validate,
/// )?;
/// println!("loaded {}", path.display());
/// # Ok(())
/// # }
/// ```
pub fn read_config<T, P, Q, D, V>(
    path: Option<P>,
    search_paths: &[Q],
    config: &mut T,
    parser: &D,
    validator: &V,
) -> Result<PathBuf>
where
    T: ?Sized,
    P: AsRef<Path>,
    Q: AsRef<Path>,
    D: ConfigParser<T> + ?Sized,
    V: ConfigValidator<T> + ?Sized,
{
    let path = find_config(path, search_paths)?;
    read_found_config(&path, config, parser, validator)?;
    Ok(path)
}

/// Reads, parses and validates the configuration file at a known path.
///
/// Use this when the path has already been resolved, e.g. with [`find_config`].
///
/// # Errors
///
/// * [`ConfigError::ReadError`] - The file could not be read
/// * [`ConfigError::UnmarshalError`] - The parser failed; the validator is not
///   called and `config` may be partially populated
/// * [`ConfigError::ValidationError`] - A single-error validator failed
/// * [`ConfigError::ValidationErrors`] - A multi-error validator reported
///   violations, all of them kept in order
pub fn read_found_config<T, D, V>(
    path: impl AsRef<Path>,
    config: &mut T,
    parser: &D,
    validator: &V,
) -> Result<()>
where
    T: ?Sized,
    D: ConfigParser<T> + ?Sized,
    V: ConfigValidator<T> + ?Sized,
{
    let path = path.as_ref();

    tracing::debug!("Reading configuration file: {}", path.display());
    let content = fs::read(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "Parsing configuration file {} ({} bytes)",
        path.display(),
        content.len()
    );
    parser
        .parse(&content, config)
        .map_err(|source| ConfigError::UnmarshalError {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Validating configuration from {}", path.display());
    match validator.validate(config) {
        ValidationOutcome::Valid => Ok(()),
        ValidationOutcome::Invalid(source) => Err(ConfigError::ValidationError { source }),
        ValidationOutcome::InvalidMany(errors) => Err(ConfigError::ValidationErrors(errors)),
    }
}

/// A reusable description of where a configuration file may live.
///
/// Holds an optional explicit path and an ordered list of fallback candidates,
/// and runs the full pipeline against them. The fallback search follows
/// [`find_config`]: the last existing candidate wins.
///
/// # Examples
///
/// ```rust,no_run
/// use confpipe::service::ConfigLoader;
/// use confpipe::ports::AcceptAll;
///
/// # fn main() -> confpipe::domain::Result<()> {
/// let loader = ConfigLoader::builder()
///     .with_search_path("/etc/myapp/config.txt")
///     .with_search_path("./config.txt")
///     .build();
///
/// let mut raw = Vec::new();
/// let parser = |content: &[u8], target: &mut Vec<u8>| -> Result<(), std::io::Error> {
///     target.extend_from_slice(content);
///     Ok(())
/// };
/// let path = loader.load(&mut raw, &parser, &AcceptAll)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Explicit configuration file path, if any
    path: Option<PathBuf>,
    /// Fallback candidates, in scan order
    search_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Creates a loader with no explicit path and no fallbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new loader builder.
    pub fn builder() -> ConfigLoaderBuilder {
        ConfigLoaderBuilder::new()
    }

    /// Returns the explicit path, if one was configured.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the fallback candidates in scan order.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Resolves the configuration file path without reading it.
    pub fn find(&self) -> Result<PathBuf> {
        find_config(self.path.as_deref(), self.search_paths.as_slice())
    }

    /// Runs the full locate, read, parse and validate pipeline.
    ///
    /// Returns the path of the file that was loaded.
    pub fn load<T, D, V>(&self, config: &mut T, parser: &D, validator: &V) -> Result<PathBuf>
    where
        T: ?Sized,
        D: ConfigParser<T> + ?Sized,
        V: ConfigValidator<T> + ?Sized,
    {
        read_config(
            self.path.as_deref(),
            self.search_paths.as_slice(),
            config,
            parser,
            validator,
        )
    }
}

/// Builder for [`ConfigLoader`].
///
/// # Examples
///
/// ```rust
/// use confpipe::service::ConfigLoaderBuilder;
///
/// let loader = ConfigLoaderBuilder::new()
///     .with_path("/etc/myapp/config.yml")
///     .with_search_paths(["/etc/myapp/config.yml", "./config.yml"])
///     .build();
///
/// assert_eq!(loader.search_paths().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ConfigLoaderBuilder {
    path: Option<PathBuf>,
    search_paths: Vec<PathBuf>,
}

impl ConfigLoaderBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the explicit configuration file path.
    ///
    /// An empty path is treated as no path at all.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Appends a fallback candidate.
    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    /// Appends several fallback candidates, keeping their order.
    pub fn with_search_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Builds the loader.
    pub fn build(self) -> ConfigLoader {
        ConfigLoader {
            path: self.path,
            search_paths: self.search_paths,
        }
    }
}
