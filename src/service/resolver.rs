// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file path resolution.
//!
//! This module decides which single file on disk is the configuration file,
//! given an optional explicit path and an ordered list of fallback candidates.

use crate::domain::{ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves the configuration file path.
///
/// If `path` is `Some` and non-empty, it must refer to an existing filesystem
/// entry; it is returned unchanged and `search_paths` is never consulted. An
/// explicit path that cannot be stat-checked yields
/// [`ConfigError::Inaccessible`].
///
/// If `path` is `None` or empty, every entry of `search_paths` is stat-checked
/// in order. Candidates that cannot be stat-checked are skipped. The scan does
/// not stop at the first hit: the **last** existing candidate in the list is
/// returned. When no candidate exists, [`ConfigError::NotFound`] is returned.
///
/// # Examples
///
/// ```rust,no_run
/// use confpipe::service::find_config;
///
/// # fn main() -> confpipe::domain::Result<()> {
/// // Explicit path, fallbacks ignored
/// let path = find_config(Some("/etc/myapp/config.yml"), &["./config.yml"])?;
///
/// // Fallback search; the last existing candidate wins
/// let path = find_config(None::<&str>, &["/etc/myapp/config.yml", "./config.yml"])?;
/// # Ok(())
/// # }
/// ```
pub fn find_config<P, Q>(path: Option<P>, search_paths: &[Q]) -> Result<PathBuf>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    match path {
        Some(p) if !p.as_ref().as_os_str().is_empty() => stat_explicit(p.as_ref()),
        _ => search(search_paths),
    }
}

fn stat_explicit(path: &Path) -> Result<PathBuf> {
    fs::metadata(path).map_err(|source| ConfigError::Inaccessible {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Using explicit configuration file: {}", path.display());
    Ok(path.to_path_buf())
}

fn search<Q: AsRef<Path>>(search_paths: &[Q]) -> Result<PathBuf> {
    tracing::debug!(
        "Searching {} candidate(s) for configuration file",
        search_paths.len()
    );

    let mut found: Option<&Path> = None;
    for candidate in search_paths {
        let candidate = candidate.as_ref();
        match fs::metadata(candidate) {
            Ok(_) => {
                tracing::trace!("Configuration candidate exists: {}", candidate.display());
                found = Some(candidate);
            }
            Err(e) => {
                tracing::trace!(
                    "Skipping configuration candidate {}: {}",
                    candidate.display(),
                    e
                );
            }
        }
    }

    match found {
        Some(path) => {
            tracing::debug!("Resolved configuration file: {}", path.display());
            Ok(path.to_path_buf())
        }
        None => Err(ConfigError::NotFound),
    }
}
