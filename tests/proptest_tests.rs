// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests use property-based testing to verify path resolution and
//! validation outcomes against arbitrary inputs.

use confpipe::domain::{ConfigError, IntoValidationOutcome, ValidationOutcome};
use confpipe::service::find_config;
use proptest::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates one candidate per flag; `true` means the file exists on disk.
fn candidates(dir: &TempDir, exists: &[bool]) -> Vec<PathBuf> {
    exists
        .iter()
        .enumerate()
        .map(|(i, &present)| {
            let path = dir.path().join(format!("candidate-{}.yml", i));
            if present {
                fs::write(&path, "k: v\n").unwrap();
            }
            path
        })
        .collect()
}

// The resolved fallback is always the last existing candidate
proptest! {
    #[test]
    fn test_fallback_resolves_to_last_existing(exists in prop::collection::vec(any::<bool>(), 0..8)) {
        let dir = TempDir::new().unwrap();
        let paths = candidates(&dir, &exists);

        let expected = exists.iter().rposition(|&e| e).map(|i| paths[i].clone());
        match (find_config(None::<&str>, &paths), expected) {
            (Ok(resolved), Some(expected)) => prop_assert_eq!(resolved, expected),
            (Err(ConfigError::NotFound), None) => {}
            (other, expected) => prop_assert!(false, "got {:?}, expected {:?}", other, expected),
        }
    }
}

// An existing explicit path is returned whatever the fallbacks are
proptest! {
    #[test]
    fn test_explicit_path_ignores_fallbacks(exists in prop::collection::vec(any::<bool>(), 0..6)) {
        let dir = TempDir::new().unwrap();
        let paths = candidates(&dir, &exists);
        let explicit = dir.path().join("explicit.yml");
        fs::write(&explicit, "k: v\n").unwrap();

        prop_assert_eq!(find_config(Some(&explicit), &paths).unwrap(), explicit);
    }
}

// A missing explicit path is always Inaccessible, even with existing fallbacks
proptest! {
    #[test]
    fn test_missing_explicit_path_is_inaccessible(
        name in "[a-z]{1,12}",
        exists in prop::collection::vec(any::<bool>(), 0..6)
    ) {
        let dir = TempDir::new().unwrap();
        let paths = candidates(&dir, &exists);
        let explicit = dir.path().join(format!("{}.missing", name));

        let err = find_config(Some(&explicit), &paths).unwrap_err();
        let is_inaccessible = matches!(err, ConfigError::Inaccessible { .. });
        prop_assert!(is_inaccessible);
        prop_assert_eq!(err.path(), Some(explicit.as_path()));
    }
}

// Multi-error outcomes keep every violation in order; empty means valid
proptest! {
    #[test]
    fn test_multi_error_outcome_preserves_order(messages in prop::collection::vec("[a-z ]{1,20}", 0..10)) {
        match messages.clone().into_outcome() {
            ValidationOutcome::Valid => prop_assert!(messages.is_empty()),
            ValidationOutcome::InvalidMany(errors) => {
                let got: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                prop_assert_eq!(got, messages);
            }
            ValidationOutcome::Invalid(_) => prop_assert!(false, "single error from a collection"),
        }
    }
}

// Single-error outcomes carry the message unchanged
proptest! {
    #[test]
    fn test_single_error_outcome_message(message in "\\PC{1,40}") {
        match Err::<(), _>(message.clone()).into_outcome() {
            ValidationOutcome::Invalid(e) => prop_assert_eq!(e.to_string(), message),
            other => prop_assert!(false, "unexpected outcome: {:?}", other),
        }
    }
}
