// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration validator trait definition.

use crate::domain::{IntoValidationOutcome, ValidationOutcome};

/// A trait for checking business rules on a fully-populated configuration.
///
/// Any function or closure `Fn(&T) -> R` is a validator when `R` implements
/// [`IntoValidationOutcome`]. The return type picks the calling convention:
///
/// - `Result<(), E>` or `Option<E>`: single-error form
/// - `Vec<E>`: multi-error form, where an empty vector means valid
/// - `ValidationOutcome`: either, decided at runtime
///
/// # Examples
///
/// ```rust
/// use confpipe::ports::ConfigValidator;
///
/// struct Server {
///     port: u16,
/// }
///
/// let single = |s: &Server| if s.port == 0 { Err("port is zero") } else { Ok(()) };
/// assert!(single.validate(&Server { port: 8080 }).is_valid());
///
/// let multi = |s: &Server| {
///     let mut errors = Vec::new();
///     if s.port < 1024 {
///         errors.push("port is privileged");
///     }
///     errors
/// };
/// assert!(!multi.validate(&Server { port: 80 }).is_valid());
/// ```
pub trait ConfigValidator<T: ?Sized> {
    /// Validates `config` and reports every violation found.
    fn validate(&self, config: &T) -> ValidationOutcome;
}

impl<T, F, R> ConfigValidator<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> R,
    R: IntoValidationOutcome,
{
    fn validate(&self, config: &T) -> ValidationOutcome {
        self(config).into_outcome()
    }
}

/// A validator that accepts every configuration.
///
/// Useful when the parser already enforces everything the application needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl<T: ?Sized> ConfigValidator<T> for AcceptAll {
    fn validate(&self, _config: &T) -> ValidationOutcome {
        ValidationOutcome::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Limits {
        min: i32,
        max: i32,
    }

    fn check_single(limits: &Limits) -> Result<(), String> {
        if limits.min > limits.max {
            return Err(format!("min {} exceeds max {}", limits.min, limits.max));
        }
        Ok(())
    }

    fn check_all(limits: &Limits) -> Vec<String> {
        let mut errors = Vec::new();
        if limits.min < 0 {
            errors.push("min is negative".to_string());
        }
        if limits.max < 0 {
            errors.push("max is negative".to_string());
        }
        errors
    }

    #[test]
    fn test_single_error_validator() {
        assert!(check_single.validate(&Limits { min: 1, max: 2 }).is_valid());
        match check_single.validate(&Limits { min: 3, max: 2 }) {
            ValidationOutcome::Invalid(e) => assert_eq!(e.to_string(), "min 3 exceeds max 2"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_multi_error_validator() {
        assert!(check_all.validate(&Limits { min: 0, max: 0 }).is_valid());
        match check_all.validate(&Limits { min: -1, max: -1 }) {
            ValidationOutcome::InvalidMany(errors) => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors.as_slice()[0].to_string(), "min is negative");
                assert_eq!(errors.as_slice()[1].to_string(), "max is negative");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_accept_all() {
        assert!(AcceptAll.validate(&Limits { min: 9, max: -9 }).is_valid());
        assert!(ConfigValidator::<str>::validate(&AcceptAll, "anything").is_valid());
    }
}
