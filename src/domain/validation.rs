// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validation outcome model.
//!
//! Validators come in two shapes: those that report a single failure and those
//! that report every violation they find. Both are normalised into a
//! [`ValidationOutcome`] so the loader handles them the same way.

use crate::domain::errors::BoxError;
use std::fmt;

/// The result of validating a fully-populated configuration object.
///
/// # Examples
///
/// ```
/// use confpipe::domain::ValidationOutcome;
///
/// let ok: ValidationOutcome = Ok::<(), &str>(()).into();
/// assert!(ok.is_valid());
///
/// let many: ValidationOutcome = vec!["name is empty", "port is zero"].into();
/// assert!(!many.is_valid());
/// ```
#[derive(Debug)]
pub enum ValidationOutcome {
    /// The configuration satisfies every constraint.
    Valid,
    /// A single-error validator rejected the configuration.
    Invalid(BoxError),
    /// A multi-error validator reported a non-empty set of violations.
    InvalidMany(ValidationErrors),
}

impl ValidationOutcome {
    /// Returns `true` if no violation was reported.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Builds an outcome from a collection of violations; an empty collection is valid.
    pub fn from_errors<I, E>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<BoxError>,
    {
        let errors = ValidationErrors::from_iter(errors);
        if errors.is_empty() {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::InvalidMany(errors)
        }
    }
}

/// Conversion from a validator's return value into a [`ValidationOutcome`].
///
/// Implemented for the single-error form (`Result<(), E>`, `Option<E>`), the
/// multi-error form (`Vec<E>`), and for `ValidationOutcome` itself.
pub trait IntoValidationOutcome {
    /// Performs the conversion.
    fn into_outcome(self) -> ValidationOutcome;
}

impl IntoValidationOutcome for ValidationOutcome {
    fn into_outcome(self) -> ValidationOutcome {
        self
    }
}

impl<E: Into<BoxError>> IntoValidationOutcome for std::result::Result<(), E> {
    fn into_outcome(self) -> ValidationOutcome {
        match self {
            Ok(()) => ValidationOutcome::Valid,
            Err(e) => ValidationOutcome::Invalid(e.into()),
        }
    }
}

impl<E: Into<BoxError>> IntoValidationOutcome for Option<E> {
    fn into_outcome(self) -> ValidationOutcome {
        match self {
            None => ValidationOutcome::Valid,
            Some(e) => ValidationOutcome::Invalid(e.into()),
        }
    }
}

impl<E: Into<BoxError>> IntoValidationOutcome for Vec<E> {
    fn into_outcome(self) -> ValidationOutcome {
        ValidationOutcome::from_errors(self)
    }
}

impl<E: Into<BoxError>> From<std::result::Result<(), E>> for ValidationOutcome {
    fn from(result: std::result::Result<(), E>) -> Self {
        result.into_outcome()
    }
}

impl<E: Into<BoxError>> From<Vec<E>> for ValidationOutcome {
    fn from(errors: Vec<E>) -> Self {
        errors.into_outcome()
    }
}

/// An ordered collection of validation violations.
///
/// Violations keep the order in which the validator produced them.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<BoxError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a violation.
    pub fn push(&mut self, error: impl Into<BoxError>) {
        self.errors.push(error.into());
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the violations as a slice.
    pub fn as_slice(&self) -> &[BoxError] {
        &self.errors
    }

    /// Iterates over the violations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, BoxError> {
        self.errors.iter()
    }

    /// Consumes the collection and returns the underlying violations.
    pub fn into_vec(self) -> Vec<BoxError> {
        self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<E: Into<BoxError>> FromIterator<E> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<E: Into<BoxError>> From<Vec<E>> for ValidationErrors {
    fn from(errors: Vec<E>) -> Self {
        errors.into_iter().collect()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = BoxError;
    type IntoIter = std::vec::IntoIter<BoxError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a BoxError;
    type IntoIter = std::slice::Iter<'a, BoxError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_result_is_valid() {
        let outcome = Ok::<(), String>(()).into_outcome();
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_err_result_is_single_error() {
        let outcome = Err::<(), _>("port out of range").into_outcome();
        match outcome {
            ValidationOutcome::Invalid(e) => assert_eq!(e.to_string(), "port out of range"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_option_forms() {
        assert!(None::<String>.into_outcome().is_valid());
        assert!(!Some("bad").into_outcome().is_valid());
    }

    #[test]
    fn test_empty_vec_is_valid() {
        let outcome = Vec::<String>::new().into_outcome();
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_vec_keeps_order() {
        let outcome = vec!["first", "second"].into_outcome();
        match outcome {
            ValidationOutcome::InvalidMany(errors) => {
                let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                assert_eq!(messages, vec!["first", "second"]);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_validation_errors_display() {
        let mut errors = ValidationErrors::new();
        assert_eq!(errors.to_string(), "");
        errors.push("one");
        errors.push(String::from("two"));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.to_string(), "one; two");
    }

    #[test]
    fn test_validation_errors_into_vec() {
        let errors = ValidationErrors::from(vec!["x", "y", "z"]);
        let v = errors.into_vec();
        assert_eq!(v.len(), 3);
        assert_eq!(v[2].to_string(), "z");
    }
}
