// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the error taxonomy of the loading pipeline and the
//! validation outcome model. It is independent of the filesystem and of any
//! serialization format.

pub mod errors;
pub mod validation;

// Re-export commonly used types
pub use errors::{BoxError, ConfigError, Result};
pub use validation::{IntoValidationOutcome, ValidationErrors, ValidationOutcome};
