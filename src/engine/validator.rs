//! Input validation for fitting routines and model configuration.
//!
//! ## Purpose
//!
//! This module checks the shapes and values handed to the fitting engine
//! before any arithmetic runs: sequence lengths, finiteness, measurement
//! uncertainties, histogram column counts and window sizes.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive (lengths
//!   before per-element scans).
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not detect numerical degeneracy (zero variance,
//!   singular systems); that is reported by the routines themselves.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FitError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fitting inputs and configuration.
///
/// All methods return `Result<(), FitError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a single sample sequence holding at least `min` values.
    pub fn validate_samples<T: Float>(
        data: &[T],
        name: &'static str,
        min: usize,
    ) -> Result<(), FitError> {
        if data.is_empty() {
            return Err(FitError::EmptyInput);
        }
        if data.len() < min {
            return Err(FitError::TooFewPoints {
                got: data.len(),
                min,
            });
        }
        Self::validate_finite(data, name)
    }

    /// Validate paired abscissae and ordinates holding at least `min` points.
    pub fn validate_pair<T: Float>(x: &[T], y: &[T], min: usize) -> Result<(), FitError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(FitError::EmptyInput);
        }

        // Check 2: Matching lengths
        if x.len() != y.len() {
            return Err(FitError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        // Check 3: Sufficient points
        if x.len() < min {
            return Err(FitError::TooFewPoints { got: x.len(), min });
        }

        // Check 4: All values finite
        Self::validate_finite(x, "x")?;
        Self::validate_finite(y, "y")
    }

    /// Validate that every value is finite.
    pub fn validate_finite<T: Float>(data: &[T], name: &'static str) -> Result<(), FitError> {
        match data.iter().position(|v| !v.is_finite()) {
            Some(index) => Err(FitError::NonFinite { name, index }),
            None => Ok(()),
        }
    }

    /// Validate that a companion sequence has the expected length.
    pub fn validate_length(
        name: &'static str,
        expected: usize,
        got: usize,
    ) -> Result<(), FitError> {
        if expected != got {
            return Err(FitError::MismatchedLength {
                name,
                expected,
                got,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate per-point measurement uncertainties (finite and > 0).
    pub fn validate_sigma<T: Float>(sigma: &[T]) -> Result<(), FitError> {
        for (index, &s) in sigma.iter().enumerate() {
            if !s.is_finite() || s <= T::zero() {
                return Err(FitError::InvalidSigma {
                    index,
                    value: s.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }

    /// Validate the histogram column count.
    pub fn validate_columns(ncol: usize) -> Result<(), FitError> {
        if ncol == 0 {
            return Err(FitError::InvalidColumns(ncol));
        }
        Ok(())
    }

    /// Validate a sliding window length against the data length.
    pub fn validate_window(window: usize, len: usize) -> Result<(), FitError> {
        if window < 2 || window > len {
            return Err(FitError::InvalidWindow { window, len });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), FitError> {
        if let Some(param) = duplicate_param {
            return Err(FitError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
