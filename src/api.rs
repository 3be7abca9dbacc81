//! High-level API for chi-square linear fits.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point for fitting linear
//! models. It implements a fluent builder for the fit configuration
//! (initial parameters, which of them are held fixed, per-point
//! uncertainties) and produces an immutable, validated [`LinearModel`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Unit sigma and an all-free mask are the defaults.
//! * **Validated**: Parameters are checked once, when `.build()` is called.
//! * **Reusable**: A built model holds no per-fit state, so one model can fit
//!   many datasets, from many threads.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LinearModelBuilder`] via `Lfit::new()`.
//! 2. Chain configuration methods (`.parameters()`, `.fix()`, `.sigma()`, etc.).
//! 3. Call `.build()` and fit with `.fit(x, y, basis)` or `.fit_polynomial(x, y)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::lfit::{LinearModelFit, expand_covariance, lfit};
pub use crate::algorithms::linear::LinearFit;
pub use crate::algorithms::sliding::SlidingMoments;
pub use crate::math::gaussj::GaussJordan;
pub use crate::math::histogram::{Histogram, min_max};
pub use crate::math::moments::{Moments, gaussian, integer_mean};
pub use crate::math::polynomial::{evaluate_polynomial, interpolate, power_basis};
pub use crate::primitives::errors::{FitError, Singularity};
pub use crate::primitives::mask::ParameterMask;
pub use crate::primitives::matrix::Matrix;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a chi-square linear fit.
#[derive(Debug, Clone)]
pub struct LinearModelBuilder<T: Float> {
    /// Initial parameter vector.
    pub parameters: Option<Vec<T>>,

    /// Free/fixed flags (default: all free).
    pub mask: Option<Vec<bool>>,

    /// Parameters held fixed via `.fix()`.
    pub fixed: Vec<usize>,

    /// Per-point measurement uncertainties (default: unit sigma).
    pub sigma: Option<Vec<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for LinearModelBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LinearModelBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            parameters: None,
            mask: None,
            fixed: Vec::new(),
            sigma: None,
            duplicate_param: None,
        }
    }

    /// Set the initial parameter vector. Its length is the model size.
    pub fn parameters(mut self, initial: Vec<T>) -> Self {
        if self.parameters.is_some() {
            self.duplicate_param = Some("parameters");
        }
        self.parameters = Some(initial);
        self
    }

    /// Configure a polynomial of the given degree: `degree + 1`
    /// parameters, all starting at one.
    pub fn polynomial(self, degree: usize) -> Self {
        self.parameters(vec![T::one(); degree + 1])
    }

    /// Set the free/fixed flags (`true` = estimated).
    pub fn mask(mut self, flags: Vec<bool>) -> Self {
        if self.mask.is_some() {
            self.duplicate_param = Some("mask");
        }
        self.mask = Some(flags);
        self
    }

    /// Hold parameter `index` at its initial value.
    pub fn fix(mut self, index: usize) -> Self {
        self.fixed.push(index);
        self
    }

    /// Set the per-point measurement uncertainties.
    pub fn sigma(mut self, sigma: Vec<T>) -> Self {
        if self.sigma.is_some() {
            self.duplicate_param = Some("sigma");
        }
        self.sigma = Some(sigma);
        self
    }

    /// Validate the configuration and produce a model.
    pub fn build(self) -> Result<LinearModel<T>, FitError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Initial parameters are mandatory
        let initial = self.parameters.ok_or(FitError::MissingParameter {
            parameter: "parameters",
        })?;
        Validator::validate_finite(&initial, "parameters")?;

        // Merge mask and individually fixed parameters
        let mut flags = self.mask.unwrap_or_else(|| vec![true; initial.len()]);
        Validator::validate_length("mask", initial.len(), flags.len())?;
        for &index in &self.fixed {
            match flags.get_mut(index) {
                Some(flag) => *flag = false,
                None => {
                    return Err(FitError::ParameterIndex {
                        index,
                        len: initial.len(),
                    })
                }
            }
        }
        let mask = ParameterMask::new(flags)?;

        // Validate sigma values (length is checked against the data at fit time)
        if let Some(ref sigma) = self.sigma {
            Validator::validate_sigma(sigma)?;
        }

        Ok(LinearModel {
            initial,
            mask,
            sigma: self.sigma,
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// Validated, immutable configuration of a chi-square linear fit.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel<T> {
    initial: Vec<T>,
    mask: ParameterMask,
    sigma: Option<Vec<T>>,
}

impl<T: Float> LinearModel<T> {
    /// Fit `y = Σ a_i · basis_i(x)`.
    pub fn fit<F>(&self, x: &[T], y: &[T], basis: F) -> Result<LinearModelFit<T>, FitError>
    where
        F: Fn(T, &[T]) -> Vec<T>,
    {
        match &self.sigma {
            Some(sigma) => lfit(x, y, sigma, &self.initial, &self.mask, basis),
            None => {
                let unit = vec![T::one(); x.len()];
                lfit(x, y, &unit, &self.initial, &self.mask, basis)
            }
        }
    }

    /// Fit a polynomial with one coefficient per parameter.
    pub fn fit_polynomial(&self, x: &[T], y: &[T]) -> Result<LinearModelFit<T>, FitError> {
        self.fit(x, y, power_basis::<T>)
    }

    /// Initial parameter vector.
    #[inline]
    pub fn initial(&self) -> &[T] {
        &self.initial
    }

    /// Free/fixed mask.
    #[inline]
    pub fn mask(&self) -> &ParameterMask {
        &self.mask
    }
}
