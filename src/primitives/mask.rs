//! Free/fixed view over a fit parameter vector.
//!
//! ## Purpose
//!
//! A [`ParameterMask`] marks each model parameter as free (estimated by the
//! fit) or fixed (held at its supplied value). It precomputes the list of
//! free positions so the normal-equations assembly and the covariance
//! expansion both walk the same index map.
//!
//! ## Invariants
//!
//! * At least one parameter is free.
//! * `free_indices()` is strictly increasing.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::FitError;

/// Which parameters of a linear model are estimated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterMask {
    flags: Vec<bool>,
    free: Vec<usize>,
}

impl ParameterMask {
    /// Build a mask from per-parameter flags (`true` = free).
    pub fn new(flags: Vec<bool>) -> Result<Self, FitError> {
        let free: Vec<usize> = flags
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| f.then_some(i))
            .collect();
        if free.is_empty() {
            return Err(FitError::NoFreeParameters);
        }
        Ok(Self { flags, free })
    }

    /// Mask with every one of `n` parameters free.
    pub fn all_free(n: usize) -> Result<Self, FitError> {
        Self::new(vec![true; n])
    }

    /// Total number of parameters (free and fixed).
    #[inline]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Always `false`: a valid mask has at least one free parameter.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Number of free parameters.
    #[inline]
    pub fn n_free(&self) -> usize {
        self.free.len()
    }

    /// Whether parameter `i` is estimated.
    #[inline]
    pub fn is_free(&self, i: usize) -> bool {
        self.flags.get(i).copied().unwrap_or(false)
    }

    /// Positions of the free parameters, in order.
    #[inline]
    pub fn free_indices(&self) -> &[usize] {
        &self.free
    }

    /// Positions of the fixed parameters, in order.
    pub fn fixed_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| (!f).then_some(i))
    }

    /// Raw per-parameter flags.
    #[inline]
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }
}
