//! Area-normalized histogram binning.
//!
//! ## Purpose
//!
//! This module bins a sample sequence into `ncol` equal-width columns
//! spanning `[min, max]`, plus one trailing column that receives the maximum
//! value, and normalizes the counts into a density whose area is one.
//!
//! ## Key concepts
//!
//! * **Bin index**: A sample `d` lands in column `floor((d - min) / width)`.
//!   The maximum lands at index `ncol`, hence `ncol + 1` columns.
//! * **Normalization**: Each count is divided by `n · width`, so
//!   `Σ density_i · width = 1`.
//!
//! ## Invariants
//!
//! * `max > min`; constant input is reported as [`FitError::ZeroRange`].
//! * The bin width and its reciprocal are finite and non-zero; a range
//!   that overflows, or underflows once divided by `ncol`, is reported as
//!   [`FitError::InvalidBinWidth`].
//! * Every sample is counted exactly once.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::count;
use crate::primitives::errors::FitError;

/// Normalized density histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram<T> {
    /// Smallest sample.
    pub min: T,

    /// Largest sample.
    pub max: T,

    /// Column width, `(max - min) / ncol`.
    pub width: T,

    /// Density per column (`ncol + 1` entries).
    pub density: Vec<T>,
}

impl<T: Float> Histogram<T> {
    /// Bin `data` into `ncol` columns (plus the trailing max column).
    pub fn build(data: &[T], ncol: usize) -> Result<Self, FitError> {
        Validator::validate_columns(ncol)?;
        Validator::validate_samples(data, "data", 1)?;

        let (min, max) = min_max(data).ok_or(FitError::EmptyInput)?;
        if max == min {
            return Err(FitError::ZeroRange);
        }
        let width = (max - min) / count(ncol);
        if width == T::zero() || !width.is_finite() || !width.recip().is_finite() {
            return Err(FitError::InvalidBinWidth {
                width: width.to_f64().unwrap_or(f64::NAN),
                ncol,
            });
        }

        let mut counts: Vec<usize> = vec![0; ncol + 1];
        let mut clamped = 0usize;
        for &d in data {
            // d >= min, so only an index past usize fails to convert
            let col = match ((d - min) / width).floor().to_usize() {
                Some(col) if col <= ncol => col,
                _ => {
                    clamped += 1;
                    ncol
                }
            };
            counts[col] += 1;
        }
        if clamped > 0 {
            log::warn!("histogram: {} samples clamped into the trailing column", clamped);
        }

        // Fraction first, then width: n · width may overflow
        let n = count::<T>(data.len());
        let density = counts
            .into_iter()
            .map(|c| count::<T>(c) / n / width)
            .collect();

        Ok(Self {
            min,
            max,
            width,
            density,
        })
    }

    /// Number of columns, including the trailing one.
    #[inline]
    pub fn len(&self) -> usize {
        self.density.len()
    }

    /// Whether the histogram has no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.density.is_empty()
    }

    /// Lower edge of column `i`.
    #[inline]
    pub fn bin_start(&self, i: usize) -> T {
        self.min + count::<T>(i) * self.width
    }

    /// Total area under the density, `Σ density_i · width`.
    pub fn area(&self) -> T {
        self.density.iter().fold(T::zero(), |acc, &d| acc + d) * self.width
    }
}

/// Smallest and largest value of `data`, or `None` when it is empty.
pub fn min_max<T: Float>(data: &[T]) -> Option<(T, T)> {
    let first = *data.first()?;
    Some(
        data.iter()
            .fold((first, first), |(lo, hi), &d| (lo.min(d), hi.max(d))),
    )
}
