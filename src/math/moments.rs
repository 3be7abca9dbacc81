//! Distribution moments of a sample sequence.
//!
//! ## Purpose
//!
//! This module summarizes a latency sample by its first four moments: mean,
//! mean absolute deviation, sample standard deviation, skewness and excess
//! kurtosis. It also provides the normal density used to overlay a fitted
//! Gaussian on a histogram.
//!
//! ## Design notes
//!
//! * **Two passes**: The first pass computes the mean; the second accumulates
//!   deviations. The variance uses the corrected two-pass formula
//!   `(Σd² - (Σd)²/n) / (n-1)`, where the `(Σd)²/n` term cancels the
//!   round-off left in the mean.
//!
//! ## Invariants
//!
//! * At least two samples are required.
//! * Zero variance is an error: skewness and kurtosis are undefined.

// External dependencies
use num_traits::{Float, FloatConst};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::count;
use crate::primitives::errors::FitError;

// ============================================================================
// Moments
// ============================================================================

/// First four moments of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments<T> {
    /// Arithmetic mean.
    pub mean: T,

    /// Mean absolute deviation from the mean.
    pub adev: T,

    /// Sample standard deviation.
    pub sdev: T,

    /// Sample variance (`sdev²`).
    pub variance: T,

    /// Skewness (third standardized moment).
    pub skew: T,

    /// Excess kurtosis (fourth standardized moment minus 3).
    pub curt: T,
}

impl<T: Float> Moments<T> {
    /// Compute the moments of `data`.
    pub fn compute(data: &[T]) -> Result<Self, FitError> {
        Validator::validate_samples(data, "data", 2)?;

        let an: T = count(data.len());
        let mean = data.iter().fold(T::zero(), |acc, &v| acc + v) / an;

        let mut ep = T::zero();
        let mut adev = T::zero();
        let mut var = T::zero();
        let mut skew = T::zero();
        let mut curt = T::zero();
        for &v in data {
            let s = v - mean;
            adev = adev + s.abs();
            ep = ep + s;
            let mut p = s * s;
            var = var + p;
            p = p * s;
            skew = skew + p;
            p = p * s;
            curt = curt + p;
        }

        adev = adev / an;
        let variance = (var - ep * ep / an) / count::<T>(data.len() - 1);
        if variance == T::zero() {
            return Err(FitError::ZeroVariance);
        }
        let sdev = variance.sqrt();
        let three: T = count(3);

        Ok(Self {
            mean,
            adev,
            sdev,
            variance,
            skew: skew / (an * variance * sdev),
            curt: curt / (an * variance * variance) - three,
        })
    }

    /// Normal density with this sample's mean and standard deviation.
    pub fn density(&self, x: T) -> T
    where
        T: FloatConst,
    {
        gaussian(x, self.mean, self.sdev)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Normal probability density at `x`.
pub fn gaussian<T: Float + FloatConst>(x: T, mean: T, sdev: T) -> T {
    let two = T::one() + T::one();
    let d = x - mean;
    (-(d * d) / (two * sdev * sdev)).exp() / (sdev * (two * T::PI()).sqrt())
}

/// Mean of raw integer samples (e.g. nanosecond latencies).
///
/// Sums in `i128`, so no realistic input overflows. Returns `None` for an
/// empty slice.
pub fn integer_mean(data: &[i64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let sum: i128 = data.iter().map(|&v| i128::from(v)).sum();
    Some(sum as f64 / data.len() as f64)
}
