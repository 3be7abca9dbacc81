//! Sliding-window moments for drift detection.
//!
//! ## Purpose
//!
//! Latency series often drift during a benchmark run (warm-up, queue growth).
//! This module computes the mean and standard deviation of every complete
//! window of consecutive samples, and fits a straight line through the
//! window means to quantify the drift.
//!
//! ## Invariants
//!
//! * `2 <= window <= len`; `len - window + 1` windows are produced.
//! * A window with zero variance aborts the computation with
//!   [`FitError::ZeroVariance`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::linear::LinearFit;
use crate::engine::validator::Validator;
use crate::math::moments::Moments;
use crate::primitives::count;
use crate::primitives::errors::FitError;

/// Per-window means and standard deviations.
#[derive(Debug, Clone, PartialEq)]
pub struct SlidingMoments<T> {
    /// Window length.
    pub window: usize,

    /// Mean of the window starting at each index.
    pub means: Vec<T>,

    /// Standard deviation of the window starting at each index.
    pub sdevs: Vec<T>,
}

impl<T: Float> SlidingMoments<T> {
    /// Compute moments over each run of `window` consecutive samples.
    pub fn compute(data: &[T], window: usize) -> Result<Self, FitError> {
        Validator::validate_window(window, data.len())?;

        let (means, sdevs): (Vec<T>, Vec<T>) = data
            .windows(window)
            .map(|w| Moments::compute(w).map(|m| (m.mean, m.sdev)))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .unzip();

        Ok(Self {
            window,
            means,
            sdevs,
        })
    }

    /// Number of windows.
    #[inline]
    pub fn len(&self) -> usize {
        self.means.len()
    }

    /// Whether no window was produced.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    /// Straight-line fit of the window means against the window start index.
    pub fn trend(&self) -> Result<LinearFit<T>, FitError> {
        self.trend_after(0)
    }

    /// Like [`trend`](Self::trend), ignoring the first `discard` windows
    /// (warm-up).
    pub fn trend_after(&self, discard: usize) -> Result<LinearFit<T>, FitError> {
        let means = self.means.get(discard..).unwrap_or(&[]);
        let x: Vec<T> = (discard..discard + means.len()).map(count::<T>).collect();
        LinearFit::fit(&x, means)
    }
}
