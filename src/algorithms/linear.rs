//! Ordinary least-squares straight-line fit.
//!
//! ## Purpose
//!
//! This module fits `y = a + b·x` to unweighted paired data in closed form
//! and reports parameter uncertainties estimated from the scatter of the
//! residuals.
//!
//! ## Design notes
//!
//! * **Centered sums**: The slope is computed from `t_i = x_i - mean(x)`,
//!   which keeps the normal equations well conditioned for large abscissae
//!   (message indices, timestamps).
//! * **Residual scale**: With no per-point sigma, the uncertainties are
//!   first computed for unit sigma and then multiplied by
//!   `sigdat = sqrt(chi2 / (n - 2))`.
//!
//! ## Invariants
//!
//! * At least two points; the abscissae must not all be equal.
//! * With exactly two points `sigdat` stays zero, so `siga` and `sigb` are
//!   zero as well and carry no information.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::count;
use crate::primitives::errors::FitError;

/// Straight line fitted by least squares, `y = a + b·x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Intercept.
    pub a: T,

    /// Slope.
    pub b: T,

    /// Standard error of the intercept (scaled by `sigdat`).
    pub siga: T,

    /// Standard error of the slope (scaled by `sigdat`).
    pub sigb: T,

    /// Sum of squared residuals.
    pub chi2: T,

    /// Per-point residual scale, `sqrt(chi2 / (n - 2))`; zero when `n == 2`.
    pub sigdat: T,
}

impl<T: Float> LinearFit<T> {
    /// Fit a line through `(x[i], y[i])`.
    pub fn fit(x: &[T], y: &[T]) -> Result<Self, FitError> {
        Validator::validate_pair(x, y, 2)?;

        let n = x.len();
        let ss: T = count(n);
        let (sx, sy) = x
            .iter()
            .zip(y)
            .fold((T::zero(), T::zero()), |(sx, sy), (&xi, &yi)| (sx + xi, sy + yi));
        let sxoss = sx / ss;

        let mut st2 = T::zero();
        let mut b = T::zero();
        for (&xi, &yi) in x.iter().zip(y) {
            let t = xi - sxoss;
            st2 = st2 + t * t;
            b = b + t * yi;
        }
        if st2 == T::zero() {
            return Err(FitError::ZeroVariance);
        }
        b = b / st2;
        let a = (sy - sx * b) / ss;

        let siga = ((T::one() + sx * sx / (ss * st2)) / ss).sqrt();
        let sigb = (T::one() / st2).sqrt();

        let chi2 = x.iter().zip(y).fold(T::zero(), |acc, (&xi, &yi)| {
            let r = yi - a - b * xi;
            acc + r * r
        });

        let sigdat = if n > 2 {
            (chi2 / count::<T>(n - 2)).sqrt()
        } else {
            log::warn!("linear fit on two points: no residual scale, uncertainties are zero");
            T::zero()
        };

        Ok(Self {
            a,
            b,
            siga: siga * sigdat,
            sigb: sigb * sigdat,
            chi2,
            sigdat,
        })
    }

    /// Value of the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.a + self.b * x
    }
}
