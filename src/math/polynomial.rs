//! Polynomial interpolation, evaluation and the power basis.
//!
//! ## Purpose
//!
//! This module computes the coefficients of the unique degree-(n-1)
//! polynomial through n points, evaluates polynomials from their
//! coefficients, and supplies the power basis `[1, x, x², …]` that turns the
//! generalized linear fit into a polynomial least-squares fit.
//!
//! ## Design notes
//!
//! * **Interpolation**: Builds the master polynomial `Π (x - x_i)` in an
//!   auxiliary array, then adds each point's Lagrange term by synthetic
//!   division, avoiding an explicit Vandermonde solve.
//! * **Coefficient order**: `coef[k]` multiplies `x^k` everywhere.
//!
//! ## Non-goals
//!
//! * Conditioning. The interpolation is exact in theory but ill-conditioned
//!   for large n or closely spaced abscissae; results are returned as
//!   computed, not smoothed or regularized.

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

// ============================================================================
// Interpolation
// ============================================================================

/// Coefficients `c` of the polynomial with `y_j = Σ_k c_k · x_j^k` for every j.
pub fn interpolate<T: Float>(x: &[T], y: &[T]) -> Result<Vec<T>, FitError> {
    Validator::validate_pair(x, y, 1)?;
    for i in 1..x.len() {
        if x[..i].contains(&x[i]) {
            return Err(FitError::DuplicateAbscissa { index: i });
        }
    }

    let n = x.len();
    let mut s = vec![T::zero(); n];
    let mut cof = vec![T::zero(); n];

    // Master polynomial Π (x - x_i), leading coefficient implied
    s[n - 1] = -x[0];
    for i in 1..n {
        for j in (n - 1 - i)..(n - 1) {
            s[j] = s[j] - x[i] * s[j + 1];
        }
        s[n - 1] = s[n - 1] - x[i];
    }

    for j in 0..n {
        // Derivative of the master polynomial at x_j
        let mut phi: T = count(n);
        for k in (1..n).rev() {
            phi = count::<T>(k) * s[k] + x[j] * phi;
        }
        let ff = y[j] / phi;

        // Synthetic division by (x - x_j)
        let mut b = T::one();
        for k in (0..n).rev() {
            cof[k] = cof[k] + b * ff;
            b = s[k] + x[j] * b;
        }
    }

    Ok(cof)
}

// ============================================================================
// Evaluation
// ============================================================================

/// Value of `Σ coefs[k] · x^k`.
#[inline]
pub fn evaluate_polynomial<T: Float>(coefs: &[T], x: T) -> T {
    coefs.iter().rev().fold(T::zero(), |acc, &c| acc * x + c)
}

/// Power basis `[1, x, x², …]` with one term per parameter.
///
/// Matches the basis callback signature of the generalized linear fit, so a
/// polynomial fit is `lfit(.., power_basis)`.
pub fn power_basis<T: Float>(x: T, params: &[T]) -> Vec<T> {
    let mut terms = Vec::with_capacity(params.len());
    let mut term = T::one();
    for _ in 0..params.len() {
        terms.push(term);
        term = term * x;
    }
    terms
}
