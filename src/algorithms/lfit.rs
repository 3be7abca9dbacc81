//! Chi-square linear least squares over arbitrary basis functions.
//!
//! ## Purpose
//!
//! This module fits models that are linear in their parameters,
//! `y = Σ a_i · basis_i(x)`, to data with individual measurement
//! uncertainties, optionally holding a subset of the parameters fixed.
//!
//! ## Design notes
//!
//! * **Normal equations**: For every point the free-parameter basis values
//!   are accumulated into `α = Σ f fᵀ / σ²` and `β = Σ f · y' / σ²`, where
//!   `y'` is `y` minus the contribution of the fixed parameters. Only the
//!   lower triangle is accumulated, then mirrored.
//! * **Solver**: `α` is handed to Gauss-Jordan elimination; its inverse is
//!   the covariance matrix of the free parameters.
//! * **Free-index map**: The [`ParameterMask`] supplies the list of free
//!   positions. Both assembly and covariance expansion walk that list, so
//!   interleaved free/fixed parameters land in the right rows and columns.
//!
//! ## Key concepts
//!
//! * **Basis callback**: `Fn(x, params) -> Vec<T>` returning one value per
//!   parameter. It receives the current parameter vector (the initial one
//!   during assembly, the fitted one during the chi-square pass).
//!
//! ## Invariants
//!
//! * The covariance is `ma × ma`; rows and columns of fixed parameters are
//!   zero.
//! * Fixed parameters come back exactly as supplied.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::gaussj::GaussJordan;
use crate::primitives::errors::FitError;
use crate::primitives::mask::ParameterMask;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Result
// ============================================================================

/// Outcome of a chi-square linear fit.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModelFit<T> {
    /// Parameter vector: fitted values at free positions, supplied values at
    /// fixed ones.
    pub params: Vec<T>,

    /// Full `ma × ma` covariance matrix.
    pub covariance: Matrix<T>,

    /// Chi-square of the fitted model.
    pub chi2: T,
}

impl<T: Float> LinearModelFit<T> {
    /// Standard error of each parameter (square root of the covariance
    /// diagonal); zero for fixed parameters.
    pub fn standard_errors(&self) -> Vec<T> {
        (0..self.params.len())
            .map(|i| self.covariance[(i, i)].max(T::zero()).sqrt())
            .collect()
    }

    /// Evaluate the fitted model at `x` with the basis used for the fit.
    pub fn predict<F>(&self, x: T, basis: F) -> Result<T, FitError>
    where
        F: Fn(T, &[T]) -> Vec<T>,
    {
        let afunc = evaluate_basis(&basis, x, &self.params)?;
        Ok(dot(&self.params, &afunc))
    }
}

// ============================================================================
// Fit
// ============================================================================

/// Fit `y = Σ a_i · basis_i(x)` by chi-square minimization.
///
/// `initial` supplies the starting parameter vector; entries whose `mask`
/// flag is `false` are held at these values. `sigma` holds the measurement
/// uncertainty of each point.
pub fn lfit<T, F>(
    x: &[T],
    y: &[T],
    sigma: &[T],
    initial: &[T],
    mask: &ParameterMask,
    basis: F,
) -> Result<LinearModelFit<T>, FitError>
where
    T: Float,
    F: Fn(T, &[T]) -> Vec<T>,
{
    Validator::validate_pair(x, y, 1)?;
    Validator::validate_length("sigma", x.len(), sigma.len())?;
    Validator::validate_sigma(sigma)?;
    Validator::validate_length("mask", initial.len(), mask.len())?;
    Validator::validate_finite(initial, "parameters")?;

    let ma = initial.len();
    let free = mask.free_indices();
    let fixed: Vec<usize> = mask.fixed_indices().collect();
    let mfit = free.len();

    let mut params = initial.to_vec();
    let mut alpha = Matrix::zeros(mfit, mfit);
    let mut beta = Matrix::zeros(mfit, 1);

    // Step 1: Accumulate the normal equations
    for ((&xi, &yi), &si) in x.iter().zip(y).zip(sigma) {
        let afunc = evaluate_basis(&basis, xi, &params)?;
        let ym = fixed
            .iter()
            .fold(yi, |acc, &l| acc - params[l] * afunc[l]);
        let sig2i = T::one() / (si * si);
        for (j, &l) in free.iter().enumerate() {
            let wt = afunc[l] * sig2i;
            for (k, &m) in free[..=j].iter().enumerate() {
                alpha[(j, k)] = alpha[(j, k)] + wt * afunc[m];
            }
            beta[(j, 0)] = beta[(j, 0)] + ym * wt;
        }
    }
    alpha.symmetrize_from_lower();

    // Step 2: Solve and scatter the solution into the free positions
    let solved = GaussJordan::solve(&alpha, &beta)?;
    for (j, &l) in free.iter().enumerate() {
        params[l] = solved.solution[(j, 0)];
    }

    // Step 3: Chi-square of the fitted model
    let mut chi2 = T::zero();
    for ((&xi, &yi), &si) in x.iter().zip(y).zip(sigma) {
        let afunc = evaluate_basis(&basis, xi, &params)?;
        let r = (yi - dot(&params, &afunc)) / si;
        chi2 = chi2 + r * r;
    }

    log::debug!(
        "lfit: {} points, {}/{} free parameters, chi2={:?}",
        x.len(),
        mfit,
        ma,
        chi2.to_f64()
    );

    Ok(LinearModelFit {
        params,
        covariance: expand_covariance(&solved.inverse, mask),
        chi2,
    })
}

/// Spread the `mfit × mfit` covariance of the free parameters over the full
/// `ma × ma` matrix, leaving rows and columns of fixed parameters at zero.
pub fn expand_covariance<T: Float>(reduced: &Matrix<T>, mask: &ParameterMask) -> Matrix<T> {
    let mut full = Matrix::zeros(mask.len(), mask.len());
    let free = mask.free_indices();
    for (j, &p) in free.iter().enumerate() {
        for (k, &q) in free.iter().enumerate() {
            full[(p, q)] = reduced[(j, k)];
        }
    }
    full
}

// ============================================================================
// Helpers
// ============================================================================

fn evaluate_basis<T, F>(basis: &F, x: T, params: &[T]) -> Result<Vec<T>, FitError>
where
    T: Float,
    F: Fn(T, &[T]) -> Vec<T>,
{
    let afunc = basis(x, params);
    Validator::validate_length("basis", params.len(), afunc.len())?;
    Ok(afunc)
}

#[inline]
fn dot<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter().zip(b).fold(T::zero(), |acc, (&p, &q)| acc + p * q)
}
