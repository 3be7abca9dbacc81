//! Gauss-Jordan elimination with full pivoting.
//!
//! ## Purpose
//!
//! This module solves `A · X = B` for a square `A` and any number of
//! right-hand-side columns in `B`, producing the inverse of `A` as a
//! by-product. It is the solver behind the generalized linear fit, whose
//! covariance matrix is exactly that inverse.
//!
//! ## Design notes
//!
//! * **Full pivoting**: Every round picks the largest-magnitude entry among
//!   rows and columns not yet used as pivots.
//! * **Pivot history**: Row and column of each pivot are recorded so the
//!   column permutation can be undone (in reverse order) once elimination
//!   finishes.
//! * **Owned results**: Inputs are cloned; the caller's matrices are left
//!   untouched.
//!
//! ## Invariants
//!
//! * On success `inverse · A = I` and `A · solution = B` up to round-off.
//! * A zero pivot or a pivot column chosen twice aborts with
//!   [`FitError::SingularMatrix`].
//!
//! ## Non-goals
//!
//! * No rank-revealing fallback (SVD, pseudo-inverse): singular input is an
//!   error, not something to regularize.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::{FitError, Singularity};
use crate::primitives::matrix::Matrix;

// ============================================================================
// Solver
// ============================================================================

/// Inverse and solution vectors produced by Gauss-Jordan elimination.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussJordan<T> {
    /// Inverse of the coefficient matrix.
    pub inverse: Matrix<T>,

    /// Solution columns, one per right-hand side.
    pub solution: Matrix<T>,
}

impl<T: Float> GaussJordan<T> {
    /// Solve `a · X = b`, returning `a⁻¹` and `X`.
    ///
    /// `a` must be square and `b` must have as many rows as `a`. `b` may have
    /// zero columns, in which case only the inverse is computed.
    pub fn solve(a: &Matrix<T>, b: &Matrix<T>) -> Result<Self, FitError> {
        if !a.is_square() {
            return Err(FitError::NotSquare {
                rows: a.rows(),
                cols: a.cols(),
            });
        }
        if b.rows() != a.rows() {
            return Err(FitError::MismatchedLength {
                name: "rhs",
                expected: a.rows(),
                got: b.rows(),
            });
        }

        let mut inverse = a.clone();
        let mut solution = b.clone();
        if let Err(reason) = eliminate(&mut inverse, &mut solution) {
            log::debug!("gauss-jordan: {}x{} system is singular: {}", a.rows(), a.cols(), reason);
            return Err(reason.into());
        }

        Ok(Self { inverse, solution })
    }

    /// Invert a square matrix.
    pub fn invert(a: &Matrix<T>) -> Result<Matrix<T>, FitError> {
        Self::solve(a, &Matrix::zeros(a.rows(), 0)).map(|gj| gj.inverse)
    }
}

/// In-place elimination: `a` becomes its inverse, `b` the solution columns.
fn eliminate<T: Float>(a: &mut Matrix<T>, b: &mut Matrix<T>) -> Result<(), Singularity> {
    let n = a.rows();
    let m = b.cols();

    let mut indxr: Vec<usize> = vec![0; n];
    let mut indxc: Vec<usize> = vec![0; n];
    let mut ipiv: Vec<u32> = vec![0; n];

    for i in 0..n {
        // Step 1: Search the unused rows/columns for the largest pivot
        let mut big = T::zero();
        let mut pivot = None;
        for j in 0..n {
            if ipiv[j] == 1 {
                continue;
            }
            for k in 0..n {
                match ipiv[k] {
                    0 => {
                        let v = a[(j, k)].abs();
                        if v >= big {
                            big = v;
                            pivot = Some((j, k));
                        }
                    }
                    1 => {}
                    _ => return Err(Singularity::RepeatedPivot { column: k }),
                }
            }
        }
        let (irow, icol) = pivot.ok_or(Singularity::NoPivot)?;
        ipiv[icol] += 1;

        // Step 2: Move the pivot onto the diagonal
        if irow != icol {
            a.swap_rows(irow, icol);
            b.swap_rows(irow, icol);
        }
        indxr[i] = irow;
        indxc[i] = icol;

        // Step 3: Normalize the pivot row
        if a[(icol, icol)] == T::zero() {
            return Err(Singularity::ZeroPivot { column: icol });
        }
        let pivinv = T::one() / a[(icol, icol)];
        a[(icol, icol)] = T::one();
        for l in 0..n {
            a[(icol, l)] = a[(icol, l)] * pivinv;
        }
        for l in 0..m {
            b[(icol, l)] = b[(icol, l)] * pivinv;
        }

        // Step 4: Eliminate the pivot column from every other row
        for ll in 0..n {
            if ll == icol {
                continue;
            }
            let dum = a[(ll, icol)];
            a[(ll, icol)] = T::zero();
            for l in 0..n {
                a[(ll, l)] = a[(ll, l)] - a[(icol, l)] * dum;
            }
            for l in 0..m {
                b[(ll, l)] = b[(ll, l)] - b[(icol, l)] * dum;
            }
        }
    }

    // Undo the column interchanges in reverse order
    for l in (0..n).rev() {
        if indxr[l] != indxc[l] {
            a.swap_cols(indxr[l], indxc[l]);
        }
    }

    Ok(())
}
