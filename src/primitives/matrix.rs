//! Dense row-major matrix storage.
//!
//! ## Purpose
//!
//! This module provides [`Matrix`], the owned storage used by the Gauss-Jordan
//! solver and the generalized linear fit for normal equations, right-hand
//! sides, inverses and covariance matrices.
//!
//! ## Design notes
//!
//! * **Row-major**: Entry `(r, c)` lives at `data[r * cols + c]`.
//! * **Owned**: Solvers clone their inputs and return new matrices; callers
//!   never see their arguments mutated.
//!
//! ## Non-goals
//!
//! * This is not a general linear algebra type: only the operations the
//!   engine needs (swaps, products for verification) are provided.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Index, IndexMut};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FitError;

/// Dense matrix with owned row-major storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Float> Matrix<T> {
    /// Matrix of the given shape filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Square identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Build a matrix from a list of rows. All rows must have equal length.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, FitError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(FitError::MismatchedLength {
                    name: "row",
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Single-column matrix holding `values`.
    pub fn column(values: &[T]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    /// Matrix product `self * other`.
    pub fn product(&self, other: &Matrix<T>) -> Result<Matrix<T>, FitError> {
        if self.cols != other.rows {
            return Err(FitError::MismatchedLength {
                name: "rows",
                expected: self.cols,
                got: other.rows,
            });
        }
        let mut out = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let aik = self[(i, k)];
                for j in 0..other.cols {
                    out[(i, j)] = out[(i, j)] + aik * other[(k, j)];
                }
            }
        }
        Ok(out)
    }

    /// Mirror the lower triangle into the upper one.
    pub fn symmetrize_from_lower(&mut self) {
        for j in 1..self.rows.min(self.cols) {
            for k in 0..j {
                self[(k, j)] = self[(j, k)];
            }
        }
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `true` when rows == cols.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Borrow row `r`.
    #[inline]
    pub fn row(&self, r: usize) -> &[T] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Row-major backing slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Swap rows `a` and `b`.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for c in 0..self.cols {
            self.data.swap(a * self.cols + c, b * self.cols + c);
        }
    }

    /// Swap columns `a` and `b`.
    pub fn swap_cols(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for r in 0..self.rows {
            self.data.swap(r * self.cols + a, r * self.cols + b);
        }
    }
}

impl<T: Clone> Matrix<T> {
    /// Copy out the rows as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        &self.data[r * self.cols + c]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        &mut self.data[r * self.cols + c]
    }
}
