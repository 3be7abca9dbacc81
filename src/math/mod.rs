//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numerical routines of the engine:
//! - Gauss-Jordan elimination with full pivoting
//! - Distribution moments and the normal density
//! - Area-normalized histograms
//! - Polynomial interpolation and evaluation
//!
//! These are reusable mathematical building blocks with no fitting-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Gauss-Jordan linear system solver.
pub mod gaussj;

/// Mean, deviation, skewness and kurtosis.
pub mod moments;

/// Normalized histogram binning.
pub mod histogram;

/// Polynomial interpolation, evaluation and power basis.
pub mod polynomial;
