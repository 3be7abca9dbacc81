//! # latfit
//!
//! Statistical fitting engine for benchmark latency data.
//!
//! Numerical core for analysing message-broker latency logs: distribution
//! moments, straight-line least squares, chi-square linear fits over
//! arbitrary basis functions (with parameters held fixed), exact polynomial
//! interpolation and area-normalized histograms.
//!
//! The engine consumes plain numeric slices and returns numeric results or a
//! [`FitError`](prelude::FitError). It knows nothing about files, plots or
//! benchmark configurations; parsing and rendering live in the host tool.
//!
//! ## Quick Start
//!
//! ### Moments and histogram
//!
//! ```rust
//! use latfit::prelude::*;
//!
//! let latencies_ms: Vec<f64> = vec![1.2, 1.4, 1.1, 1.9, 1.3, 1.5, 1.2, 2.4];
//!
//! let m = Moments::compute(&latencies_ms)?;
//! println!("mean={:.3} sdev={:.3} skew={:.3}", m.mean, m.sdev, m.skew);
//!
//! let histo = Histogram::build(&latencies_ms, 4)?;
//! assert_eq!(histo.len(), 5);
//! assert!((histo.area() - 1.0).abs() < 1e-12);
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ### Straight line
//!
//! ```rust
//! use latfit::prelude::*;
//!
//! let x: Vec<f64> = vec![0.0, 1.0, 2.0, 3.0];
//! let y: Vec<f64> = vec![1.0, 3.0, 5.0, 7.0];
//!
//! let line = LinearFit::fit(&x, &y)?;
//! assert!((line.a - 1.0).abs() < 1e-12);
//! assert!((line.b - 2.0).abs() < 1e-12);
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ### Chi-square fit with a fixed parameter
//!
//! ```rust
//! use latfit::prelude::*;
//!
//! let x: Vec<f64> = (0..10).map(f64::from).collect();
//! let y: Vec<f64> = x.iter().map(|&v| 4.0 + 2.0 * v + 0.5 * v * v).collect();
//!
//! // Quadratic, intercept held at 4.0
//! let model = Lfit::new()
//!     .parameters(vec![4.0, 0.0, 0.0])
//!     .fix(0)
//!     .build()?;
//!
//! let fit = model.fit_polynomial(&x, &y)?;
//! assert!((fit.params[1] - 2.0).abs() < 1e-9);
//! assert!((fit.params[2] - 0.5).abs() < 1e-9);
//! assert_eq!(fit.covariance[(0, 0)], 0.0);
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns `Result<_, FitError>`. Failures fall into
//! four families, which can be told apart without matching every variant:
//!
//! - degenerate input ([`is_degenerate`](prelude::FitError::is_degenerate)):
//!   too few points, zero variance, constant data;
//! - singular normal equations ([`is_singular`](prelude::FitError::is_singular));
//! - a mask with no free parameter (`FitError::NoFreeParameters`);
//! - length mismatches ([`is_length_mismatch`](prelude::FitError::is_length_mismatch)).
//!
//! Numerical failure is a property of the input; nothing is retried
//! internally.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade: a warning when a line is
//! fitted through exactly two points or when histogram samples are clamped,
//! and debug records for fit summaries and singular systems. The crate never
//! installs a logger.
//!
//! ## Concurrency
//!
//! All operations are pure functions over their inputs and allocate only
//! call-local state. Built models are immutable and `Send + Sync`, so a host
//! can fit one configuration per thread without coordination.
//!
//! ## Known limitations
//!
//! - Polynomial interpolation is ill-conditioned for many points or closely
//!   spaced abscissae.
//! - Straight-line uncertainties are zero when exactly two points are given.
//!
//! ## Minimal Usage (no_std)
//!
//! ```toml
//! [dependencies]
//! latfit = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the shared error type, owned matrix storage and parameter masks.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the Gauss-Jordan solver, moments, histogram binning and
// polynomial interpolation.
mod math;

// Layer 3: Algorithms - fitting algorithms.
//
// Contains straight-line least squares, the chi-square linear fit and
// sliding-window moments.
mod algorithms;

// Layer 4: Engine - input validation shared by every entry point.
mod engine;

// High-level fluent API for chi-square linear fits.
//
// Provides the `LinearModelBuilder` and re-exports the public surface.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use latfit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        FitError, GaussJordan, Histogram, LinearFit, LinearModel, LinearModelBuilder as Lfit,
        LinearModelFit, Matrix, Moments, ParameterMask, Singularity, SlidingMoments,
        evaluate_polynomial, expand_covariance, gaussian, integer_mean, interpolate, lfit,
        min_max, power_basis,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal fitting algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal validation engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
