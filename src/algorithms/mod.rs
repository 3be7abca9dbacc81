//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the fitting algorithms built on the math layer:
//! - Closed-form straight-line least squares
//! - Chi-square linear fits over arbitrary basis functions
//! - Sliding-window moments and drift trend
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Ordinary least-squares line fit.
pub mod linear;

/// Chi-square fit with fixed/free parameter masks.
pub mod lfit;

/// Moments over sliding windows.
pub mod sliding;
