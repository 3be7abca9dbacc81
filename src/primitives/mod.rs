//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the data structures shared by every numerical
//! routine in the crate. It has zero internal dependencies within the crate.
//!
//! # Module Organization
//!
//! - **errors**: Shared error types (FitError)
//! - **matrix**: Owned row-major matrix storage
//! - **mask**: Free/fixed view over a parameter vector
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine (validator)
//!   ↓
//! Layer 3: Algorithms (linear, lfit, sliding)
//!   ↓
//! Layer 2: Math (gaussj, moments, histogram, polynomial)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
///
/// Provides:
/// - Unified `FitError` enum
/// - `Singularity` reasons for solver failures
pub mod errors;

/// Dense matrix storage.
pub mod matrix;

/// Parameter masks.
///
/// Provides:
/// - Free-index list derived from a boolean mask
/// - Guard against masks with nothing to fit
pub mod mask;

use num_traits::Float;

/// Convert a count into the working float type.
#[inline]
pub(crate) fn count<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}
