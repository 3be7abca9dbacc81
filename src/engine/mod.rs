//! Layer 4: Engine
//!
//! # Purpose
//!
//! Shared input checks run at the entry of every fitting routine.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and configuration validation.
pub mod validator;
