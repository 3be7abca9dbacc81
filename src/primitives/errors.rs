//! Error types for the fitting engine.
//!
//! ## Purpose
//!
//! This module defines [`FitError`], the single error type returned by every
//! fallible operation in the crate, together with [`Singularity`], which
//! records why the Gauss-Jordan solver gave up on a matrix.
//!
//! ## Design notes
//!
//! * **No allocation**: Variants carry indices, lengths and static names only,
//!   so the type works unchanged under `no_std`.
//! * **Classification**: Numerical failures are a property of the input. The
//!   `is_*` predicates group variants into the four failure families callers
//!   branch on (degenerate input, singular system, nothing to fit, length
//!   mismatch) without matching every variant.
//!
//! ## Non-goals
//!
//! * This module does not retry or repair inputs.

use core::fmt;

// ============================================================================
// Singularity
// ============================================================================

/// Reason a matrix was rejected as singular during Gauss-Jordan elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Singularity {
    /// The same column was selected as pivot in two elimination rounds.
    RepeatedPivot {
        /// Column selected twice.
        column: usize,
    },

    /// The selected pivot entry was exactly zero.
    ZeroPivot {
        /// Column of the zero pivot.
        column: usize,
    },

    /// No candidate pivot could be compared (every remaining entry was NaN).
    NoPivot,
}

impl fmt::Display for Singularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Singularity::RepeatedPivot { column } => {
                write!(f, "column {} selected as pivot twice", column)
            }
            Singularity::ZeroPivot { column } => write!(f, "zero pivot in column {}", column),
            Singularity::NoPivot => write!(f, "no comparable pivot candidate"),
        }
    }
}

// ============================================================================
// FitError
// ============================================================================

/// Errors returned by the statistical fitting engine.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    /// Input sequence is empty.
    EmptyInput,

    /// Fewer samples than the operation needs.
    TooFewPoints {
        /// Number of samples supplied.
        got: usize,
        /// Minimum number required.
        min: usize,
    },

    /// Variance (or spread of the abscissae) is exactly zero.
    ZeroVariance,

    /// All samples share one value, so no bin width can be derived.
    ZeroRange,

    /// The data range is not representable as a finite, non-zero bin width
    /// (the range overflows, or underflows after division by the column
    /// count).
    InvalidBinWidth {
        /// Bin width that was computed.
        width: f64,
        /// Requested column count.
        ncol: usize,
    },

    /// Paired x and y sequences differ in length.
    MismatchedInputs {
        /// Length of x.
        x_len: usize,
        /// Length of y.
        y_len: usize,
    },

    /// A companion sequence has the wrong length.
    MismatchedLength {
        /// What was measured (e.g. `"sigma"`, `"mask"`, `"basis"`).
        name: &'static str,
        /// Length required.
        expected: usize,
        /// Length supplied.
        got: usize,
    },

    /// A value is NaN or infinite.
    NonFinite {
        /// Sequence that holds the value.
        name: &'static str,
        /// Position of the value.
        index: usize,
    },

    /// A measurement uncertainty is not finite and strictly positive.
    InvalidSigma {
        /// Position of the offending sigma.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Histogram column count must be at least one.
    InvalidColumns(usize),

    /// Sliding window must hold at least two samples and fit in the data.
    InvalidWindow {
        /// Requested window length.
        window: usize,
        /// Number of samples available.
        len: usize,
    },

    /// The same abscissa appears twice in an interpolation table.
    DuplicateAbscissa {
        /// Position of the second occurrence.
        index: usize,
    },

    /// A matrix that must be square is not.
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// The normal-equations matrix could not be inverted.
    SingularMatrix(Singularity),

    /// The parameter mask leaves nothing to estimate.
    NoFreeParameters,

    /// A parameter index is outside the parameter vector.
    ParameterIndex {
        /// Offending index.
        index: usize,
        /// Number of parameters.
        len: usize,
    },

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },

    /// A required builder parameter was never configured.
    MissingParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl FitError {
    /// Input too short, constant, or otherwise without the spread the
    /// statistic needs.
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            FitError::EmptyInput
                | FitError::TooFewPoints { .. }
                | FitError::ZeroVariance
                | FitError::ZeroRange
                | FitError::InvalidBinWidth { .. }
                | FitError::InvalidWindow { .. }
                | FitError::DuplicateAbscissa { .. }
        )
    }

    /// Linear system could not be solved.
    pub fn is_singular(&self) -> bool {
        matches!(self, FitError::SingularMatrix(_))
    }

    /// Paired or companion sequences disagree in length.
    pub fn is_length_mismatch(&self) -> bool {
        matches!(
            self,
            FitError::MismatchedInputs { .. } | FitError::MismatchedLength { .. }
        )
    }
}

impl From<Singularity> for FitError {
    fn from(reason: Singularity) -> Self {
        FitError::SingularMatrix(reason)
    }
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::EmptyInput => write!(f, "Input arrays are empty"),
            FitError::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            FitError::ZeroVariance => write!(f, "Degenerate input: variance is zero"),
            FitError::ZeroRange => write!(f, "Degenerate input: max equals min"),
            FitError::InvalidBinWidth { width, ncol } => write!(
                f,
                "Invalid bin width: {} for {} columns (data range overflows or underflows)",
                width, ncol
            ),
            FitError::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            FitError::MismatchedLength {
                name,
                expected,
                got,
            } => write!(
                f,
                "Length mismatch: {} has {} entries, expected {}",
                name, got, expected
            ),
            FitError::NonFinite { name, index } => {
                write!(f, "Invalid numeric value: {}[{}] is not finite", name, index)
            }
            FitError::InvalidSigma { index, value } => write!(
                f,
                "Invalid sigma: sigma[{}]={} (must be > 0 and finite)",
                index, value
            ),
            FitError::InvalidColumns(ncol) => {
                write!(f, "Invalid column count: {} (must be at least 1)", ncol)
            }
            FitError::InvalidWindow { window, len } => write!(
                f,
                "Invalid window: {} (must be in [2, {}])",
                window, len
            ),
            FitError::DuplicateAbscissa { index } => {
                write!(f, "Duplicate abscissa at x[{}]", index)
            }
            FitError::NotSquare { rows, cols } => {
                write!(f, "Matrix is not square: {}x{}", rows, cols)
            }
            FitError::SingularMatrix(reason) => write!(f, "Singular matrix: {}", reason),
            FitError::NoFreeParameters => write!(f, "No parameters to be fitted"),
            FitError::ParameterIndex { index, len } => write!(
                f,
                "Parameter index {} out of range for {} parameters",
                index, len
            ),
            FitError::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                    parameter
                )
            }
            FitError::MissingParameter { parameter } => {
                write!(f, "Parameter '{}' is required", parameter)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FitError {}
