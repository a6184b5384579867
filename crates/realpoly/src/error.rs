//! Error types for polynomial operations.

use thiserror::Error;

/// Result type alias using [`PolyError`].
pub type Result<T> = std::result::Result<T, PolyError>;

/// Errors that can occur when building or querying polynomials.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolyError {
    /// A required operand or coefficient sequence was absent or empty.
    #[error("invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Coefficient lookup outside `[0, degree]`.
    #[error("exponent {exponent} out of range for polynomial of degree {degree}")]
    IndexOutOfRange {
        /// The requested exponent
        exponent: i64,
        /// Degree of the polynomial
        degree: usize,
    },

    /// A comparison precision that is negative, NaN or infinite.
    #[error("invalid comparison precision {value}")]
    InvalidPrecision {
        /// The rejected tolerance
        value: f64,
    },
}

impl PolyError {
    pub(crate) fn absent(arg: &'static str) -> Self {
        Self::InvalidArgument {
            arg,
            reason: "value is absent",
        }
    }

    pub(crate) fn empty(arg: &'static str) -> Self {
        Self::InvalidArgument {
            arg,
            reason: "coefficient sequence is empty",
        }
    }
}
