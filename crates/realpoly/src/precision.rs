//! Comparison precision.
//!
//! The tolerance governs two things: stripping near-zero leading
//! coefficients when a polynomial is built, and coefficient-wise
//! approximate equality. It is an ordinary value, read once by the
//! embedding application (usually through [`Precision::from_env`]) and
//! passed to [`DensePoly::with_precision`](crate::DensePoly::with_precision).

use std::fmt;
use std::str::FromStr;

use crate::error::{PolyError, Result};

/// Environment variable consulted by [`Precision::from_env`].
pub const PRECISION_ENV_VAR: &str = "COMPARISON_PRECISION";

/// Tolerance used when no configuration is supplied.
pub const DEFAULT_COMPARISON_PRECISION: f64 = 1.0e-10;

/// A non-negative, finite tolerance for coefficient comparison.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Precision(f64);

impl Precision {
    /// The default tolerance, `1.0e-10`.
    pub const DEFAULT: Self = Self(DEFAULT_COMPARISON_PRECISION);

    /// Exact comparison.
    pub const EXACT: Self = Self(0.0);

    /// Creates a precision, rejecting negative and non-finite values.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(PolyError::InvalidPrecision { value })
        }
    }

    /// Returns the tolerance as a float.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Parses a configuration string, falling back to the default.
    #[must_use]
    pub fn parse_or_default(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|err| Self::fallback(raw, &err))
    }

    fn fallback(raw: &str, err: &PolyError) -> Self {
        tracing::warn!(
            raw,
            %err,
            default = DEFAULT_COMPARISON_PRECISION,
            "unusable comparison precision, using default"
        );
        Self::DEFAULT
    }

    /// Reads the precision from [`PRECISION_ENV_VAR`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_var(PRECISION_ENV_VAR)
    }

    /// Reads the precision from the named environment variable.
    ///
    /// An unset variable silently yields the default; a malformed one
    /// yields the default with a warning.
    #[must_use]
    pub fn from_env_var(key: &str) -> Self {
        match std::env::var(key) {
            Ok(raw) => match raw.parse::<Self>() {
                Ok(precision) => {
                    tracing::debug!(key, %precision, "loaded comparison precision");
                    precision
                }
                Err(err) => Self::fallback(&raw, &err),
            },
            Err(_) => Self::DEFAULT,
        }
    }

    /// Returns the looser of two tolerances.
    #[must_use]
    pub fn looser(self, other: Self) -> Self {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }

    /// Returns true if `a` and `b` differ by no more than this tolerance.
    #[must_use]
    pub fn approx_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.0
    }

    /// Returns true if `c` is within tolerance of zero.
    #[must_use]
    pub fn is_negligible(self, c: f64) -> bool {
        c.abs() <= self.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:e}", self.0)
    }
}

impl FromStr for Precision {
    type Err = PolyError;

    fn from_str(raw: &str) -> Result<Self> {
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| PolyError::InvalidArgument {
                arg: "precision",
                reason: "not a floating-point number",
            })?;
        Self::new(value)
    }
}

impl TryFrom<f64> for Precision {
    type Error = PolyError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}
