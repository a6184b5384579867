//! Dense univariate polynomials over `f64`.
//!
//! Coefficients live in ascending degree order in a small inline buffer.
//! Every constructor canonicalizes: leading coefficients within the
//! comparison precision of zero are dropped, and a polynomial whose
//! coefficients are all negligible becomes the single coefficient `0`.

use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::{smallvec, SmallVec};

use crate::error::{PolyError, Result};
use crate::precision::Precision;

/// Inline coefficient storage; most polynomials here have degree < 8.
pub(crate) type Coeffs = SmallVec<[f64; 8]>;

/// A dense univariate polynomial with `f64` coefficients.
///
/// Values are immutable: arithmetic always produces a new polynomial.
/// Each polynomial carries the [`Precision`] it was built with; results of
/// binary operations use the looser of the two operands' precisions.
///
/// Equality is approximate. Two polynomials are equal when their degrees
/// match and every coefficient differs by at most the tolerance, so `==`
/// is not transitive and `DensePoly` does not implement `Eq`.
#[derive(Clone, Debug)]
pub struct DensePoly {
    /// Coefficients in ascending degree order.
    coeffs: Coeffs,
    precision: Precision,
}

impl DensePoly {
    /// Creates a polynomial from coefficients given highest degree first,
    /// using the default precision.
    ///
    /// `[3.0, 0.0, 1.0]` is `3x^2 + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidArgument`] if `coeffs` is empty.
    pub fn new(coeffs: &[f64]) -> Result<Self> {
        Self::with_precision(coeffs, Precision::DEFAULT)
    }

    /// Creates a polynomial from coefficients given highest degree first.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidArgument`] if `coeffs` is empty.
    pub fn with_precision(coeffs: &[f64], precision: Precision) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(PolyError::empty("coeffs"));
        }

        Ok(Self::from_ascending(
            coeffs.iter().rev().copied().collect(),
            precision,
        ))
    }

    /// Builds a canonical polynomial from ascending-order coefficients.
    pub(crate) fn from_ascending(mut coeffs: Coeffs, precision: Precision) -> Self {
        // Normalize: remove negligible leading terms
        while coeffs.len() > 1 && coeffs.last().map_or(false, |c| precision.is_negligible(*c)) {
            coeffs.pop();
        }

        if coeffs.is_empty() || (coeffs.len() == 1 && precision.is_negligible(coeffs[0])) {
            coeffs = smallvec![0.0];
        }

        // -0.0 == 0.0, so this rewrites negative zeros left by negation
        for c in &mut coeffs {
            if *c == 0.0 {
                *c = 0.0;
            }
        }

        Self { coeffs, precision }
    }

    /// Creates the zero polynomial.
    ///
    /// The identity constructors (`zero`, `one`, `constant`, `monomial`)
    /// compare exactly, so combining them with another polynomial keeps
    /// that polynomial's precision.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: smallvec![0.0],
            precision: Precision::EXACT,
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(1.0)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::from_ascending(smallvec![c], Precision::EXACT)
    }

    /// Creates the monomial c * x^n.
    ///
    /// # Panics
    ///
    /// Panics if `n == usize::MAX`.
    #[must_use]
    pub fn monomial(c: f64, n: usize) -> Self {
        assert!(n < usize::MAX, "monomial degree overflows usize");

        let mut coeffs: Coeffs = smallvec![0.0; n + 1];
        coeffs[n] = c;
        Self::from_ascending(coeffs, Precision::EXACT)
    }

    /// Returns the same polynomial re-canonicalized under another precision.
    #[must_use]
    pub fn with_tolerance(&self, precision: Precision) -> Self {
        Self::from_ascending(self.coeffs.clone(), precision)
    }

    /// Returns the degree of the polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the precision this polynomial compares with.
    #[must_use]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0] == 0.0
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> f64 {
        self.coeffs[self.degree()]
    }

    /// Returns the coefficient of x^i, or zero past the degree.
    #[must_use]
    pub fn coeff(&self, i: usize) -> f64 {
        self.coeffs.get(i).copied().unwrap_or(0.0)
    }

    /// Returns the coefficient of `x^exponent`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::IndexOutOfRange`] unless `exponent <= degree`.
    pub fn at(&self, exponent: usize) -> Result<f64> {
        self.coeffs
            .get(exponent)
            .copied()
            .ok_or(PolyError::IndexOutOfRange {
                exponent: i64::try_from(exponent).unwrap_or(i64::MAX),
                degree: self.degree(),
            })
    }

    /// Returns all coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Returns the coefficients highest degree first, the order
    /// [`DensePoly::new`] accepts.
    #[must_use]
    pub fn to_descending(&self) -> Vec<f64> {
        self.coeffs.iter().rev().copied().collect()
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Compares coefficient-wise under an explicit tolerance.
    ///
    /// Degrees must match exactly; every coefficient, including the
    /// constant term, must lie within `precision`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, precision: Precision) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        self.degree() == other.degree()
            && self
                .coeffs
                .iter()
                .zip(other.coeffs.iter())
                .all(|(a, b)| precision.approx_eq(*a, *b))
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let result = (0..len).map(|i| self.coeff(i) + other.coeff(i)).collect();

        Self::from_ascending(result, self.precision.looser(other.precision))
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::from_ascending(self.coeffs.iter().map(|c| -c).collect(), self.precision)
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials.
    ///
    /// Schoolbook convolution, O(deg(a) * deg(b)).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let precision = self.precision.looser(other.precision);
        if self.is_zero() || other.is_zero() {
            return Self::from_ascending(smallvec![0.0], precision);
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result: Coeffs = smallvec![0.0; n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] += a * b;
            }
        }

        Self::from_ascending(result, precision)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, k: f64) -> Self {
        if k == 0.0 {
            return Self::from_ascending(smallvec![0.0], self.precision);
        }
        Self::from_ascending(self.coeffs.iter().map(|c| c * k).collect(), self.precision)
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::from_ascending(smallvec![1.0], self.precision);
        }
        if n == 1 {
            return self.clone();
        }

        let mut result = Self::from_ascending(smallvec![1.0], self.precision);
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }

        result
    }
}

impl PartialEq for DensePoly {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, self.precision.looser(other.precision))
    }
}

// Only the degree is hashed: equal polynomials always share a degree,
// while their coefficients may differ within tolerance.
impl Hash for DensePoly {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.degree().hash(state);
    }
}

impl fmt::Display for DensePoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if i != self.degree() {
                write!(f, " + ")?;
            }
            write!(f, "{c}*x^{i}")?;
        }
        Ok(())
    }
}
