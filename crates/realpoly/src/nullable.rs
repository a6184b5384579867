//! Polynomial operations over optional operands.
//!
//! The typed API cannot receive a missing polynomial. Callers that bridge
//! optional data (deserialized records, FFI handles) use these functions
//! instead: an absent operand is reported as
//! [`PolyError::InvalidArgument`] rather than being unrepresentable.

use crate::error::{PolyError, Result};
use crate::{DensePoly, Precision};

/// Builds a polynomial from an optional, highest-degree-first sequence.
///
/// # Errors
///
/// [`PolyError::InvalidArgument`] if `coeffs` is absent or empty.
pub fn construct(coeffs: Option<&[f64]>, precision: Precision) -> Result<DensePoly> {
    let coeffs = coeffs.ok_or_else(|| PolyError::absent("coeffs"))?;
    DensePoly::with_precision(coeffs, precision)
}

/// Two absent values are equal; one absent value equals nothing.
#[must_use]
pub fn equals(a: Option<&DensePoly>, b: Option<&DensePoly>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Coefficient of `x^exponent`.
///
/// # Errors
///
/// [`PolyError::InvalidArgument`] if `a` is absent,
/// [`PolyError::IndexOutOfRange`] if `exponent` is negative or above the degree.
pub fn at(a: Option<&DensePoly>, exponent: i64) -> Result<f64> {
    let a = a.ok_or_else(|| PolyError::absent("polynomial"))?;
    let index = usize::try_from(exponent).map_err(|_| PolyError::IndexOutOfRange {
        exponent,
        degree: a.degree(),
    })?;
    a.at(index)
}

/// Sum of two polynomials.
///
/// # Errors
///
/// [`PolyError::InvalidArgument`] if either operand is absent.
pub fn add(a: Option<&DensePoly>, b: Option<&DensePoly>) -> Result<DensePoly> {
    let (a, b) = both(a, b)?;
    Ok(a.add(b))
}

/// Difference of two polynomials.
///
/// # Errors
///
/// [`PolyError::InvalidArgument`] if either operand is absent.
pub fn subtract(a: Option<&DensePoly>, b: Option<&DensePoly>) -> Result<DensePoly> {
    let (a, b) = both(a, b)?;
    Ok(a.sub(b))
}

/// Additive inverse.
///
/// # Errors
///
/// [`PolyError::InvalidArgument`] if `a` is absent.
pub fn negate(a: Option<&DensePoly>) -> Result<DensePoly> {
    Ok(a.ok_or_else(|| PolyError::absent("polynomial"))?.neg())
}

/// Scalar multiple.
///
/// # Errors
///
/// [`PolyError::InvalidArgument`] if `a` is absent.
pub fn scale(a: Option<&DensePoly>, k: f64) -> Result<DensePoly> {
    Ok(a.ok_or_else(|| PolyError::absent("polynomial"))?.scale(k))
}

/// Product of two polynomials.
///
/// # Errors
///
/// [`PolyError::InvalidArgument`] if either operand is absent.
pub fn multiply(a: Option<&DensePoly>, b: Option<&DensePoly>) -> Result<DensePoly> {
    let (a, b) = both(a, b)?;
    Ok(a.mul(b))
}

/// Term-by-term rendering, as [`std::fmt::Display`] produces it.
///
/// # Errors
///
/// [`PolyError::InvalidArgument`] if `a` is absent.
pub fn render(a: Option<&DensePoly>) -> Result<String> {
    Ok(a.ok_or_else(|| PolyError::absent("polynomial"))?.to_string())
}

fn both<'a>(
    a: Option<&'a DensePoly>,
    b: Option<&'a DensePoly>,
) -> Result<(&'a DensePoly, &'a DensePoly)> {
    let a = a.ok_or_else(|| PolyError::absent("lhs"))?;
    let b = b.ok_or_else(|| PolyError::absent("rhs"))?;
    Ok((a, b))
}
