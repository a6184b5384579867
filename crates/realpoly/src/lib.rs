//! # realpoly
//!
//! Dense univariate polynomials with `f64` coefficients.
//!
//! This crate provides:
//! - An immutable polynomial value type with canonical storage
//! - Addition, subtraction, negation, scalar and polynomial multiplication
//! - Approximate equality governed by a configurable comparison precision
//! - Term-by-term string rendering
//!
//! ## Comparison Precision
//!
//! Coefficients within the precision of zero are stripped from the top of
//! a polynomial, and coefficients within the precision of each other
//! compare equal. The default is `1.0e-10`; applications read an override
//! once at startup and pass it to constructors:
//!
//! ```
//! use realpoly::{DensePoly, Precision};
//!
//! let precision = Precision::from_env();
//! let p = DensePoly::with_precision(&[3.0, 0.0, 1.0], precision).unwrap();
//! let q = DensePoly::new(&[3.0]).unwrap();
//! assert_eq!((&p + &q).to_descending(), vec![3.0, 0.0, 4.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod dense;
pub mod error;
pub mod nullable;
pub mod precision;

#[cfg(test)]
mod proptests;

pub use dense::DensePoly;
pub use error::{PolyError, Result};
pub use precision::{Precision, DEFAULT_COMPARISON_PRECISION, PRECISION_ENV_VAR};
