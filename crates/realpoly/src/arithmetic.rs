//! Operator overloads for polynomials.
//!
//! Every operator forwards to the named method on [`DensePoly`], so `a + b`
//! and `a.add(&b)` always agree. Both owned and borrowed operands work.

use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::DensePoly;

impl Add for DensePoly {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        DensePoly::add(&self, &other)
    }
}

impl Add<&DensePoly> for DensePoly {
    type Output = Self;

    fn add(self, other: &Self) -> Self::Output {
        DensePoly::add(&self, other)
    }
}

impl Add for &DensePoly {
    type Output = DensePoly;

    fn add(self, other: Self) -> Self::Output {
        DensePoly::add(self, other)
    }
}

impl Sub for DensePoly {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        DensePoly::sub(&self, &other)
    }
}

impl Sub<&DensePoly> for DensePoly {
    type Output = Self;

    fn sub(self, other: &Self) -> Self::Output {
        DensePoly::sub(&self, other)
    }
}

impl Sub for &DensePoly {
    type Output = DensePoly;

    fn sub(self, other: Self) -> Self::Output {
        DensePoly::sub(self, other)
    }
}

impl Mul for DensePoly {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        DensePoly::mul(&self, &other)
    }
}

impl Mul<&DensePoly> for DensePoly {
    type Output = Self;

    fn mul(self, other: &Self) -> Self::Output {
        DensePoly::mul(&self, other)
    }
}

impl Mul for &DensePoly {
    type Output = DensePoly;

    fn mul(self, other: Self) -> Self::Output {
        DensePoly::mul(self, other)
    }
}

impl Mul<f64> for DensePoly {
    type Output = Self;

    fn mul(self, k: f64) -> Self::Output {
        self.scale(k)
    }
}

impl Mul<f64> for &DensePoly {
    type Output = DensePoly;

    fn mul(self, k: f64) -> Self::Output {
        self.scale(k)
    }
}

impl Mul<DensePoly> for f64 {
    type Output = DensePoly;

    fn mul(self, p: DensePoly) -> Self::Output {
        p.scale(self)
    }
}

impl Mul<&DensePoly> for f64 {
    type Output = DensePoly;

    fn mul(self, p: &DensePoly) -> Self::Output {
        p.scale(self)
    }
}

impl Neg for DensePoly {
    type Output = Self;

    fn neg(self) -> Self::Output {
        DensePoly::neg(&self)
    }
}

impl Neg for &DensePoly {
    type Output = DensePoly;

    fn neg(self) -> Self::Output {
        DensePoly::neg(self)
    }
}

impl Zero for DensePoly {
    fn zero() -> Self {
        DensePoly::zero()
    }

    fn is_zero(&self) -> bool {
        DensePoly::is_zero(self)
    }
}

impl One for DensePoly {
    fn one() -> Self {
        DensePoly::one()
    }
}
