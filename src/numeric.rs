//! Scalar abstraction for precision-generic rule generation
//!
//! Everything in this crate is parameterised over a floating-point type.
//! The [`Precision`] trait collects the handful of primitives the
//! algorithms actually need; it is implemented for `f32`, `f64` and the
//! double-double [`TwoFloat`] type. The epsilon reported by each
//! implementation drives the deflation threshold of the eigensolver, so
//! it must reflect the true working precision of the type.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use twofloat::TwoFloat;

/// Floating-point operations required by the quadrature algorithms.
///
/// A single rule-generation call uses one consistent implementation
/// throughout; no component mixes precisions.
pub trait Precision:
    Copy
    + Debug
    + Display
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Convert from f64 (exact for every supported type).
    fn from_f64(x: f64) -> Self;

    /// Convert a small integer; exact for the magnitudes that arise here.
    fn from_usize(k: usize) -> Self;

    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Machine epsilon of the working precision.
    fn epsilon() -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// `sqrt(self^2 + other^2)` without intermediate overflow.
    fn hypot(self, other: Self) -> Self;

    /// Magnitude of `self` with the sign of `sign`.
    fn copysign(self, sign: Self) -> Self;

    /// Default QL iteration budget per eigenvalue for this precision.
    ///
    /// Native floats deflate comfortably within 30 sweeps; the
    /// double-double type gets a little more headroom.
    fn max_iterations() -> usize {
        30
    }
}

impl Precision for f64 {
    fn from_f64(x: f64) -> Self {
        x
    }

    fn from_usize(k: usize) -> Self {
        k as f64
    }

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn epsilon() -> Self {
        f64::EPSILON
    }

    fn abs(self) -> Self {
        self.abs()
    }

    fn sqrt(self) -> Self {
        self.sqrt()
    }

    fn hypot(self, other: Self) -> Self {
        self.hypot(other)
    }

    fn copysign(self, sign: Self) -> Self {
        self.copysign(sign)
    }
}

impl Precision for f32 {
    fn from_f64(x: f64) -> Self {
        x as f32
    }

    fn from_usize(k: usize) -> Self {
        k as f32
    }

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn epsilon() -> Self {
        f32::EPSILON
    }

    fn abs(self) -> Self {
        self.abs()
    }

    fn sqrt(self) -> Self {
        self.sqrt()
    }

    fn hypot(self, other: Self) -> Self {
        self.hypot(other)
    }

    fn copysign(self, sign: Self) -> Self {
        self.copysign(sign)
    }
}

impl Precision for TwoFloat {
    fn from_f64(x: f64) -> Self {
        TwoFloat::from(x)
    }

    fn from_usize(k: usize) -> Self {
        TwoFloat::from(k as f64)
    }

    fn zero() -> Self {
        TwoFloat::from(0.0)
    }

    fn one() -> Self {
        TwoFloat::from(1.0)
    }

    fn epsilon() -> Self {
        // 2^-104, the unit roundoff of double-double arithmetic
        TwoFloat::from(f64::EPSILON * f64::EPSILON)
    }

    fn abs(self) -> Self {
        self.abs()
    }

    fn sqrt(self) -> Self {
        self.sqrt()
    }

    fn hypot(self, other: Self) -> Self {
        self.hypot(other)
    }

    fn copysign(self, sign: Self) -> Self {
        if sign.is_sign_negative() {
            -self.abs()
        } else {
            self.abs()
        }
    }

    fn max_iterations() -> usize {
        40
    }
}
