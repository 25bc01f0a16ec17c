//! Numeric element types.
//!
//! ```text
//! Scalar
//!   └── Float  (f32, f64)
//! ```
//!
//! [`Vector`](crate::Vector), [`Matrix`](crate::Matrix) and every algorithm in
//! [`linalg`](crate::linalg) are generic over [`Float`].

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// ---------------------------------------------------------------------------
// Scalar: arithmetic closure plus the two identities
// ---------------------------------------------------------------------------

/// Base trait for every element type storable in a vector or matrix.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Sum
    + Default
    + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;
}

// ---------------------------------------------------------------------------
// Float
// ---------------------------------------------------------------------------

/// Trait for floating-point element types (`f32`, `f64`).
pub trait Float: Scalar + Neg<Output = Self> {
    /// Mathematical constant pi.
    fn pi() -> Self;

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn acos(self) -> Self;
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;

    /// Convert from an `f64` literal (used for tolerances and constants).
    fn from_f64(v: f64) -> Self;

    /// Widen to `f64`, used to carry offending values inside errors.
    fn to_f64(self) -> f64;
}

macro_rules! impl_float {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
        }

        impl Float for $ty {
            #[inline]
            fn pi() -> Self {
                Self::from_f64(std::f64::consts::PI)
            }
            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }
            #[inline]
            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }
            #[inline]
            fn sin(self) -> Self {
                <$ty>::sin(self)
            }
            #[inline]
            fn cos(self) -> Self {
                <$ty>::cos(self)
            }
            #[inline]
            fn acos(self) -> Self {
                <$ty>::acos(self)
            }
            #[inline]
            fn min(self, other: Self) -> Self {
                <$ty>::min(self, other)
            }
            #[inline]
            fn max(self, other: Self) -> Self {
                <$ty>::max(self, other)
            }
            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(v: f64) -> Self {
                v as Self
            }
            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_zero_one() {
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(f32::one(), 1.0);
    }

    #[test]
    fn test_float_ops() {
        let x: f64 = 4.0;
        assert_eq!(Float::sqrt(x), 2.0);
        assert_eq!(Float::abs(-3.0_f64), 3.0);
        assert_eq!(Float::acos(1.0_f64), 0.0);
        let pi: f64 = Float::pi();
        assert!((pi - std::f64::consts::PI).abs() < f64::EPSILON);
    }

    #[test]
    fn test_f64_round_trip() {
        assert_eq!(f32::from_f64(0.5).to_f64(), 0.5);
        assert_eq!(<f64 as Float>::from_f64(1e-10), 1e-10);
    }
}
