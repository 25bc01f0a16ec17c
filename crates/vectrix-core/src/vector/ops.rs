//! Operator overloads for [`Vector`].
//!
//! - `&a + &b`, `&a - &b` (same dimension, panics on mismatch)
//! - `&a * k` (scale)
//! - `-&a`
//!
//! Use [`Vector::add`] / [`Vector::subtract`] for the fallible forms.

use core::ops::{Add, Mul, Neg, Sub};

use crate::Float;

use super::Vector;

macro_rules! impl_vector_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Float> $trait for &Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: &Vector<T>) -> Vector<T> {
                assert_eq!(
                    self.data.len(), rhs.data.len(),
                    "dimension mismatch in vector {}: {} vs {}",
                    stringify!($method), self.data.len(), rhs.data.len(),
                );
                Vector {
                    data: self.data.iter().zip(&rhs.data).map(|(&a, &b)| a $op b).collect(),
                }
            }
        }

        impl<T: Float> $trait for Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: Vector<T>) -> Vector<T> {
                $trait::$method(&self, &rhs)
            }
        }
    };
}

impl_vector_binop!(Add, add, +);
impl_vector_binop!(Sub, sub, -);

impl<T: Float> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, k: T) -> Vector<T> {
        self.multiply_scalar(k)
    }
}

impl<T: Float> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, k: T) -> Vector<T> {
        self.multiply_scalar(k)
    }
}

impl<T: Float> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        Vector {
            data: self.data.iter().map(|&a| -a).collect(),
        }
    }
}

impl<T: Float> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        -&self
    }
}
