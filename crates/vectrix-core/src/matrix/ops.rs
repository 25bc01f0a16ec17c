//! Operator overloads for [`Matrix`].
//!
//! The operators panic on shape mismatch, like slice indexing does. The
//! named methods ([`Matrix::add`], [`Matrix::multiply`], ...) return
//! [`Result`](crate::Result) instead.

use core::ops::{Add, Mul, Sub};

use crate::{Float, Vector};

use super::Matrix;

macro_rules! impl_matrix_elementwise {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Float> $trait for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                assert_eq!(
                    self.shape(), rhs.shape(),
                    "shape mismatch in element-wise {}: {:?} vs {:?}",
                    stringify!($method), self.shape(), rhs.shape(),
                );
                self.zip_with(rhs, |a, b| a $op b)
            }
        }
    };
}

impl_matrix_elementwise!(Add, add, +);
impl_matrix_elementwise!(Sub, sub, -);

impl<T: Float> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.multiply(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Float> Mul<&Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        match self.multiply_vector(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Float> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, k: T) -> Matrix<T> {
        self.multiply_scalar(k)
    }
}
