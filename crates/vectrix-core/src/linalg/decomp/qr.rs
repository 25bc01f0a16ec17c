//! QR decomposition via Gram-Schmidt orthogonalization.
//!
//! Decomposes an `m x n` matrix `A` into `A = QR` where:
//! - `Q` is `m x n` with orthonormal columns (for full column rank)
//! - `R` is `n x n` upper triangular
//!
//! Rank deficiency does not fail: a column whose residual norm is within
//! `1e-10` of zero leaves the corresponding column of `Q` at zero, and the
//! matching diagonal entry of `R` is (near) zero. Check
//! [`QrDecomposition::is_full_rank`] to detect this.

use crate::linalg::EPSILON;
use crate::{Float, Matrix};

/// Result of a Gram-Schmidt QR decomposition.
#[derive(Debug, Clone)]
pub struct QrDecomposition<T: Float> {
    q: Matrix<T>,
    r: Matrix<T>,
}

#[allow(clippy::many_single_char_names)]
impl<T: Float> QrDecomposition<T> {
    /// Orthogonalize the columns of `a` left to right.
    ///
    /// ```
    /// # use vectrix_core::Matrix;
    /// # use vectrix_core::linalg::QrDecomposition;
    /// let a = Matrix::from_rows(&[
    ///     vec![1.0_f64, 1.0],
    ///     vec![0.0, 1.0],
    ///     vec![1.0, 0.0],
    /// ]).unwrap();
    /// let qr = QrDecomposition::decompose(&a);
    /// let back = qr.q().multiply(qr.r()).unwrap();
    /// for (x, y) in back.as_slice().iter().zip(a.as_slice()) {
    ///     assert!((x - y).abs() < 1e-12);
    /// }
    /// ```
    pub fn decompose(a: &Matrix<T>) -> Self {
        let (m, n) = a.shape();
        let src = a.as_slice();
        let mut q = vec![T::zero(); m * n];
        let mut r = vec![T::zero(); n * n];
        let tol = T::from_f64(EPSILON);

        for j in 0..n {
            let mut v: Vec<T> = (0..m).map(|k| src[k * n + j]).collect();

            for i in 0..j {
                let proj = (0..m).fold(T::zero(), |acc, k| acc + q[k * n + i] * v[k]);
                r[i * n + j] = proj;
                for (k, vk) in v.iter_mut().enumerate() {
                    *vk -= proj * q[k * n + i];
                }
            }

            let norm = v.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt();
            r[j * n + j] = norm;
            if norm > tol {
                for (k, &vk) in v.iter().enumerate() {
                    q[k * n + j] = vk / norm;
                }
            }
        }

        Self {
            q: Matrix::from_parts(q, m, n),
            r: Matrix::from_parts(r, n, n),
        }
    }

    /// The `m x n` factor with orthonormal (or zero) columns.
    pub fn q(&self) -> &Matrix<T> {
        &self.q
    }

    /// The `n x n` upper triangular factor.
    pub fn r(&self) -> &Matrix<T> {
        &self.r
    }

    pub fn into_parts(self) -> (Matrix<T>, Matrix<T>) {
        (self.q, self.r)
    }

    /// Whether every diagonal entry of `R` exceeds the zero tolerance.
    pub fn is_full_rank(&self) -> bool {
        let threshold = T::from_f64(EPSILON);
        let n = self.r.rows();
        (0..n).all(|i| self.r.at(i, i).abs() > threshold)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn mat(rows: &[&[f64]]) -> Matrix<f64> {
        let grid: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
        Matrix::from_rows(&grid).unwrap()
    }

    #[test]
    fn test_qr_square() {
        let a = mat(&[
            &[12.0, -51.0, 4.0],
            &[6.0, 167.0, -68.0],
            &[-4.0, 24.0, -41.0],
        ]);
        let qr = QrDecomposition::decompose(&a);
        assert!(qr.is_full_rank());

        // Classic textbook result: R = [[14, 21, -14], [0, 175, -70], [0, 0, 35]]
        let r = qr.r();
        assert_abs_diff_eq!(r[(0, 0)], 14.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r[(0, 1)], 21.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r[(1, 1)], 175.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r[(1, 2)], -70.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r[(2, 2)], 35.0, epsilon = 1e-9);
        assert_eq!(r[(1, 0)], 0.0);

        let back = qr.q().multiply(qr.r()).unwrap();
        for (x, y) in back.as_slice().iter().zip(a.as_slice()) {
            assert_abs_diff_eq!(x, y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_q_orthonormal_tall() {
        let a = mat(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        let qr = QrDecomposition::decompose(&a);
        let qtq = qr.q().transpose().multiply(qr.q()).unwrap();
        let eye = Matrix::<f64>::identity(2).unwrap();
        for (x, y) in qtq.as_slice().iter().zip(eye.as_slice()) {
            assert_abs_diff_eq!(x, y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rank_deficient_leaves_zero_column() {
        let a = mat(&[&[1.0, 2.0], &[2.0, 4.0], &[3.0, 6.0]]);
        let qr = QrDecomposition::decompose(&a);
        assert!(!qr.is_full_rank());
        assert!(qr.r()[(1, 1)].abs() < 1e-10);
        let (q, _) = qr.into_parts();
        assert!(q.column(1).unwrap().iter().all(|&x| x == 0.0));
    }
}
