//! LU decomposition without pivoting.
//!
//! Decomposes a square matrix `A` into `A = LU` where:
//! - `L` is lower triangular with unit diagonal
//! - `U` is upper triangular
//!
//! No rows are exchanged, so the caller must supply a matrix whose leading
//! pivots are nonzero. Use [`gaussian_elimination`](crate::linalg::gaussian_elimination)
//! or [`Matrix::inverse`] when pivoting is needed.

use log::trace;

use crate::error::{LinalgError, Result};
use crate::linalg::EPSILON;
use crate::{Float, Matrix, Vector};

/// Result of an LU decomposition.
///
/// `L` and `U` are packed into a single matrix: the strict lower triangle
/// holds the multipliers of `L` (its unit diagonal is implicit), the upper
/// triangle including the diagonal holds `U`.
#[derive(Debug, Clone)]
pub struct LuDecomposition<T: Float> {
    lu: Vec<T>,
    n: usize,
}

impl<T: Float> LuDecomposition<T> {
    /// Perform LU decomposition of a square matrix.
    ///
    /// Fails with [`LinalgError::DegenerateInput`] when a pivot needed for
    /// elimination is within `1e-10` of zero.
    ///
    /// ```
    /// # use vectrix_core::Matrix;
    /// # use vectrix_core::linalg::LuDecomposition;
    /// let a = Matrix::from_rows(&[vec![4.0_f64, 3.0], vec![6.0, 3.0]]).unwrap();
    /// let lu = LuDecomposition::decompose(&a).unwrap();
    /// assert_eq!(lu.l().as_slice(), &[1.0, 0.0, 1.5, 1.0]);
    /// assert_eq!(lu.u().as_slice(), &[4.0, 3.0, 0.0, -1.5]);
    /// ```
    pub fn decompose(a: &Matrix<T>) -> Result<Self> {
        a.require_square("LU decomposition")?;
        let n = a.rows();
        let mut lu = a.as_slice().to_vec();
        let tol = T::from_f64(EPSILON);

        for k in 0..n.saturating_sub(1) {
            let pivot = lu[k * n + k];
            if pivot.abs() < tol {
                return Err(LinalgError::degenerate(
                    "matrix requires pivoting for LU decomposition",
                    pivot.to_f64(),
                ));
            }

            for i in (k + 1)..n {
                let factor = lu[i * n + k] / pivot;
                lu[i * n + k] = factor;
                trace!("L[{i}][{k}] = {factor}");

                for j in (k + 1)..n {
                    let ukj = lu[k * n + j];
                    lu[i * n + j] -= factor * ukj;
                }
            }
        }

        Ok(Self { lu, n })
    }

    /// The lower triangular factor `L` (unit diagonal).
    pub fn l(&self) -> Matrix<T> {
        let n = self.n;
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = T::one();
            for j in 0..i {
                data[i * n + j] = self.lu[i * n + j];
            }
        }
        Matrix::from_parts(data, n, n)
    }

    /// The upper triangular factor `U`.
    pub fn u(&self) -> Matrix<T> {
        let n = self.n;
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            for j in i..n {
                data[i * n + j] = self.lu[i * n + j];
            }
        }
        Matrix::from_parts(data, n, n)
    }

    /// `det(A) = product(diag(U))`.
    pub fn det(&self) -> T {
        (0..self.n).fold(T::one(), |d, i| d * self.lu[i * self.n + i])
    }

    /// Solve `Ax = b` by forward then back substitution.
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>> {
        let n = self.n;
        if b.dimension() != n {
            return Err(LinalgError::DimensionMismatch {
                op: "LU solve",
                left: vec![n, n],
                right: vec![b.dimension()],
            });
        }
        let mut x = b.to_vec();

        // Ly = b
        #[allow(clippy::needless_range_loop)]
        for i in 1..n {
            for j in 0..i {
                let lij_xj = self.lu[i * n + j] * x[j];
                x[i] -= lij_xj;
            }
        }

        // Ux = y
        let tol = T::from_f64(EPSILON);
        #[allow(clippy::needless_range_loop)]
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                let uij_xj = self.lu[i * n + j] * x[j];
                x[i] -= uij_xj;
            }
            let d = self.lu[i * n + i];
            if d.abs() < tol {
                return Err(LinalgError::degenerate(
                    "U has a zero on its diagonal",
                    d.to_f64(),
                ));
            }
            x[i] /= d;
        }

        Vector::from_vec(x)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn mat(data: &[f64], n: usize) -> Matrix<f64> {
        Matrix::from_vec(data.to_vec(), n, n).unwrap()
    }

    fn approx_eq(a: &[f64], b: &[f64], tol: f64) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| (x - y).abs() < tol)
    }

    #[test]
    fn test_lu_3x3_reconstructs() {
        let a = mat(&[2.0, 1.0, 1.0, 4.0, 3.0, 3.0, 8.0, 7.0, 9.0], 3);
        let lu = LuDecomposition::decompose(&a).unwrap();
        let prod = lu.l().multiply(&lu.u()).unwrap();
        assert!(approx_eq(prod.as_slice(), a.as_slice(), 1e-12));

        let l = lu.l();
        let u = lu.u();
        for i in 0..3 {
            assert_eq!(l[(i, i)], 1.0);
            for j in (i + 1)..3 {
                assert_eq!(l[(i, j)], 0.0);
                assert_eq!(u[(j, i)], 0.0);
            }
        }
    }

    #[test]
    fn test_lu_det() {
        // >>> np.linalg.det([[2,1,1],[4,3,3],[8,7,9]])
        // 4.0
        let a = mat(&[2.0, 1.0, 1.0, 4.0, 3.0, 3.0, 8.0, 7.0, 9.0], 3);
        let lu = LuDecomposition::decompose(&a).unwrap();
        assert_abs_diff_eq!(lu.det(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_requires_pivoting() {
        let a = mat(&[0.0, 1.0, 1.0, 0.0], 2);
        assert!(matches!(
            LuDecomposition::decompose(&a),
            Err(LinalgError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn test_singular_last_pivot_allowed() {
        // Only pivots used for elimination are checked.
        let a = mat(&[1.0, 2.0, 2.0, 4.0], 2);
        let lu = LuDecomposition::decompose(&a).unwrap();
        assert_eq!(lu.u().as_slice(), &[1.0, 2.0, 0.0, 0.0]);
        assert_eq!(lu.det(), 0.0);
        let b = Vector::new(&[1.0, 2.0]).unwrap();
        assert!(lu.solve(&b).is_err());
    }

    #[test]
    fn test_solve() {
        // 2x + y = 5
        // x + 4y = 6
        // => x = 2, y = 1
        let a = mat(&[2.0, 1.0, 1.0, 4.0], 2);
        let b = Vector::new(&[5.0, 6.0]).unwrap();
        let x = LuDecomposition::decompose(&a).unwrap().solve(&b).unwrap();
        assert!(approx_eq(x.as_slice(), &[2.0, 1.0], 1e-12));
    }

    #[test]
    fn test_not_square() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert!(matches!(
            LuDecomposition::decompose(&a),
            Err(LinalgError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_1x1() {
        let lu = LuDecomposition::decompose(&mat(&[0.0], 1)).unwrap();
        assert_eq!(lu.det(), 0.0);
    }
}
