//! Numerical rank by row reduction.

use log::debug;

use crate::linalg::EPSILON;
use crate::{Float, Matrix};

/// Number of pivots found by partial-pivot row reduction.
///
/// Columns whose best remaining pivot is below `1e-10` are skipped without
/// advancing the pivot row. The result never exceeds `min(rows, cols)`.
///
/// ```
/// # use vectrix_core::Matrix;
/// # use vectrix_core::linalg::rank;
/// let a = Matrix::from_rows(&[
///     vec![1.0_f64, 2.0, 3.0],
///     vec![2.0, 4.0, 6.0],
///     vec![7.0, 8.0, 9.0],
/// ]).unwrap();
/// assert_eq!(rank(&a), 2);
/// ```
pub fn rank<T: Float>(a: &Matrix<T>) -> usize {
    let (m, n) = a.shape();
    let mut mat = a.as_slice().to_vec();
    let tol = T::from_f64(EPSILON);

    let mut rank = 0;
    let mut row = 0;
    for col in 0..n {
        if row >= m {
            break;
        }

        let mut pivot_row = row;
        for i in (row + 1)..m {
            if mat[i * n + col].abs() > mat[pivot_row * n + col].abs() {
                pivot_row = i;
            }
        }
        if mat[pivot_row * n + col].abs() < tol {
            continue;
        }

        if pivot_row != row {
            for j in 0..n {
                mat.swap(row * n + j, pivot_row * n + j);
            }
        }

        let pivot = mat[row * n + col];
        for i in (row + 1)..m {
            let factor = mat[i * n + col] / pivot;
            for j in col..n {
                let rj = mat[row * n + j];
                mat[i * n + j] -= factor * rj;
            }
        }

        rank += 1;
        row += 1;
    }

    debug!("rank of {m}x{n} matrix: {rank}");
    rank
}
