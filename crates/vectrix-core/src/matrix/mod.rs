//! Dense row-major matrices.
//!
//! A [`Matrix`] stores `rows * cols` elements contiguously in row-major
//! order. Construction always copies the caller's data and cloning performs
//! a deep copy, so two matrices never share storage.

mod ops;

use core::fmt;
use core::ops::Index;

use log::debug;

use crate::error::{LinalgError, Result};
use crate::format;
use crate::linalg::EPSILON;
use crate::{Float, Vector};

/// Largest size for which the determinant is computed by cofactor
/// expansion. Bigger matrices use elimination with partial pivoting.
pub const COFACTOR_LIMIT: usize = 5;

/// A dense `rows x cols` matrix with `rows >= 1` and `cols >= 1`.
///
/// With the `serde` feature, deserialization goes through
/// [`Matrix::from_vec`], so malformed input is rejected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMatrix<T>")
)]
pub struct Matrix<T: Float> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Unvalidated wire form of a [`Matrix`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

#[cfg(feature = "serde")]
impl<T: Float> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = LinalgError;

    fn try_from(raw: RawMatrix<T>) -> Result<Self> {
        Self::from_vec(raw.data, raw.rows, raw.cols)
    }
}

impl<T: Float> Matrix<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a matrix from a flat row-major buffer.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LinalgError::InvalidShape {
                shape: vec![rows, cols],
                reason: "a matrix needs at least one row and one column",
            });
        }
        if data.len() != rows * cols {
            return Err(LinalgError::InvalidShape {
                shape: vec![rows, cols],
                reason: "shape product does not match data length",
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Deep-copy a rectangular grid of rows. Ragged input is rejected.
    ///
    /// ```
    /// # use vectrix_core::Matrix;
    /// let m = Matrix::from_rows(&[vec![1.0_f64, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// assert!(Matrix::from_rows(&[vec![1.0_f64, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows(grid: &[Vec<T>]) -> Result<Self> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if let Some(bad) = grid.iter().find(|r| r.len() != cols) {
            return Err(LinalgError::InvalidShape {
                shape: vec![rows, cols, bad.len()],
                reason: "ragged rows: every row must have the first row's length",
            });
        }
        Self::from_vec(grid.concat(), rows, cols)
    }

    /// Wrap a buffer whose shape the caller has already established.
    pub(crate) fn from_parts(data: Vec<T>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// A zero-filled `rows x cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::from_vec(vec![T::zero(); rows * cols], rows, cols)
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Flat row-major view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copy the elements out as a grid of rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.chunks(self.cols).map(<[T]>::to_vec).collect()
    }

    #[inline]
    pub(crate) fn at(&self, r: usize, c: usize) -> T {
        self.data[r * self.cols + c]
    }

    fn dims(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    fn check_index(&self, r: usize, c: usize) -> Result<()> {
        if r < self.rows && c < self.cols {
            Ok(())
        } else {
            Err(LinalgError::IndexOutOfBounds {
                index: vec![r, c],
                shape: self.dims().to_vec(),
            })
        }
    }

    /// Element at row `r`, column `c`.
    pub fn get(&self, r: usize, c: usize) -> Result<T> {
        self.check_index(r, c)?;
        Ok(self.at(r, c))
    }

    /// Overwrite the element at row `r`, column `c`.
    pub fn set(&mut self, r: usize, c: usize, value: T) -> Result<()> {
        self.check_index(r, c)?;
        self.data[r * self.cols + c] = value;
        Ok(())
    }

    /// Copy of row `r`.
    pub fn row(&self, r: usize) -> Result<Vector<T>> {
        self.check_index(r, 0)?;
        Vector::new(&self.data[r * self.cols..(r + 1) * self.cols])
    }

    /// Copy of column `c`.
    pub fn column(&self, c: usize) -> Result<Vector<T>> {
        self.check_index(0, c)?;
        Vector::from_vec((0..self.rows).map(|r| self.at(r, c)).collect())
    }

    pub(crate) fn require_square(&self, op: &'static str) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(LinalgError::DimensionMismatch {
                op,
                left: vec![self.rows],
                right: vec![self.cols],
            })
        }
    }

    fn check_same_shape(&self, other: &Self, op: &'static str) -> Result<()> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            Err(LinalgError::mismatch(op, &self.dims(), &other.dims()))
        }
    }

    // ------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------

    /// Element-wise sum.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "matrix addition")?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Element-wise difference `self - other`.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "matrix subtraction")?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    fn zip_with<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(T, T) -> T,
    {
        Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Scale every element by `k`.
    pub fn multiply_scalar(&self, k: T) -> Self {
        Self {
            data: self.data.iter().map(|&a| a * k).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Matrix product `self * other`; requires `self.cols == other.rows`.
    ///
    /// ```
    /// # use vectrix_core::Matrix;
    /// let a = Matrix::from_rows(&[vec![1.0_f64, 2.0], vec![3.0, 4.0]]).unwrap();
    /// let b = Matrix::from_rows(&[vec![5.0_f64], vec![6.0]]).unwrap();
    /// let c = a.multiply(&b).unwrap();
    /// assert_eq!(c.as_slice(), &[17.0, 39.0]);
    /// ```
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(LinalgError::mismatch(
                "matrix multiplication",
                &self.dims(),
                &other.dims(),
            ));
        }
        let (m, k, n) = (self.rows, self.cols, other.cols);
        let mut data = vec![T::zero(); m * n];
        for i in 0..m {
            for j in 0..n {
                let mut sum = T::zero();
                for p in 0..k {
                    sum += self.data[i * k + p] * other.data[p * n + j];
                }
                data[i * n + j] = sum;
            }
        }
        Ok(Self {
            data,
            rows: m,
            cols: n,
        })
    }

    /// Matrix-vector product `self * x`; requires `self.cols == x.dimension()`.
    pub fn multiply_vector(&self, x: &Vector<T>) -> Result<Vector<T>> {
        if self.cols != x.dimension() {
            return Err(LinalgError::mismatch(
                "matrix-vector multiplication",
                &self.dims(),
                &[x.dimension()],
            ));
        }
        let xs = x.as_slice();
        Vector::from_vec(
            self.data
                .chunks(self.cols)
                .map(|row| row.iter().zip(xs).fold(T::zero(), |acc, (&a, &b)| acc + a * b))
                .collect(),
        )
    }

    /// The `cols x rows` transpose.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self.at(r, c));
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    // ------------------------------------------------------------------
    // Determinant / inverse
    // ------------------------------------------------------------------

    /// The matrix with row `r` and column `c` removed.
    pub fn minor(&self, r: usize, c: usize) -> Result<Self> {
        self.check_index(r, c)?;
        if self.rows < 2 || self.cols < 2 {
            return Err(LinalgError::InvalidShape {
                shape: self.dims().to_vec(),
                reason: "a minor needs at least two rows and two columns",
            });
        }
        Ok(self.minor_unchecked(r, c))
    }

    fn minor_unchecked(&self, r: usize, c: usize) -> Self {
        let data = (0..self.rows)
            .filter(|&i| i != r)
            .flat_map(|i| {
                (0..self.cols)
                    .filter(move |&j| j != c)
                    .map(move |j| self.at(i, j))
            })
            .collect();
        Self {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        }
    }

    /// Determinant of a square matrix.
    ///
    /// Up to [`COFACTOR_LIMIT`] the value comes from cofactor expansion along
    /// the first row; larger matrices are reduced with partial pivoting and
    /// the determinant is the signed product of the pivots.
    ///
    /// ```
    /// # use vectrix_core::Matrix;
    /// let a = Matrix::from_rows(&[
    ///     vec![6.0_f64, 1.0, 1.0],
    ///     vec![4.0, -2.0, 5.0],
    ///     vec![2.0, 8.0, 7.0],
    /// ]).unwrap();
    /// assert_eq!(a.determinant().unwrap(), -306.0);
    /// ```
    pub fn determinant(&self) -> Result<T> {
        self.require_square("determinant")?;
        if self.rows <= COFACTOR_LIMIT {
            Ok(self.cofactor_determinant())
        } else {
            Ok(self.elimination_determinant())
        }
    }

    fn cofactor_determinant(&self) -> T {
        match self.rows {
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            n => {
                let mut det = T::zero();
                for j in 0..n {
                    let sign = if j % 2 == 0 { T::one() } else { -T::one() };
                    det += sign * self.at(0, j) * self.minor_unchecked(0, j).cofactor_determinant();
                }
                det
            }
        }
    }

    fn elimination_determinant(&self) -> T {
        let n = self.rows;
        let mut a = self.data.clone();
        let mut det = T::one();

        for k in 0..n {
            let mut max_row = k;
            for i in (k + 1)..n {
                if a[i * n + k].abs() > a[max_row * n + k].abs() {
                    max_row = i;
                }
            }
            if a[max_row * n + k] == T::zero() {
                return T::zero();
            }
            if max_row != k {
                for j in 0..n {
                    a.swap(k * n + j, max_row * n + j);
                }
                det = -det;
            }

            let pivot = a[k * n + k];
            det *= pivot;
            for i in (k + 1)..n {
                let factor = a[i * n + k] / pivot;
                for j in k..n {
                    let akj = a[k * n + j];
                    a[i * n + j] -= factor * akj;
                }
            }
        }
        det
    }

    /// Inverse via Gauss-Jordan elimination with partial pivoting on `[A | I]`.
    ///
    /// Fails with [`LinalgError::DegenerateInput`] when `|det(A)| < 1e-10`.
    ///
    /// ```
    /// # use vectrix_core::Matrix;
    /// let a = Matrix::from_rows(&[vec![4.0_f64, 7.0], vec![2.0, 6.0]]).unwrap();
    /// let inv = a.inverse().unwrap();
    /// assert!((inv.get(0, 0).unwrap() - 0.6).abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        self.require_square("inverse")?;
        let det = self.determinant()?;
        if det.abs() < T::from_f64(EPSILON) {
            return Err(LinalgError::degenerate(
                "matrix is not invertible (determinant is zero)",
                det.to_f64(),
            ));
        }
        debug!("inverting {0}x{0} matrix, det = {1}", self.rows, format::format_scalar(det));

        let n = self.rows;
        let w = 2 * n;
        let mut aug = vec![T::zero(); n * w];
        for i in 0..n {
            aug[i * w..i * w + n].copy_from_slice(&self.data[i * n..(i + 1) * n]);
            aug[i * w + n + i] = T::one();
        }

        for i in 0..n {
            let mut max_row = i;
            for k in (i + 1)..n {
                if aug[k * w + i].abs() > aug[max_row * w + i].abs() {
                    max_row = k;
                }
            }
            if max_row != i {
                for j in 0..w {
                    aug.swap(i * w + j, max_row * w + j);
                }
            }

            let pivot = aug[i * w + i];
            for j in 0..w {
                aug[i * w + j] /= pivot;
            }

            // Clear column i in every other row, above and below.
            for k in (0..n).filter(|&k| k != i) {
                let factor = aug[k * w + i];
                for j in 0..w {
                    let aij = aug[i * w + j];
                    aug[k * w + j] -= factor * aij;
                }
            }
        }

        let data = aug
            .chunks(w)
            .flat_map(|row| row[n..].iter().copied())
            .collect();
        Ok(Self {
            data,
            rows: n,
            cols: n,
        })
    }
}

impl<T: Float> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (r, c): (usize, usize)) -> &T {
        assert!(
            r < self.rows && c < self.cols,
            "index ({r}, {c}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[r * self.cols + c]
    }
}

impl<T: Float> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(&format::format_row(row))?;
        }
        Ok(())
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

    fn assert_close(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64) {
        assert_eq!(a.shape(), b.shape());
        for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
            assert_abs_diff_eq!(x, y, epsilon = tol);
        }
    }

    #[test]
    fn test_construction_shapes() {
        let z = Matrix::<f64>::zeros(2, 3).unwrap();
        assert_eq!(z.shape(), (2, 3));
        assert!(z.as_slice().iter().all(|&x| x == 0.0));
        assert!(Matrix::<f64>::zeros(0, 3).is_err());
        assert!(Matrix::<f64>::from_rows(&[]).is_err());
        assert!(Matrix::<f64>::from_rows(&[vec![]]).is_err());
        assert!(Matrix::from_vec(vec![1.0_f64, 2.0, 3.0], 2, 2).is_err());
    }

    #[test]
    fn test_ragged_rejected() {
        let err = Matrix::from_rows(&[vec![1.0_f64, 2.0], vec![3.0, 4.0, 5.0]]).unwrap_err();
        assert!(matches!(err, LinalgError::InvalidShape { .. }));
    }

    #[test]
    fn test_deep_copy() {
        let mut grid = vec![vec![1.0_f64, 2.0], vec![3.0, 4.0]];
        let a = Matrix::from_rows(&grid).unwrap();
        grid[0][0] = 100.0;
        assert_eq!(a[(0, 0)], 1.0);

        let mut b = a.clone();
        b.set(1, 1, -1.0).unwrap();
        assert_eq!(a[(1, 1)], 4.0);
        assert_eq!(a.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_row_column() {
        let a = mat(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(a.row(1).unwrap().as_slice(), &[4.0, 5.0, 6.0]);
        assert_eq!(a.column(2).unwrap().as_slice(), &[3.0, 6.0]);
        assert!(a.row(2).is_err());
        assert!(a.get(0, 3).is_err());
    }

    #[test]
    fn test_add_subtract_scale() {
        let a = mat(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = mat(&[&[0.5, 0.5], &[1.0, -1.0]]);
        assert_eq!(a.add(&b).unwrap().as_slice(), &[1.5, 2.5, 4.0, 3.0]);
        assert_eq!(a.subtract(&b).unwrap().as_slice(), &[0.5, 1.5, 2.0, 5.0]);
        assert_eq!(a.multiply_scalar(2.0).as_slice(), &[2.0, 4.0, 6.0, 8.0]);

        let c = mat(&[&[1.0, 2.0, 3.0]]);
        assert_eq!(
            a.add(&c).unwrap_err(),
            LinalgError::DimensionMismatch {
                op: "matrix addition",
                left: vec![2, 2],
                right: vec![1, 3],
            }
        );
    }

    #[test]
    fn test_multiply() {
        let a = mat(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let b = mat(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]);
        let c = a.multiply(&b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
        assert!(a.multiply(&a).is_err());
    }

    #[test]
    fn test_multiply_vector() {
        let a = mat(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let x = Vector::new(&[1.0, 1.0]).unwrap();
        assert_eq!(a.multiply_vector(&x).unwrap().as_slice(), &[3.0, 7.0]);
        assert!(a.multiply_vector(&Vector::new(&[1.0]).unwrap()).is_err());
    }

    #[test]
    fn test_transpose() {
        let a = mat(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_minor() {
        let a = mat(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        assert_eq!(a.minor(1, 1).unwrap().as_slice(), &[1.0, 3.0, 7.0, 9.0]);
        assert!(mat(&[&[1.0]]).minor(0, 0).is_err());
    }

    #[test]
    fn test_determinant_small() {
        assert_eq!(mat(&[&[-3.5]]).determinant().unwrap(), -3.5);
        assert_eq!(mat(&[&[2.0, 1.0], &[1.0, 4.0]]).determinant().unwrap(), 7.0);
        // >>> np.linalg.det([[1,2,3,4],[5,6,7,8],[2,6,4,8],[3,1,1,2]])
        // 72.0
        let a = mat(&[
            &[1.0, 2.0, 3.0, 4.0],
            &[5.0, 6.0, 7.0, 8.0],
            &[2.0, 6.0, 4.0, 8.0],
            &[3.0, 1.0, 1.0, 2.0],
        ]);
        assert_eq!(a.determinant().unwrap(), 72.0);
        assert!(mat(&[&[1.0, 2.0]]).determinant().is_err());
    }

    #[test]
    fn test_determinant_identity() {
        for n in 1..=8 {
            assert_eq!(Matrix::<f64>::identity(n).unwrap().determinant().unwrap(), 1.0);
        }
    }

    #[test]
    fn test_elimination_matches_cofactor() {
        let a = mat(&[
            &[2.0, -1.0, 0.0, 3.0, 1.0],
            &[1.0, 4.0, -2.0, 0.0, 5.0],
            &[0.0, 3.0, 1.0, -1.0, 2.0],
            &[6.0, 0.0, 2.0, 1.0, -3.0],
            &[1.0, 1.0, 1.0, 1.0, 1.0],
        ]);
        let cofactor = a.cofactor_determinant();
        let elimination = a.elimination_determinant();
        assert_abs_diff_eq!(cofactor, elimination, epsilon = 1e-9);
    }

    #[test]
    fn test_determinant_large_row_swap_sign() {
        // Swapping two rows of the 6x6 identity flips the sign.
        let mut p = Matrix::<f64>::identity(6).unwrap();
        p.set(0, 0, 0.0).unwrap();
        p.set(1, 1, 0.0).unwrap();
        p.set(0, 1, 1.0).unwrap();
        p.set(1, 0, 1.0).unwrap();
        assert_eq!(p.determinant().unwrap(), -1.0);

        let d = Matrix::from_vec(
            (0..36).map(|i| if i % 7 == 0 { 2.0 } else { 0.0 }).collect(),
            6,
            6,
        )
        .unwrap();
        assert_eq!(d.determinant().unwrap(), 64.0);
    }

    #[test]
    fn test_inverse() {
        let a = mat(&[&[1.0, 2.0, 3.0], &[0.0, 1.0, 4.0], &[5.0, 6.0, 0.0]]);
        let inv = a.inverse().unwrap();
        let expected = mat(&[&[-24.0, 18.0, 5.0], &[20.0, -15.0, -4.0], &[-5.0, 4.0, 1.0]]);
        assert_close(&inv, &expected, 1e-9);
        assert_close(
            &inv.multiply(&a).unwrap(),
            &Matrix::identity(3).unwrap(),
            1e-9,
        );
    }

    #[test]
    fn test_inverse_needs_pivoting() {
        let a = mat(&[&[0.0, 1.0], &[1.0, 0.0]]);
        assert_close(&a.inverse().unwrap(), &a, 1e-12);
    }

    #[test]
    fn test_inverse_singular() {
        let a = mat(&[&[1.0, 2.0], &[2.0, 4.0]]);
        assert!(matches!(
            a.inverse(),
            Err(LinalgError::DegenerateInput { .. })
        ));
        assert!(matches!(
            mat(&[&[1.0, 2.0, 3.0]]).inverse(),
            Err(LinalgError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_display() {
        let a = mat(&[&[1.0, 2.5], &[-1.0, 1.0 / 3.0]]);
        assert_eq!(a.to_string(), "[1.000, 2.500]\n[-1.000, 0.333]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip_and_rejection() {
        let a = mat(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(serde_json::from_str::<Matrix<f64>>(&json).unwrap(), a);

        for bad in [
            r#"{"data":[],"rows":0,"cols":0}"#,
            r#"{"data":[1.0],"rows":2,"cols":2}"#,
            r#"{"data":[1.0,2.0],"rows":1,"cols":0}"#,
        ] {
            assert!(serde_json::from_str::<Matrix<f64>>(bad).is_err(), "{bad}");
        }
    }
}
