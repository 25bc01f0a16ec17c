//! Fixed-dimension real vectors.
//!
//! A [`Vector`] owns its elements; every constructor copies the caller's
//! buffer and every algebraic operation returns a fresh vector. The only
//! in-place mutation is [`Vector::set`].

mod ops;

use core::fmt;
use core::ops::Index;

use crate::Float;
use crate::error::{LinalgError, Result};
use crate::format;
use crate::linalg::EPSILON;

/// A dense vector of dimension `>= 1`.
///
/// With the `serde` feature a vector is a plain sequence on the wire;
/// deserialization goes through [`Vector::from_vec`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<T>", into = "Vec<T>")
)]
pub struct Vector<T: Float> {
    data: Vec<T>,
}

impl<T: Float> Vector<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a vector by copying `data`.
    ///
    /// ```
    /// # use vectrix_core::Vector;
    /// let v = Vector::new(&[1.0_f64, 2.0, 3.0]).unwrap();
    /// assert_eq!(v.dimension(), 3);
    /// ```
    pub fn new(data: &[T]) -> Result<Self> {
        Self::from_vec(data.to_vec())
    }

    /// Create a vector that takes ownership of `data`.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        if data.is_empty() {
            return Err(LinalgError::InvalidShape {
                shape: vec![0],
                reason: "a vector needs at least one element",
            });
        }
        Ok(Self { data })
    }

    /// The zero vector of dimension `dim`.
    pub fn zeros(dim: usize) -> Result<Self> {
        Self::from_vec(vec![T::zero(); dim])
    }

    /// The standard basis vector `e_index` of dimension `dim`.
    pub fn unit(dim: usize, index: usize) -> Result<Self> {
        let mut v = Self::zeros(dim)?;
        v.set(index, T::one())?;
        Ok(v)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of components.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copy the components out into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Component at `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_bounds(index))
    }

    /// Overwrite the component at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        if index >= self.dimension() {
            return Err(self.out_of_bounds(index));
        }
        self.data[index] = value;
        Ok(())
    }

    fn out_of_bounds(&self, index: usize) -> LinalgError {
        LinalgError::IndexOutOfBounds {
            index: vec![index],
            shape: vec![self.dimension()],
        }
    }

    fn check_same(&self, other: &Self, op: &'static str) -> Result<()> {
        if self.dimension() == other.dimension() {
            Ok(())
        } else {
            Err(LinalgError::mismatch(
                op,
                &[self.dimension()],
                &[other.dimension()],
            ))
        }
    }

    fn zip_map<F>(&self, other: &Self, op: &'static str, f: F) -> Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        self.check_same(other, op)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self { data })
    }

    // ------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------

    /// Element-wise sum.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_map(other, "vector addition", |a, b| a + b)
    }

    /// Element-wise difference `self - other`.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_map(other, "vector subtraction", |a, b| a - b)
    }

    /// Scale every component by `k`.
    pub fn multiply_scalar(&self, k: T) -> Self {
        Self {
            data: self.data.iter().map(|&a| a * k).collect(),
        }
    }

    /// Inner product `sum(a_i * b_i)`.
    ///
    /// ```
    /// # use vectrix_core::Vector;
    /// let a = Vector::new(&[1.0_f64, 2.0, 3.0]).unwrap();
    /// let b = Vector::new(&[4.0_f64, 5.0, 6.0]).unwrap();
    /// assert_eq!(a.dot(&b).unwrap(), 32.0);
    /// ```
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.check_same(other, "dot product")?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Right-handed cross product. Both operands must be 3-D.
    ///
    /// ```
    /// # use vectrix_core::Vector;
    /// let x = Vector::new(&[1.0_f64, 0.0, 0.0]).unwrap();
    /// let y = Vector::new(&[0.0_f64, 1.0, 0.0]).unwrap();
    /// assert_eq!(x.cross(&y).unwrap().as_slice(), &[0.0, 0.0, 1.0]);
    /// ```
    pub fn cross(&self, other: &Self) -> Result<Self> {
        if self.dimension() != 3 || other.dimension() != 3 {
            return Err(LinalgError::UnsupportedOperation {
                op: "cross product",
                dims: vec![self.dimension(), other.dimension()],
            });
        }
        let (a, b) = (&self.data, &other.data);
        Ok(Self {
            data: vec![
                a[1] * b[2] - a[2] * b[1],
                a[2] * b[0] - a[0] * b[2],
                a[0] * b[1] - a[1] * b[0],
            ],
        })
    }

    // ------------------------------------------------------------------
    // Metric operations
    // ------------------------------------------------------------------

    /// Euclidean length.
    pub fn magnitude(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &a| acc + a * a)
            .sqrt()
    }

    /// Unit vector in the same direction. Fails on the zero vector.
    pub fn normalize(&self) -> Result<Self> {
        let mag = self.magnitude();
        if mag == T::zero() {
            return Err(LinalgError::degenerate(
                "cannot normalize a zero vector",
                0.0,
            ));
        }
        Ok(self.multiply_scalar(T::one() / mag))
    }

    /// Euclidean distance between the two points.
    pub fn distance_to(&self, other: &Self) -> Result<T> {
        Ok(self.subtract(other)?.magnitude())
    }

    /// Angle between the vectors in radians, in `[0, pi]`.
    pub fn angle_to(&self, other: &Self) -> Result<T> {
        let dot = self.dot(other)?;
        let (m1, m2) = (self.magnitude(), other.magnitude());
        if m1 == T::zero() || m2 == T::zero() {
            return Err(LinalgError::degenerate(
                "angle with a zero vector is undefined",
                0.0,
            ));
        }
        // Rounding can push the cosine slightly outside [-1, 1].
        let cos = (dot / (m1 * m2)).min(T::one()).max(-T::one());
        Ok(cos.acos())
    }

    /// Whether the vectors point along the same line (either direction).
    ///
    /// Vectors of different dimension are never parallel. Fails if either
    /// vector is zero.
    pub fn is_parallel_to(&self, other: &Self) -> Result<bool> {
        if self.dimension() != other.dimension() {
            return Ok(false);
        }
        let dot = self.normalize()?.dot(&other.normalize()?)?;
        Ok((dot.abs() - T::one()).abs() < T::from_f64(EPSILON))
    }

    /// Whether the inner product vanishes.
    pub fn is_orthogonal_to(&self, other: &Self) -> Result<bool> {
        Ok(self.dot(other)?.abs() < T::from_f64(EPSILON))
    }

    /// Orthogonal projection of `self` onto the line spanned by `other`.
    pub fn project_onto(&self, other: &Self) -> Result<Self> {
        let denom = other.dot(other)?;
        if denom == T::zero() {
            return Err(LinalgError::degenerate(
                "cannot project onto a zero vector",
                0.0,
            ));
        }
        Ok(other.multiply_scalar(self.dot(other)? / denom))
    }
}

impl<T: Float> TryFrom<Vec<T>> for Vector<T> {
    type Error = LinalgError;

    fn try_from(data: Vec<T>) -> Result<Self> {
        Self::from_vec(data)
    }
}

impl<T: Float> From<Vector<T>> for Vec<T> {
    fn from(v: Vector<T>) -> Self {
        v.data
    }
}

impl<T: Float> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Float> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::format_row(&self.data))
    }
}
