//! Geometric primitives.

use vectrix_core::{Float, LinalgError, Result, Vector};

/// A point in the plane or in space.
///
/// A missing `z` means the point lives in 2D; wherever a third coordinate is
/// needed it reads as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T: Float> {
    pub x: T,
    pub y: T,
    pub z: Option<T>,
}

impl<T: Float> Point<T> {
    /// A 2D point.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y, z: None }
    }

    /// A 3D point.
    pub fn new_3d(x: T, y: T, z: T) -> Self {
        Self { x, y, z: Some(z) }
    }

    pub fn is_3d(&self) -> bool {
        self.z.is_some()
    }

    /// The z coordinate, or zero for a 2D point.
    pub fn z_or_zero(&self) -> T {
        self.z.unwrap_or_else(T::zero)
    }

    /// Displacement `self - origin` in the plane.
    pub fn offset_2d(&self, origin: &Self) -> Result<Vector<T>> {
        Vector::new(&[self.x - origin.x, self.y - origin.y])
    }

    /// Displacement `self - origin` in space, with missing z read as zero.
    pub fn offset_3d(&self, origin: &Self) -> Result<Vector<T>> {
        Vector::new(&[
            self.x - origin.x,
            self.y - origin.y,
            self.z_or_zero() - origin.z_or_zero(),
        ])
    }
}

/// A line through `point` along `direction`.
///
/// The direction must be 2-D for planar operations and 3-D for spatial ones;
/// each operation checks the dimension it needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<T: Float> {
    pub point: Point<T>,
    pub direction: Vector<T>,
}

impl<T: Float> Line<T> {
    pub fn new(point: Point<T>, direction: Vector<T>) -> Self {
        Self { point, direction }
    }

    /// The line through `a` and `b`; 3-D if either point is.
    pub fn through(a: Point<T>, b: Point<T>) -> Result<Self> {
        let direction = if a.is_3d() || b.is_3d() {
            b.offset_3d(&a)?
        } else {
            b.offset_2d(&a)?
        };
        Ok(Self {
            point: a,
            direction,
        })
    }

    pub(crate) fn require_dimension(&self, op: &'static str, dim: usize) -> Result<()> {
        require_dimension(&self.direction, op, dim)
    }
}

/// A plane through `point` with the given `normal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane<T: Float> {
    pub point: Point<T>,
    pub normal: Vector<T>,
}

impl<T: Float> Plane<T> {
    pub fn new(point: Point<T>, normal: Vector<T>) -> Self {
        Self { point, normal }
    }

    pub(crate) fn require_dimension(&self, op: &'static str) -> Result<()> {
        require_dimension(&self.normal, op, 3)
    }
}

fn require_dimension<T: Float>(v: &Vector<T>, op: &'static str, dim: usize) -> Result<()> {
    if v.dimension() == dim {
        Ok(())
    } else {
        Err(LinalgError::DimensionMismatch {
            op,
            left: vec![v.dimension()],
            right: vec![dim],
        })
    }
}
