//! Distances, angles, areas and volumes.

use log::trace;
use vectrix_core::linalg::EPSILON;
use vectrix_core::{Float, LinalgError, Result, Vector};

use crate::primitives::{Line, Plane, Point};

/// Euclidean distance; a missing `z` counts as zero.
pub fn distance_points<T: Float>(p1: &Point<T>, p2: &Point<T>) -> T {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let dz = p2.z_or_zero() - p1.z_or_zero();
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Distance from `point` to a 2D line: the length of the component of
/// `point - line.point` orthogonal to the direction.
///
/// ```
/// # use vectrix_core::Vector;
/// # use vectrix_geometry::{Line, Point, distance_point_to_line_2d};
/// let x_axis = Line::new(Point::new(0.0_f64, 0.0), Vector::new(&[1.0, 0.0]).unwrap());
/// let d = distance_point_to_line_2d(&Point::new(3.0, -2.0), &x_axis).unwrap();
/// assert!((d - 2.0).abs() < 1e-12);
/// ```
pub fn distance_point_to_line_2d<T: Float>(point: &Point<T>, line: &Line<T>) -> Result<T> {
    line.require_dimension("point-line distance (2D)", 2)?;
    let v = point.offset_2d(&line.point)?;
    let along = v.project_onto(&line.direction)?;
    Ok(v.subtract(&along)?.magnitude())
}

/// Distance from `point` to a 3D line: `|v × d| / |d|`.
pub fn distance_point_to_line_3d<T: Float>(point: &Point<T>, line: &Line<T>) -> Result<T> {
    line.require_dimension("point-line distance (3D)", 3)?;
    let len = line.direction.magnitude();
    if len == T::zero() {
        return Err(LinalgError::DegenerateInput {
            reason: "line direction is the zero vector",
            value: 0.0,
        });
    }
    let v = point.offset_3d(&line.point)?;
    Ok(v.cross(&line.direction)?.magnitude() / len)
}

/// Unsigned distance from `point` to `plane`.
pub fn distance_point_to_plane<T: Float>(point: &Point<T>, plane: &Plane<T>) -> Result<T> {
    plane.require_dimension("point-plane distance")?;
    let n = plane.normal.normalize()?;
    Ok(point.offset_3d(&plane.point)?.dot(&n)?.abs())
}

/// Angle between two vectors in degrees, in `[0, 180]`.
pub fn angle_between_vectors<T: Float>(v1: &Vector<T>, v2: &Vector<T>) -> Result<T> {
    let radians = v1.angle_to(v2)?;
    Ok(radians * T::from_f64(180.0) / T::pi())
}

/// Area of the triangle `p1 p2 p3`.
///
/// Uses the cross product when any vertex carries a `z`, the planar shoelace
/// formula otherwise.
pub fn triangle_area<T: Float>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Result<T> {
    let half = T::from_f64(0.5);
    if p1.is_3d() || p2.is_3d() || p3.is_3d() {
        let a = p2.offset_3d(p1)?;
        let b = p3.offset_3d(p1)?;
        Ok(half * a.cross(&b)?.magnitude())
    } else {
        Ok(half * planar_cross(p1, p2, p3).abs())
    }
}

/// Volume of the tetrahedron `p1 p2 p3 p4`: `|a · (b × c)| / 6`.
pub fn tetrahedron_volume<T: Float>(
    p1: &Point<T>,
    p2: &Point<T>,
    p3: &Point<T>,
    p4: &Point<T>,
) -> Result<T> {
    let a = p2.offset_3d(p1)?;
    let b = p3.offset_3d(p1)?;
    let c = p4.offset_3d(p1)?;
    Ok(a.dot(&b.cross(&c)?)?.abs() / T::from_f64(6.0))
}

/// Whether three points lie on one line (within `1e-10`).
pub fn are_collinear<T: Float>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Result<bool> {
    let tol = T::from_f64(EPSILON);
    let residual = if p1.is_3d() || p2.is_3d() || p3.is_3d() {
        p2.offset_3d(p1)?.cross(&p3.offset_3d(p1)?)?.magnitude()
    } else {
        planar_cross(p1, p2, p3).abs()
    };
    trace!("collinearity residual {residual}");
    Ok(residual < tol)
}

/// z component of `(p2 - p1) × (p3 - p1)`.
pub(crate) fn planar_cross<T: Float>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> T {
    (p2.x - p1.x) * (p3.y - p1.y) - (p3.x - p1.x) * (p2.y - p1.y)
}
