//! Line-line and line-plane intersection.

use log::debug;
use vectrix_core::Float;
use vectrix_core::Result;
use vectrix_core::linalg::EPSILON;

use crate::primitives::{Line, Plane, Point};

/// Intersection point of two 2D lines, or `None` when they are parallel
/// (including coincident lines).
///
/// ```
/// # use vectrix_core::Vector;
/// # use vectrix_geometry::{Line, Point, intersect_lines_2d};
/// let a = Line::new(Point::new(0.0_f64, 0.0), Vector::new(&[1.0, 1.0]).unwrap());
/// let b = Line::new(Point::new(0.0, 2.0), Vector::new(&[1.0, -1.0]).unwrap());
/// let p = intersect_lines_2d(&a, &b).unwrap().unwrap();
/// assert!((p.x - 1.0).abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12);
/// ```
pub fn intersect_lines_2d<T: Float>(l1: &Line<T>, l2: &Line<T>) -> Result<Option<Point<T>>> {
    l1.require_dimension("line intersection (2D)", 2)?;
    l2.require_dimension("line intersection (2D)", 2)?;

    let (d1, d2) = (&l1.direction, &l2.direction);
    let det = d1[0] * d2[1] - d1[1] * d2[0];
    if det.abs() < T::from_f64(EPSILON) {
        debug!("lines are parallel (det = {det})");
        return Ok(None);
    }

    let dx = l2.point.x - l1.point.x;
    let dy = l2.point.y - l1.point.y;
    let t = (dx * d2[1] - dy * d2[0]) / det;

    Ok(Some(Point::new(l1.point.x + t * d1[0], l1.point.y + t * d1[1])))
}

/// Point where a 3D line crosses a plane, or `None` when the line is
/// parallel to it (including lying inside it).
pub fn intersect_line_plane<T: Float>(
    line: &Line<T>,
    plane: &Plane<T>,
) -> Result<Option<Point<T>>> {
    line.require_dimension("line-plane intersection", 3)?;
    plane.require_dimension("line-plane intersection")?;

    let d = &line.direction;
    let denominator = d.dot(&plane.normal)?;
    if denominator.abs() < T::from_f64(EPSILON) {
        debug!("line is parallel to plane (d . n = {denominator})");
        return Ok(None);
    }

    let w = plane.point.offset_3d(&line.point)?;
    let t = w.dot(&plane.normal)? / denominator;

    Ok(Some(Point::new_3d(
        line.point.x + t * d[0],
        line.point.y + t * d[1],
        line.point.z_or_zero() + t * d[2],
    )))
}
