//! Derived points and containment tests for triangles.

use log::debug;
use vectrix_core::linalg::EPSILON;
use vectrix_core::{Float, LinalgError, Result, Vector};

use crate::primitives::{Line, Point};

/// Whether `point` lies inside or on the boundary of triangle `p1 p2 p3`,
/// by barycentric coordinates. Degenerate triangles contain nothing.
pub fn is_point_in_triangle_2d<T: Float>(
    point: &Point<T>,
    p1: &Point<T>,
    p2: &Point<T>,
    p3: &Point<T>,
) -> bool {
    let denom = (p2.y - p3.y) * (p1.x - p3.x) + (p3.x - p2.x) * (p1.y - p3.y);
    if denom.abs() < T::from_f64(EPSILON) {
        return false;
    }

    let a = ((p2.y - p3.y) * (point.x - p3.x) + (p3.x - p2.x) * (point.y - p3.y)) / denom;
    let b = ((p3.y - p1.y) * (point.x - p3.x) + (p1.x - p3.x) * (point.y - p3.y)) / denom;
    let c = T::one() - a - b;

    a >= T::zero() && b >= T::zero() && c >= T::zero()
}

/// Center of the circle through three points in the plane.
///
/// Fails with [`LinalgError::DegenerateInput`] when the points are collinear.
///
/// ```
/// # use vectrix_geometry::{Point, circumcenter};
/// let c = circumcenter(
///     &Point::new(0.0_f64, 0.0),
///     &Point::new(4.0, 0.0),
///     &Point::new(0.0, 2.0),
/// ).unwrap();
/// assert!((c.x - 2.0).abs() < 1e-12 && (c.y - 1.0).abs() < 1e-12);
/// ```
pub fn circumcenter<T: Float>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Result<Point<T>> {
    let (ax, ay) = (p1.x, p1.y);
    let (bx, by) = (p2.x, p2.y);
    let (cx, cy) = (p3.x, p3.y);

    let two = T::from_f64(2.0);
    let d = two * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));
    if d.abs() < T::from_f64(EPSILON) {
        debug!("circumcenter of collinear points requested (d = {d})");
        return Err(LinalgError::DegenerateInput {
            reason: "points are collinear, no circumcenter exists",
            value: d.to_f64(),
        });
    }

    let a2 = ax * ax + ay * ay;
    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;
    let ux = (a2 * (by - cy) + b2 * (cy - ay) + c2 * (ay - by)) / d;
    let uy = (a2 * (cx - bx) + b2 * (ax - cx) + c2 * (bx - ax)) / d;

    Ok(Point::new(ux, uy))
}

/// Average of the three vertices. The result has a `z` only if `p1` does.
pub fn centroid<T: Float>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Point<T> {
    let three = T::from_f64(3.0);
    Point {
        x: (p1.x + p2.x + p3.x) / three,
        y: (p1.y + p2.y + p3.y) / three,
        z: p1
            .z
            .map(|_| (p1.z_or_zero() + p2.z_or_zero() + p3.z_or_zero()) / three),
    }
}

/// Mirror image of `point` across a 2D line.
pub fn reflect_point_across_line_2d<T: Float>(
    point: &Point<T>,
    line: &Line<T>,
) -> Result<Point<T>> {
    line.require_dimension("reflection (2D)", 2)?;
    let d = &line.direction;
    let normal = Vector::new(&[-d[1], d[0]])?.normalize()?;

    let signed = point.offset_2d(&line.point)?.dot(&normal)?;
    let shift = normal.multiply_scalar(T::from_f64(-2.0) * signed);

    Ok(Point::new(point.x + shift[0], point.y + shift[1]))
}

/// Rotate `point` about the origin by `angle` radians, counter-clockwise.
pub fn rotate_point_2d<T: Float>(point: &Point<T>, angle: T) -> Point<T> {
    let (sin, cos) = (angle.sin(), angle.cos());
    Point::new(
        point.x * cos - point.y * sin,
        point.x * sin + point.y * cos,
    )
}
