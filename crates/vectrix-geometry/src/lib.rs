//! `vectrix-geometry`: points, lines and planes over `vectrix-core` vectors.
//!
//! Everything here is expressed through the public [`Vector`] contract
//! (subtract, dot, cross, magnitude, normalize, project) so the numeric
//! behaviour and error reporting match the core crate.
//!
//! | Module | Content |
//! |--------|---------|
//! | [`primitives`] | [`Point`], [`Line`], [`Plane`] |
//! | [`metric`] | distances, angles, areas, volumes, collinearity |
//! | [`intersect`] | line-line (2D) and line-plane intersection |
//! | [`construct`] | circumcenter, centroid, reflection, rotation, containment |
//!
//! [`Vector`]: vectrix_core::Vector

pub mod construct;
pub mod intersect;
pub mod metric;
pub mod primitives;

pub use construct::{
    centroid, circumcenter, is_point_in_triangle_2d, reflect_point_across_line_2d, rotate_point_2d,
};
pub use intersect::{intersect_line_plane, intersect_lines_2d};
pub use metric::{
    angle_between_vectors, are_collinear, distance_point_to_line_2d, distance_point_to_line_3d,
    distance_point_to_plane, distance_points, tetrahedron_volume, triangle_area,
};
pub use primitives::{Line, Plane, Point};
