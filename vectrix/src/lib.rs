//! # Vectrix
//!
//! Small, dependable linear algebra: vectors, dense matrices, a Gaussian
//! elimination solver that records every step it takes, LU and QR
//! decompositions, power iteration and rank. Geometry on points, lines and
//! planes sits on top.
//!
//! One `use vectrix::prelude::*;` brings in everything commonly needed.
//!
//! ```
//! use vectrix::prelude::*;
//!
//! let a = Matrix::from_rows(&[vec![2.0_f64, 1.0], vec![1.0, 3.0]]).unwrap();
//! let b = Vector::new(&[3.0, 5.0]).unwrap();
//! let result = gaussian_elimination(&a, &b).unwrap();
//! assert!(result.is_unique());
//! for step in result.step_texts() {
//!     println!("{step}");
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `geometry` *(default)* | Points, lines, planes ([`geometry`]) |
//! | `serde` | `Serialize`/`Deserialize` for vectors, matrices and options |

pub use vectrix_core as core;

#[cfg(feature = "geometry")]
pub use vectrix_geometry as geometry;

/// Glob-import convenience: `use vectrix::prelude::*;`
pub mod prelude {
    pub use vectrix_core::prelude::*;

    #[cfg(feature = "geometry")]
    pub use vectrix_geometry::{Line, Plane, Point};
}
