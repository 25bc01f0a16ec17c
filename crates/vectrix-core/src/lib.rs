//! `vectrix-core`: numeric engine of the Vectrix toolkit.
//!
//! Provides fixed-dimension vectors, dense matrices, a Gaussian-elimination
//! solver that explains its work, and a handful of decompositions.
//!
//! # Design
//!
//! - Value semantics: constructors copy their input, operations return new
//!   values, and no state survives between calls.
//! - Generic over the element type via the [`Scalar`] / [`Float`] traits.
//! - Every failure is a [`LinalgError`] carrying the offending shapes or values.
//! - Text output (see [`format`]) is deterministic so it can be compared
//!   verbatim.

pub mod dtype;
pub mod error;
pub mod format;
pub mod linalg;
pub mod matrix;
pub mod vector;

// Re-export key types at crate root for convenience.
pub use dtype::{Float, Scalar};
pub use error::{LinalgError, Result};
pub use matrix::Matrix;
pub use vector::Vector;

/// Items intended for glob-import: `use vectrix_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::{Float, Scalar};
    pub use crate::error::{LinalgError, Result};
    pub use crate::linalg::{
        EigenPair, LinearSystemSolution, LuDecomposition, PowerIterationOptions, QrDecomposition,
        Solution, Step, gaussian_elimination, power_iteration, rank,
    };
    pub use crate::matrix::Matrix;
    pub use crate::vector::Vector;
}
