//! Linear algebra algorithms over [`Matrix`](crate::Matrix) and
//! [`Vector`](crate::Vector).
//!
//! Every routine copies its input before working on it and returns fresh
//! values; nothing is cached between calls.
//!
//! - [`gaussian_elimination`]: classified solution of `Ax = b` with a step trace
//! - Decompositions: [`LuDecomposition`], [`QrDecomposition`]
//! - Iterative: [`power_iteration`]
//! - [`rank`]

pub mod decomp;
pub mod solve;

pub use decomp::{
    EigenPair, LuDecomposition, PowerIterationOptions, QrDecomposition, power_iteration,
    power_iteration_with, rank,
};
pub use solve::{LinearSystemSolution, Solution, Step, gaussian_elimination};

/// Magnitude below which a value is treated as zero.
pub const EPSILON: f64 = 1e-10;
