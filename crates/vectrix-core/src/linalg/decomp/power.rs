//! Dominant eigenpair by power iteration.
//!
//! Starting from the all-ones vector, repeatedly form `y = A x`, take the
//! entry of `y` with the largest magnitude as the eigenvalue estimate and
//! scale `y` by it. Iteration stops once two consecutive estimates differ by
//! less than the tolerance.

use log::{debug, warn};

use crate::error::{LinalgError, Result};
use crate::linalg::EPSILON;
use crate::{Float, Matrix, Vector};

/// Default iteration cap.
pub const MAX_ITERATIONS: usize = 1000;

/// Tuning knobs for [`power_iteration_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerIterationOptions {
    /// Give up after this many matrix-vector products.
    pub max_iterations: usize,
    /// Converged once consecutive eigenvalue estimates differ by less.
    pub tolerance: f64,
}

impl Default for PowerIterationOptions {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            tolerance: EPSILON,
        }
    }
}

impl PowerIterationOptions {
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Dominant eigenvalue and its eigenvector.
///
/// The eigenvector is scaled so that its largest-magnitude entry is `1`.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenPair<T: Float> {
    pub eigenvalue: T,
    pub eigenvector: Vector<T>,
    /// Number of iterations performed.
    pub iterations: usize,
}

/// Power iteration with the default options (1000 iterations, `1e-10`).
///
/// ```
/// # use vectrix_core::Matrix;
/// # use vectrix_core::linalg::power_iteration;
/// let a = Matrix::from_rows(&[vec![2.0_f64, 1.0], vec![1.0, 2.0]]).unwrap();
/// let pair = power_iteration(&a).unwrap();
/// assert!((pair.eigenvalue - 3.0).abs() < 1e-10);
/// ```
pub fn power_iteration<T: Float>(a: &Matrix<T>) -> Result<EigenPair<T>> {
    power_iteration_with(a, PowerIterationOptions::default())
}

/// Power iteration with explicit options.
pub fn power_iteration_with<T: Float>(
    a: &Matrix<T>,
    options: PowerIterationOptions,
) -> Result<EigenPair<T>> {
    a.require_square("power iteration")?;
    let n = a.rows();
    let tol = T::from_f64(options.tolerance);

    let mut x = Vector::from_vec(vec![T::one(); n])?;
    let mut eigenvalue = T::zero();
    let mut delta = T::zero();

    for iter in 0..options.max_iterations {
        let y = a.multiply_vector(&x)?;

        let estimate = y
            .iter()
            .copied()
            .reduce(|best, v| if v.abs() > best.abs() { v } else { best })
            .unwrap_or_else(T::zero);
        if estimate == T::zero() {
            return Err(LinalgError::degenerate(
                "power iteration collapsed to the zero vector",
                0.0,
            ));
        }

        let y = Vector::from_vec(y.iter().map(|&v| v / estimate).collect())?;
        delta = (estimate - eigenvalue).abs();
        if delta < tol {
            debug!(
                "power iteration converged after {} iterations: lambda = {estimate}",
                iter + 1
            );
            return Ok(EigenPair {
                eigenvalue: estimate,
                eigenvector: y,
                iterations: iter + 1,
            });
        }

        eigenvalue = estimate;
        x = y;
    }

    warn!(
        "power iteration did not converge in {} iterations (last change {delta})",
        options.max_iterations
    );
    Err(LinalgError::NonConvergence {
        iterations: options.max_iterations,
        delta: delta.to_f64(),
    })
}
