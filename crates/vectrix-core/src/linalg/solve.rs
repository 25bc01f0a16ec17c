//! Gaussian elimination with partial pivoting for square systems `Ax = b`.
//!
//! Besides the answer, the solver returns an explanation: every row swap,
//! normalization and elimination it performed, each with a snapshot of the
//! augmented matrix `[A | b]` at that moment.
//!
//! A column whose best pivot is below [`EPSILON`] is skipped without
//! eliminating. Classification happens afterwards by scanning the rows
//! bottom-up for an all-zero coefficient row: `0 = 0` means infinitely many
//! solutions, `0 = k` means none.

use core::fmt;

use log::{debug, trace};

use crate::error::{LinalgError, Result};
use crate::format::{self, SCALAR_PRECISION, VALUE_PRECISION};
use crate::{Float, Matrix, Vector};

use super::EPSILON;

/// Classification of a linear system.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution<T: Float> {
    /// Exactly one solution.
    Unique(Vector<T>),
    /// The system is consistent but under-determined.
    Infinite,
    /// The system is inconsistent.
    NoSolution,
}

/// One recorded action of the elimination.
///
/// Row and column indices are 0-based; the rendered text is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<T: Float> {
    /// The augmented matrix before any work.
    Initial { matrix: String },
    /// Rows `first` and `second` were exchanged.
    RowSwap {
        first: usize,
        second: usize,
        matrix: String,
    },
    /// No usable pivot in `column`; the column was skipped.
    NullPivot { column: usize },
    /// Row `row` was divided by `pivot`.
    Normalize {
        row: usize,
        pivot: T,
        matrix: String,
    },
    /// `R[target] -= factor * R[source]`.
    Eliminate {
        target: usize,
        source: usize,
        factor: T,
        matrix: String,
    },
    /// A zero coefficient row with a nonzero constant.
    Inconsistent { constant: T },
    /// A zero coefficient row with a zero constant.
    InfiniteSolutions,
    /// Back substitution produced `x[index] = value`.
    Unknown { index: usize, value: T },
}

impl<T: Float> fmt::Display for Step<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial { matrix } => write!(f, "Initial augmented matrix:\n{matrix}"),
            Self::RowSwap {
                first,
                second,
                matrix,
            } => write!(f, "Swap rows {} and {}:\n{matrix}", first + 1, second + 1),
            Self::NullPivot { column } => {
                write!(f, "Null pivot at position [{0}, {0}]", column + 1)
            }
            Self::Normalize { row, pivot, matrix } => write!(
                f,
                "Normalize row {} (divide by {}):\n{matrix}",
                row + 1,
                format::fixed(*pivot, VALUE_PRECISION)
            ),
            Self::Eliminate {
                target,
                source,
                factor,
                matrix,
            } => write!(
                f,
                "Eliminate: R{0} = R{0} - {1} * R{2}:\n{matrix}",
                target + 1,
                format::fixed(*factor, VALUE_PRECISION),
                source + 1
            ),
            Self::Inconsistent { constant } => write!(
                f,
                "Inconsistent system: 0 = {}",
                format::fixed(*constant, VALUE_PRECISION)
            ),
            Self::InfiniteSolutions => f.write_str("System has infinitely many solutions"),
            Self::Unknown { index, value } => write!(
                f,
                "x{} = {}",
                index + 1,
                format::fixed(*value, SCALAR_PRECISION)
            ),
        }
    }
}

/// A classified solution together with the elimination trace.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystemSolution<T: Float> {
    solution: Solution<T>,
    steps: Vec<Step<T>>,
}

impl<T: Float> LinearSystemSolution<T> {
    pub fn solution(&self) -> &Solution<T> {
        &self.solution
    }

    /// The unknowns, if the solution is unique.
    pub fn values(&self) -> Option<&[T]> {
        match &self.solution {
            Solution::Unique(x) => Some(x.as_slice()),
            _ => None,
        }
    }

    pub fn is_unique(&self) -> bool {
        matches!(self.solution, Solution::Unique(_))
    }

    pub fn has_infinite_solutions(&self) -> bool {
        matches!(self.solution, Solution::Infinite)
    }

    pub fn has_no_solution(&self) -> bool {
        matches!(self.solution, Solution::NoSolution)
    }

    /// The recorded steps in execution order.
    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    /// The steps rendered as text.
    pub fn step_texts(&self) -> Vec<String> {
        self.steps.iter().map(ToString::to_string).collect()
    }

    pub fn into_parts(self) -> (Solution<T>, Vec<Step<T>>) {
        (self.solution, self.steps)
    }
}

/// Working state: the `n x (n + 1)` augmented matrix plus the trace.
struct Elimination<T: Float> {
    aug: Vec<T>,
    n: usize,
    steps: Vec<Step<T>>,
}

impl<T: Float> Elimination<T> {
    fn width(&self) -> usize {
        self.n + 1
    }

    fn at(&self, r: usize, c: usize) -> T {
        self.aug[r * self.width() + c]
    }

    fn snapshot(&self) -> String {
        format::format_augmented(&self.aug, self.width())
    }

    fn record(&mut self, step: Step<T>) {
        trace!("{step}");
        self.steps.push(step);
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        let w = self.width();
        for j in 0..w {
            self.aug.swap(a * w + j, b * w + j);
        }
    }

    fn forward(&mut self) {
        let n = self.n;
        let w = self.width();
        let tol = T::from_f64(EPSILON);

        for i in 0..n {
            let mut max_row = i;
            for k in (i + 1)..n {
                if self.at(k, i).abs() > self.at(max_row, i).abs() {
                    max_row = k;
                }
            }
            if max_row != i {
                self.swap_rows(i, max_row);
                let matrix = self.snapshot();
                self.record(Step::RowSwap {
                    first: i,
                    second: max_row,
                    matrix,
                });
            }

            let pivot = self.at(i, i);
            if pivot.abs() < tol {
                self.record(Step::NullPivot { column: i });
                continue;
            }

            for j in 0..w {
                self.aug[i * w + j] /= pivot;
            }
            let matrix = self.snapshot();
            self.record(Step::Normalize {
                row: i,
                pivot,
                matrix,
            });

            for k in (i + 1)..n {
                let factor = self.at(k, i);
                if factor.abs() > tol {
                    for j in 0..w {
                        let aij = self.aug[i * w + j];
                        self.aug[k * w + j] -= factor * aij;
                    }
                    let matrix = self.snapshot();
                    self.record(Step::Eliminate {
                        target: k,
                        source: i,
                        factor,
                        matrix,
                    });
                }
            }
        }
    }

    /// Find the lowest all-zero coefficient row, if any.
    fn classify_degenerate(&mut self) -> Option<Solution<T>> {
        let n = self.n;
        let tol = T::from_f64(EPSILON);
        for i in (0..n).rev() {
            if (0..n).all(|j| self.at(i, j).abs() <= tol) {
                let constant = self.at(i, n);
                return Some(if constant.abs() > tol {
                    self.record(Step::Inconsistent { constant });
                    Solution::NoSolution
                } else {
                    self.record(Step::InfiniteSolutions);
                    Solution::Infinite
                });
            }
        }
        None
    }

    fn back_substitute(&mut self) -> Vec<T> {
        let n = self.n;
        let mut x = vec![T::zero(); n];
        for i in (0..n).rev() {
            let mut value = self.at(i, n);
            for j in (i + 1)..n {
                value -= self.at(i, j) * x[j];
            }
            x[i] = value;
            self.record(Step::Unknown { index: i, value });
        }
        x
    }
}

/// Solve the square system `coefficients * x = constants`.
///
/// ```
/// # use vectrix_core::{Matrix, Vector};
/// # use vectrix_core::linalg::gaussian_elimination;
/// let a = Matrix::from_rows(&[vec![2.0_f64, 1.0], vec![1.0, 4.0]]).unwrap();
/// let b = Vector::new(&[5.0_f64, 6.0]).unwrap();
/// let sol = gaussian_elimination(&a, &b).unwrap();
/// let x = sol.values().unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// assert!((x[1] - 1.0).abs() < 1e-12);
/// ```
pub fn gaussian_elimination<T: Float>(
    coefficients: &Matrix<T>,
    constants: &Vector<T>,
) -> Result<LinearSystemSolution<T>> {
    coefficients.require_square("linear system")?;
    let n = coefficients.rows();
    if constants.dimension() != n {
        return Err(LinalgError::DimensionMismatch {
            op: "linear system",
            left: vec![n, n],
            right: vec![constants.dimension()],
        });
    }

    let mut aug = Vec::with_capacity(n * (n + 1));
    for (row, &b) in coefficients.as_slice().chunks(n).zip(constants.as_slice()) {
        aug.extend_from_slice(row);
        aug.push(b);
    }

    let mut state = Elimination {
        aug,
        n,
        steps: Vec::new(),
    };
    let matrix = state.snapshot();
    state.record(Step::Initial { matrix });

    state.forward();

    let solution = match state.classify_degenerate() {
        Some(degenerate) => degenerate,
        None => Solution::Unique(Vector::from_vec(state.back_substitute())?),
    };
    debug!(
        "solved {n}x{n} system in {} steps: {}",
        state.steps.len(),
        match &solution {
            Solution::Unique(_) => "unique solution",
            Solution::Infinite => "infinitely many solutions",
            Solution::NoSolution => "no solution",
        }
    );

    Ok(LinearSystemSolution {
        solution,
        steps: state.steps,
    })
}
