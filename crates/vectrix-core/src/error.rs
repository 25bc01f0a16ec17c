use thiserror::Error;

/// All errors returned by `vectrix-core`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Operand shapes do not fit together for `op`.
    #[error("dimension mismatch in {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: Vec<usize>,
        right: Vec<usize>,
    },

    /// The input is degenerate for the operation (zero vector, singular
    /// matrix, vanishing pivot). `value` is the offending magnitude.
    #[error("degenerate input: {reason} (value = {value:e})")]
    DegenerateInput { reason: &'static str, value: f64 },

    /// The operation is not defined for operands of these dimensions.
    #[error("{op} is not supported for dimensions {dims:?}")]
    UnsupportedOperation { op: &'static str, dims: Vec<usize> },

    /// An iterative method hit its iteration cap.
    #[error("no convergence after {iterations} iterations (last change = {delta:e})")]
    NonConvergence { iterations: usize, delta: f64 },

    /// Construction input does not describe a valid vector or matrix.
    #[error("invalid shape {shape:?}: {reason}")]
    InvalidShape {
        shape: Vec<usize>,
        reason: &'static str,
    },

    /// An element index is out of bounds.
    #[error("index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },
}

impl LinalgError {
    pub(crate) fn mismatch(op: &'static str, left: &[usize], right: &[usize]) -> Self {
        Self::DimensionMismatch {
            op,
            left: left.to_vec(),
            right: right.to_vec(),
        }
    }

    pub(crate) fn degenerate(reason: &'static str, value: f64) -> Self {
        Self::DegenerateInput { reason, value }
    }
}

/// Convenience alias used throughout `vectrix-core`.
pub type Result<T> = std::result::Result<T, LinalgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let e = LinalgError::mismatch("matrix multiply", &[2, 3], &[2, 3]);
        assert_eq!(
            e.to_string(),
            "dimension mismatch in matrix multiply: [2, 3] vs [2, 3]"
        );

        let e = LinalgError::UnsupportedOperation {
            op: "cross product",
            dims: vec![2, 3],
        };
        assert_eq!(
            e.to_string(),
            "cross product is not supported for dimensions [2, 3]"
        );

        let e = LinalgError::degenerate("cannot normalize a zero vector", 0.0);
        assert!(
            e.to_string()
                .starts_with("degenerate input: cannot normalize")
        );
    }
}
