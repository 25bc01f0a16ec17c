//! Deterministic fixed-precision text rendering.
//!
//! | Use | Precision | Layout |
//! |-----|-----------|--------|
//! | vector / matrix rows | 3 | `[v1, v2, ...]` |
//! | elimination traces | 3 | each cell right-aligned in 8 columns |
//! | scalar results | 6 | bare number |

use crate::Float;

/// Decimal places used when rendering vectors and matrices.
pub const VALUE_PRECISION: usize = 3;

/// Decimal places used for scalar results (distances, determinants, ...).
pub const SCALAR_PRECISION: usize = 6;

/// Width of one cell in an augmented-matrix trace.
pub const TRACE_CELL_WIDTH: usize = 8;

/// Render `value` with exactly `precision` decimals.
///
/// Exact halfway cases round away from zero (`0.0625` becomes `0.063`).
/// Negative zero is printed as `0.000`, not `-0.000`.
///
/// ```
/// # use vectrix_core::format::fixed;
/// assert_eq!(fixed(2.0_f64 / 3.0, 3), "0.667");
/// assert_eq!(fixed(-0.0_f64, 2), "0.00");
/// assert_eq!(fixed(1.0625_f64, 3), "1.063");
/// ```
pub fn fixed<T: Float>(value: T, precision: usize) -> String {
    let v = canonical_zero(value).to_f64();
    let mut magnitude = v.abs();
    if is_decimal_tie(magnitude, precision) {
        // The next float above the tie rounds up under `{:.N}`.
        magnitude = f64::from_bits(magnitude.to_bits() + 1);
    }
    let text = format!("{magnitude:.precision$}");
    if v < 0.0 { format!("-{text}") } else { text }
}

/// Render a scalar result at [`SCALAR_PRECISION`] decimals.
pub fn format_scalar<T: Float>(value: T) -> String {
    fixed(value, SCALAR_PRECISION)
}

/// Render one row as `[v1, v2, ...]` at [`VALUE_PRECISION`] decimals.
pub fn format_row<T: Float>(row: &[T]) -> String {
    let cells: Vec<String> = row.iter().map(|&v| fixed(v, VALUE_PRECISION)).collect();
    format!("[{}]", cells.join(", "))
}

/// Render a row-major grid (`cols` values per row) as used in elimination
/// traces: each cell right-aligned in [`TRACE_CELL_WIDTH`] columns, cells
/// separated by one space, rows separated by newlines.
pub fn format_augmented<T: Float>(data: &[T], cols: usize) -> String {
    data.chunks(cols.max(1))
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .map(|&v| {
                    format!(
                        "{:>width$}",
                        fixed(v, VALUE_PRECISION),
                        width = TRACE_CELL_WIDTH
                    )
                })
                .collect();
            format!("[{}]", cells.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether `magnitude` lies exactly halfway between two values with
/// `precision` decimals. Finite doubles have terminating decimal expansions,
/// so a tie shows up as `5` followed only by zeros.
fn is_decimal_tie(magnitude: f64, precision: usize) -> bool {
    const EXPANSION: usize = 60;
    if !magnitude.is_finite() || precision >= EXPANSION {
        return false;
    }
    let expanded = format!("{magnitude:.prec$}", prec = EXPANSION);
    let Some((_, frac)) = expanded.split_once('.') else {
        return false;
    };
    let tail = &frac.as_bytes()[precision..];
    tail.first() == Some(&b'5') && tail[1..].iter().all(|&d| d == b'0')
}

#[inline]
fn canonical_zero<T: Float>(value: T) -> T {
    if value == T::zero() { T::zero() } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_rounding() {
        assert_eq!(fixed(1.0_f64, 3), "1.000");
        assert_eq!(fixed(-1.23456_f64, 3), "-1.235");
        assert_eq!(format_scalar(std::f64::consts::PI), "3.141593");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(fixed(0.0625_f64, 3), "0.063");
        assert_eq!(fixed(-0.0625_f64, 3), "-0.063");
        assert_eq!(fixed(0.5625_f64, 3), "0.563");
        assert_eq!(fixed(2.5_f64, 0), "3");
        assert_eq!(fixed(0.125_f32, 2), "0.13");
        // Not a tie in binary: 1.0005 is stored slightly below the midpoint.
        assert_eq!(fixed(1.0005_f64, 3), "1.000");
        assert_eq!(fixed(0.0624_f64, 3), "0.062");
    }

    #[test]
    fn test_small_negative_keeps_sign() {
        assert_eq!(fixed(-0.0001_f64, 3), "-0.000");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(fixed(-0.0_f64, 3), "0.000");
        assert_eq!(format_scalar(-0.0_f32), "0.000000");
    }

    #[test]
    fn test_format_row() {
        assert_eq!(format_row(&[1.0_f64, -2.5, 0.0]), "[1.000, -2.500, 0.000]");
    }

    #[test]
    fn test_format_augmented() {
        let s = format_augmented(&[1.0_f64, 2.0, 3.0, -4.0, 5.5, 6.0], 3);
        assert_eq!(
            s,
            "[   1.000    2.000    3.000]\n[  -4.000    5.500    6.000]"
        );
    }
}
