use core::fmt;

/// Error returned by every fallible operation in the crate.
///
/// Variants carry the offending dimensions so the message can say exactly
/// what was asked for. Errors are raised at the point of the violated
/// precondition; the receiver is left unmodified on failure.
///
/// # Example
///
/// ```
/// use matvec::{Matrix, MathError};
///
/// let m = Matrix::zeros(2, 3, 0.0_f64).unwrap();
/// assert_eq!(m.determinant(), Err(MathError::NotSquare { nrows: 2, ncols: 3 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// A requested dimension or length of zero.
    ZeroSize,
    /// Element-wise matrix operation on unequal shapes.
    ShapeMismatch {
        /// Left operand `(rows, cols)`.
        left: (usize, usize),
        /// Right operand `(rows, cols)`.
        right: (usize, usize),
    },
    /// Matrix product where `left.ncols != right.nrows`.
    InnerShapeMismatch {
        /// Left operand `(rows, cols)`.
        left: (usize, usize),
        /// Right operand `(rows, cols)`.
        right: (usize, usize),
    },
    /// Vector dot product on unequal lengths.
    LengthMismatch {
        /// Left operand length.
        left: usize,
        /// Right operand length.
        right: usize,
    },
    /// A row of a nested literal deviating from the first row's length.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },
    /// Checked vector access past the end.
    IndexOutOfRange {
        /// Requested position.
        pos: usize,
        /// Vector length.
        len: usize,
    },
    /// Matrix element access or minor indices past either extent.
    PositionOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of rows.
        nrows: usize,
        /// Number of columns.
        ncols: usize,
    },
    /// Determinant, cofactors, or inverse of a non-square matrix.
    NotSquare {
        /// Number of rows.
        nrows: usize,
        /// Number of columns.
        ncols: usize,
    },
    /// Minor of a single-row or single-column matrix.
    NoMinor {
        /// Number of rows.
        nrows: usize,
        /// Number of columns.
        ncols: usize,
    },
    /// Inverse of a matrix whose determinant is exactly zero.
    Singular,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MathError::ZeroSize => write!(f, "size can not be 0"),
            MathError::ShapeMismatch { left, right } => write!(
                f,
                "shape mismatch: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MathError::InnerShapeMismatch { left, right } => write!(
                f,
                "inner shape mismatch: {}x{} * {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MathError::LengthMismatch { left, right } => {
                write!(f, "length mismatch: {} vs {}", left, right)
            }
            MathError::RaggedRow { row, expected, got } => write!(
                f,
                "row {} has {} elements, expected {}",
                row, got, expected
            ),
            MathError::IndexOutOfRange { pos, len } => {
                write!(f, "index {} out of range for length {}", pos, len)
            }
            MathError::PositionOutOfRange {
                row,
                col,
                nrows,
                ncols,
            } => write!(
                f,
                "position ({}, {}) out of range for {}x{} matrix",
                row, col, nrows, ncols
            ),
            MathError::NotSquare { nrows, ncols } => {
                write!(f, "{}x{} matrix is not square", nrows, ncols)
            }
            MathError::NoMinor { nrows, ncols } => write!(
                f,
                "{}x{} matrix has no minor matrix",
                nrows, ncols
            ),
            MathError::Singular => write!(f, "matrix with determinant 0 has no inverse"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MathError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn display_messages() {
        assert_eq!(format!("{}", MathError::ZeroSize), "size can not be 0");
        assert_eq!(
            format!(
                "{}",
                MathError::ShapeMismatch {
                    left: (2, 3),
                    right: (3, 2)
                }
            ),
            "shape mismatch: 2x3 vs 3x2"
        );
        assert_eq!(
            format!("{}", MathError::IndexOutOfRange { pos: 5, len: 3 }),
            "index 5 out of range for length 3"
        );
        assert_eq!(
            format!(
                "{}",
                MathError::NotSquare { nrows: 2, ncols: 3 }
            ),
            "2x3 matrix is not square"
        );
    }
}
