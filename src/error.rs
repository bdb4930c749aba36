/// Errors from matrix construction, access and arithmetic.
///
/// Every fallible operation either succeeds completely or returns one of
/// these and leaves the receiver as it was.
///
/// ```
/// use densemat::{Matrix, MatrixError};
///
/// assert_eq!(
///     Matrix::<f64>::zeros(0, 3).unwrap_err(),
///     MatrixError::InvalidShape { nrows: 0, ncols: 3 },
/// );
///
/// let singular = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]).unwrap();
/// assert_eq!(singular.inverse().unwrap_err(), MatrixError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Construction or resize requested a zero dimension.
    InvalidShape { nrows: usize, ncols: usize },
    /// Checked element access outside `0..nrows` × `0..ncols`.
    ///
    /// The requested indices are kept signed so negative requests are
    /// reported as given.
    IndexOutOfRange {
        row: i128,
        col: i128,
        nrows: usize,
        ncols: usize,
    },
    /// Operand shapes are incompatible for the requested operation.
    ShapeMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// Determinant, complements or inverse of a non-square matrix.
    NotSquare { nrows: usize, ncols: usize },
    /// Inverse of a matrix whose determinant is within tolerance of zero.
    Singular,
    /// The element buffer could not be allocated.
    Allocation,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::InvalidShape { nrows, ncols } => {
                write!(f, "invalid matrix shape {}x{}: both dimensions must be at least 1", nrows, ncols)
            }
            MatrixError::IndexOutOfRange { row, col, nrows, ncols } => {
                write!(f, "index ({}, {}) out of range for {}x{} matrix", row, col, nrows, ncols)
            }
            MatrixError::ShapeMismatch { lhs, rhs } => {
                write!(f, "dimension mismatch: {}x{} vs {}x{}", lhs.0, lhs.1, rhs.0, rhs.1)
            }
            MatrixError::NotSquare { nrows, ncols } => {
                write!(f, "matrix is not square: {}x{}", nrows, ncols)
            }
            MatrixError::Singular => write!(f, "matrix is singular"),
            MatrixError::Allocation => write!(f, "failed to allocate matrix storage"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display() {
        let e = MatrixError::ShapeMismatch { lhs: (3, 2), rhs: (3, 3) };
        assert_eq!(e.to_string(), "dimension mismatch: 3x2 vs 3x3");

        let e = MatrixError::IndexOutOfRange { row: -1, col: 0, nrows: 2, ncols: 2 };
        assert_eq!(e.to_string(), "index (-1, 0) out of range for 2x2 matrix");

        assert_eq!(MatrixError::Singular.to_string(), "matrix is singular");
    }

    #[cfg(feature = "std")]
    #[test]
    fn boxed_error() {
        fn fails() -> Result<(), Box<dyn std::error::Error>> {
            Err(Box::new(MatrixError::NotSquare { nrows: 2, ncols: 3 }))
        }
        let err = fails().unwrap_err();
        assert_eq!(err.to_string(), "matrix is not square: 2x3");
    }
}
