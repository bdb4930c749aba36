use crate::error::MatrixError;
use crate::traits::{FloatScalar, Scalar, SignedScalar};

use super::minor::delete_row_col;
use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Determinant, complements and inverse need a non-empty square matrix.
    fn require_square(&self) -> Result<(), MatrixError> {
        if self.is_empty() || !self.is_square() {
            return Err(MatrixError::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(())
    }

    /// Sum of diagonal elements.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.trace(), 5.0);
    /// ```
    pub fn trace(&self) -> T {
        let n = self.nrows.min(self.ncols);
        let mut sum = T::zero();
        for i in 0..n {
            sum = sum + self.data[i * self.ncols + i];
        }
        sum
    }
}

impl<T: SignedScalar> Matrix<T> {
    /// Determinant by cofactor expansion along the first row.
    ///
    /// Fails with [`MatrixError::NotSquare`] for non-square (or empty)
    /// matrices. Elements must be signed (see [`SignedScalar`]). The expansion recurses without memoization, so the cost
    /// grows factorially with the dimension; it is meant for small matrices.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.1_f64, 3.5, -2.0, 4.0]).unwrap();
    /// assert!((m.det().unwrap() - 11.4).abs() < 1e-12);
    ///
    /// // Works for integer elements too.
    /// let k = Matrix::from_rows(3, 3, &[2, 0, 1, 1, 3, 2, 1, 1, 2]).unwrap();
    /// assert_eq!(k.det().unwrap(), 6);
    /// ```
    pub fn det(&self) -> Result<T, MatrixError> {
        self.require_square()?;
        self.cofactor_det()
    }

    /// Recursive expansion on a matrix already known to be square and
    /// non-empty. Only the minor buffers can fail.
    fn cofactor_det(&self) -> Result<T, MatrixError> {
        let n = self.nrows;
        let a = &self.data;
        match n {
            1 => Ok(a[0]),
            2 => Ok(a[0] * a[3] - a[1] * a[2]),
            _ => {
                let mut minor = Self::zeros(n - 1, n - 1)?;
                let mut det = T::zero();
                let mut sign = T::one();
                for i in 0..n {
                    delete_row_col(self, &mut minor, 0, i);
                    det = det + sign * a[i] * minor.cofactor_det()?;
                    sign = -sign;
                }
                Ok(det)
            }
        }
    }

    /// Matrix of cofactors: `c[i][j] = (-1)^(i+j) * det(minor(i, j))`.
    ///
    /// For a `1 x 1` matrix the single element is passed through unchanged.
    /// Fails with [`MatrixError::NotSquare`] for non-square (or empty)
    /// matrices.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(3, 3, &[1.0_f64, 2.0, 3.0, 0.0, 4.0, 2.0, 5.0, 2.0, 1.0]).unwrap();
    /// let c = m.calc_complements().unwrap();
    /// let expected = Matrix::from_rows(3, 3, &[0.0, 10.0, -20.0, 4.0, -14.0, 8.0, -8.0, -2.0, 4.0]).unwrap();
    /// assert_eq!(c, expected);
    /// ```
    pub fn calc_complements(&self) -> Result<Self, MatrixError> {
        self.require_square()?;
        let n = self.nrows;
        if n == 1 {
            return Ok(self.clone());
        }
        let mut result = Self::zeros(n, n)?;
        let mut minor = Self::zeros(n - 1, n - 1)?;
        for i in 0..n {
            for j in 0..n {
                delete_row_col(self, &mut minor, i, j);
                let d = minor.cofactor_det()?;
                result.data[i * n + j] = if (i + j) % 2 == 0 { d } else { -d };
            }
        }
        Ok(result)
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Inverse via the adjugate: `transpose(calc_complements()) / det`.
    ///
    /// Fails with [`MatrixError::NotSquare`] for non-square matrices and with
    /// [`MatrixError::Singular`] when `|det| <= 1e-7`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(3, 3, &[2.0_f64, 5.0, 7.0, 6.0, 3.0, 4.0, 5.0, -2.0, -3.0]).unwrap();
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(&m * &inv, Matrix::eye(3).unwrap());
    /// ```
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let det = self.det()?;
        if det.abs() <= T::eq_tolerance() {
            log::debug!(
                "rejecting inverse of {}x{} matrix with determinant {:?}",
                self.nrows, self.ncols, det
            );
            return Err(MatrixError::Singular);
        }
        if self.nrows == 1 {
            // The 1x1 complements pass-through would otherwise yield [[1]].
            return Self::from_rows(1, 1, &[T::one() / det]);
        }
        let mut inv = self.calc_complements()?.transpose();
        inv.mul_number(T::one() / det);
        Ok(inv)
    }
}
