use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::MatrixError;
use crate::traits::{FloatScalar, Scalar, SignedScalar};

use super::Matrix;

/// Operator traits cannot return a `Result`; surface the error as a panic
/// carrying the same message the fallible method would return.
#[track_caller]
fn or_panic<R>(result: Result<R, MatrixError>) -> R {
    match result {
        Ok(r) => r,
        Err(e) => panic!("{}", e),
    }
}

// ── In-place primitives ─────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    fn check_same_shape(&self, rhs: &Self) -> Result<(), MatrixError> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::ShapeMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(())
    }

    /// Element-wise `self += rhs`.
    ///
    /// Fails with [`MatrixError::ShapeMismatch`] unless both shapes are
    /// identical, in which case `self` is left untouched.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut a = Matrix::from_rows(1, 2, &[1.0_f64, 2.0]).unwrap();
    /// let b = Matrix::from_rows(1, 2, &[10.0, 20.0]).unwrap();
    /// a.sum_matrix(&b).unwrap();
    /// assert_eq!(a[(0, 1)], 22.0);
    /// ```
    pub fn sum_matrix(&mut self, rhs: &Self) -> Result<(), MatrixError> {
        self.check_same_shape(rhs)?;
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
        Ok(())
    }

    /// Element-wise `self -= rhs`. Same shape rule as [`Matrix::sum_matrix`].
    pub fn sub_matrix(&mut self, rhs: &Self) -> Result<(), MatrixError> {
        self.check_same_shape(rhs)?;
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
        Ok(())
    }

    /// Multiply every element by `k`.
    pub fn mul_number(&mut self, k: T) {
        for x in self.data.iter_mut() {
            *x = *x * k;
        }
    }

    /// Matrix product `self = self * rhs`: (M×N) * (N×P) → (M×P).
    ///
    /// Fails with [`MatrixError::ShapeMismatch`] unless
    /// `self.ncols() == rhs.nrows()`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut a = Matrix::from_rows(2, 3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let b = Matrix::from_rows(3, 1, &[1.0, 0.0, 1.0]).unwrap();
    /// a.mul_matrix(&b).unwrap();
    /// assert_eq!(a.shape(), (2, 1));
    /// assert_eq!(a[(1, 0)], 10.0);
    /// ```
    pub fn mul_matrix(&mut self, rhs: &Self) -> Result<(), MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::ShapeMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut product = Self::zeros(m, p)?;
        for i in 0..m {
            for j in 0..p {
                let mut acc = T::zero();
                for k in 0..n {
                    acc = acc + self.data[i * n + k] * rhs.data[k * p + j];
                }
                product.data[i * p + j] = acc;
            }
        }
        *self = product;
        Ok(())
    }

    /// `self + rhs` as a new matrix.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        let mut result = self.clone();
        result.sum_matrix(rhs)?;
        Ok(result)
    }

    /// `self - rhs` as a new matrix.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        let mut result = self.clone();
        result.sub_matrix(rhs)?;
        Ok(result)
    }

    /// `self * rhs` as a new matrix.
    ///
    /// ```
    /// use densemat::{Matrix, MatrixError};
    /// let a = Matrix::<f64>::zeros(2, 3).unwrap();
    /// let b = Matrix::<f64>::zeros(2, 2).unwrap();
    /// assert_eq!(
    ///     a.checked_mul(&b).unwrap_err(),
    ///     MatrixError::ShapeMismatch { lhs: (2, 3), rhs: (2, 2) },
    /// );
    /// ```
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        let mut result = self.clone();
        result.mul_matrix(rhs)?;
        Ok(result)
    }

    /// Transpose: (M×N) → (N×M).
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from_rows(2, 3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(2, 0)], 3.0);
    /// ```
    pub fn transpose(&self) -> Self {
        let m = self.nrows;
        let n = self.ncols;
        let mut data = alloc::vec::Vec::with_capacity(m * n);
        for j in 0..n {
            for i in 0..m {
                data.push(self.data[i * n + j]);
            }
        }
        Matrix {
            data,
            nrows: n,
            ncols: m,
        }
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Shape-exact, tolerance-based comparison.
    ///
    /// True when both shapes match and every pair of elements differs by at
    /// most [`FloatScalar::eq_tolerance`] (`1e-7`). Never fails.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from_rows(1, 2, &[1.1_f64, 1.00000001]).unwrap();
    /// let b = Matrix::from_rows(1, 2, &[1.1_f64, 1.00000002]).unwrap();
    /// assert!(a.eq_matrix(&b));
    /// assert!(!a.eq_matrix(&Matrix::zeros(2, 1).unwrap()));
    /// ```
    pub fn eq_matrix(&self, other: &Self) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        let tol = T::eq_tolerance();
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| (a - b).abs() <= tol)
    }
}

impl<T: FloatScalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_matrix(other)
    }
}

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar> Add for Matrix<T> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        or_panic(self.sum_matrix(&rhs));
        self
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn add(mut self, rhs: &Matrix<T>) -> Matrix<T> {
        or_panic(self.sum_matrix(rhs));
        self
    }
}

impl<T: Scalar> Add<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        or_panic(self.checked_add(&rhs))
    }
}

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        or_panic(self.checked_add(rhs))
    }
}

impl<T: Scalar> AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Self) {
        or_panic(self.sum_matrix(&rhs));
    }
}

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        or_panic(self.sum_matrix(rhs));
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        or_panic(self.sub_matrix(&rhs));
        self
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(mut self, rhs: &Matrix<T>) -> Matrix<T> {
        or_panic(self.sub_matrix(rhs));
        self
    }
}

impl<T: Scalar> Sub<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        or_panic(self.checked_sub(&rhs))
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        or_panic(self.checked_sub(rhs))
    }
}

impl<T: Scalar> SubAssign for Matrix<T> {
    fn sub_assign(&mut self, rhs: Self) {
        or_panic(self.sub_matrix(&rhs));
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        or_panic(self.sub_matrix(rhs));
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: SignedScalar> Neg for Matrix<T> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for x in self.data.iter_mut() {
            *x = -*x;
        }
        self
    }
}

impl<T: SignedScalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        -self.clone()
    }
}

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ──────────────────

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        or_panic(self.mul_matrix(&rhs));
        self
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(mut self, rhs: &Matrix<T>) -> Matrix<T> {
        or_panic(self.mul_matrix(rhs));
        self
    }
}

impl<T: Scalar> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        or_panic(self.checked_mul(&rhs))
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        or_panic(self.checked_mul(rhs))
    }
}

impl<T: Scalar> MulAssign for Matrix<T> {
    fn mul_assign(&mut self, rhs: Self) {
        or_panic(self.mul_matrix(&rhs));
    }
}

impl<T: Scalar> MulAssign<&Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        or_panic(self.mul_matrix(rhs));
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self.mul_number(rhs);
        self
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.clone() * rhs
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.mul_number(rhs);
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64);
