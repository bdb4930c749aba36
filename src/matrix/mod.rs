pub mod aliases;
mod minor;
mod ops;
mod square;
mod util;

pub use aliases::*;

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::MatrixError;
use crate::traits::{MatrixIndex, MatrixMut, MatrixRef, Scalar};

/// Dynamically-sized heap-allocated matrix.
///
/// Row-major `Vec<T>` storage with exactly `nrows * ncols` elements.
/// The only shape with a zero dimension is the empty `(0, 0)` matrix
/// produced by [`Matrix::new`], [`Default`] and [`Matrix::take`].
///
/// Equality is tolerance-based (see [`Matrix::eq_matrix`]), so `Matrix`
/// implements `PartialEq` but not `Eq`.
///
/// # Examples
///
/// ```
/// use densemat::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b = Matrix::<f64>::eye(3).unwrap();
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug)]
pub struct Matrix<T = f64> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

/// Reserve exactly `len` elements, reporting failure instead of aborting.
///
/// Nothing is handed out until the reservation succeeded, so a failed
/// construction never leaves a partially built buffer behind.
fn try_buffer<T>(len: usize) -> Result<Vec<T>, MatrixError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| MatrixError::Allocation)?;
    Ok(data)
}

/// Validate a requested shape and return the element count.
fn checked_len(nrows: usize, ncols: usize) -> Result<usize, MatrixError> {
    if nrows < 1 || ncols < 1 {
        return Err(MatrixError::InvalidShape { nrows, ncols });
    }
    nrows.checked_mul(ncols).ok_or(MatrixError::Allocation)
}

// ── Constructors ────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Create the empty `0 x 0` matrix. Does not allocate.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m: Matrix = Matrix::new();
    /// assert_eq!(m.shape(), (0, 0));
    /// assert!(m.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            nrows: 0,
            ncols: 0,
        }
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 }).unwrap();
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(
        nrows: usize,
        ncols: usize,
        f: impl Fn(usize, usize) -> T,
    ) -> Result<Self, MatrixError> {
        let len = checked_len(nrows, ncols)?;
        let mut data = try_buffer(len)?;
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether this is the empty `0 x 0` matrix.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Move the shape and buffer out, leaving `self` as the empty matrix.
    ///
    /// No element is copied.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
    /// let b = a.take();
    /// assert_eq!(a.shape(), (0, 0));
    /// assert_eq!(b.shape(), (2, 2));
    /// assert_eq!(b[(1, 0)], 3.0);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Bounds-checked element access.
    ///
    /// Fails with [`MatrixError::IndexOutOfRange`] for negative indices and
    /// for `row >= nrows` or `col >= ncols`.
    ///
    /// ```
    /// use densemat::{Matrix, MatrixError};
    /// let m = Matrix::from_rows(1, 2, &[5.0_f64, 6.0]).unwrap();
    /// assert_eq!(*m.at(0, 1).unwrap(), 6.0);
    /// assert!(matches!(m.at(-1, 0), Err(MatrixError::IndexOutOfRange { .. })));
    /// assert!(m.at(1, 0).is_err());
    /// ```
    pub fn at<I: MatrixIndex>(&self, row: I, col: I) -> Result<&T, MatrixError> {
        let offset = self.checked_offset(row, col)?;
        Ok(&self.data[offset])
    }

    /// Bounds-checked mutable element access. Same failure rules as [`Matrix::at`].
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut m = Matrix::<f64>::zeros(2, 3).unwrap();
    /// *m.at_mut(1, 2).unwrap() = 4.5;
    /// assert_eq!(m[(1, 2)], 4.5);
    /// assert!(m.at_mut(2, 0).is_err());
    /// ```
    pub fn at_mut<I: MatrixIndex>(&mut self, row: I, col: I) -> Result<&mut T, MatrixError> {
        let offset = self.checked_offset(row, col)?;
        Ok(&mut self.data[offset])
    }

    fn checked_offset<I: MatrixIndex>(&self, row: I, col: I) -> Result<usize, MatrixError> {
        match (row.to_index(), col.to_index()) {
            (Some(r), Some(c)) if r < self.nrows && c < self.ncols => Ok(r * self.ncols + c),
            _ => Err(MatrixError::IndexOutOfRange {
                row: row.to_i128(),
                col: col.to_i128(),
                nrows: self.nrows,
                ncols: self.ncols,
            }),
        }
    }
}

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix filled with zeros.
    ///
    /// Fails with [`MatrixError::InvalidShape`] when either dimension is zero,
    /// and with [`MatrixError::Allocation`] when the buffer cannot be reserved.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3).unwrap();
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    ///
    /// assert!(Matrix::<f64>::zeros(0, 4).is_err());
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self, MatrixError> {
        let len = checked_len(nrows, ncols)?;
        let mut data = try_buffer(len)?;
        data.resize(len, T::zero());
        Ok(Self { data, nrows, ncols })
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let id = Matrix::<f64>::eye(3).unwrap();
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// assert_eq!(id[(2, 2)], 1.0);
    /// ```
    pub fn eye(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != nrows * ncols`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Result<Self, MatrixError> {
        let len = checked_len(nrows, ncols)?;
        assert_eq!(
            row_major.len(),
            len,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        let mut data = try_buffer(len)?;
        data.extend_from_slice(row_major);
        Ok(Self { data, nrows, ncols })
    }

    /// Change the number of rows, keeping the column count.
    ///
    /// Existing rows up to the new count are preserved; added rows are
    /// zero-filled. A request equal to the current count is a no-op. On
    /// error `self` is unchanged.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
    /// m.set_nrows(3).unwrap();
    /// assert_eq!(m.shape(), (3, 2));
    /// assert_eq!(m[(1, 1)], 4.0);
    /// assert_eq!(m[(2, 0)], 0.0);
    /// ```
    pub fn set_nrows(&mut self, nrows: usize) -> Result<(), MatrixError> {
        if nrows == self.nrows {
            return Ok(());
        }
        let mut resized = Self::zeros(nrows, self.ncols)?;
        let keep = nrows.min(self.nrows) * self.ncols;
        resized.data[..keep].copy_from_slice(&self.data[..keep]);
        log::trace!(
            "resizing {}x{} matrix to {}x{}",
            self.nrows, self.ncols, nrows, self.ncols
        );
        *self = resized;
        Ok(())
    }

    /// Change the number of columns, keeping the row count.
    ///
    /// Each row keeps its leading elements up to the new count; added
    /// columns are zero-filled. A request equal to the current count is a
    /// no-op. On error `self` is unchanged.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
    /// m.set_ncols(3).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 1)], 4.0);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn set_ncols(&mut self, ncols: usize) -> Result<(), MatrixError> {
        if ncols == self.ncols {
            return Ok(());
        }
        let mut resized = Self::zeros(self.nrows, ncols)?;
        let keep = ncols.min(self.ncols);
        for i in 0..self.nrows {
            let src = i * self.ncols;
            let dst = i * ncols;
            resized.data[dst..dst + keep].copy_from_slice(&self.data[src..src + keep]);
        }
        log::trace!(
            "resizing {}x{} matrix to {}x{}",
            self.nrows, self.ncols, self.nrows, ncols
        );
        *self = resized;
        Ok(())
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Copy-assign from `source`.
    ///
    /// When the shapes already match the existing buffer is overwritten in
    /// place; otherwise it is released and replaced.
    fn clone_from(&mut self, source: &Self) {
        if self.shape() == source.shape() {
            self.data.clone_from_slice(&source.data);
        } else {
            log::trace!(
                "reallocating {}x{} matrix as {}x{}",
                self.nrows, self.ncols, source.nrows, source.ncols
            );
            self.data = source.data.clone();
            self.nrows = source.nrows;
            self.ncols = source.ncols;
        }
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for Matrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> MatrixMut<T> for Matrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of range for {}x{} matrix",
            row, col, self.nrows, self.ncols,
        );
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of range for {}x{} matrix",
            row, col, self.nrows, self.ncols,
        );
        &mut self.data[row * self.ncols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let m: Matrix = Matrix::new();
        assert_eq!(m.nrows(), 0);
        assert_eq!(m.ncols(), 0);
        assert!(m.is_empty());

        let d: Matrix = Matrix::default();
        assert_eq!(d.shape(), (0, 0));
    }

    #[test]
    fn zeros() {
        let m = Matrix::<f64>::zeros(3, 4).unwrap();
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 4);
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn zeros_invalid_shape() {
        assert_eq!(
            Matrix::<f64>::zeros(0, 4).unwrap_err(),
            MatrixError::InvalidShape { nrows: 0, ncols: 4 }
        );
        assert_eq!(
            Matrix::<f64>::zeros(4, 0).unwrap_err(),
            MatrixError::InvalidShape { nrows: 4, ncols: 0 }
        );
        assert!(Matrix::<f64>::zeros(0, 0).is_err());
    }

    #[test]
    fn zeros_overflowing_shape() {
        assert_eq!(
            Matrix::<f64>::zeros(usize::MAX, 2).unwrap_err(),
            MatrixError::Allocation
        );
    }

    #[test]
    fn zeros_unreservable_buffer() {
        // Element count fits in usize, byte size does not.
        assert_eq!(
            Matrix::<f64>::zeros(usize::MAX / 4, 1).unwrap_err(),
            MatrixError::Allocation
        );
    }

    #[test]
    fn eye() {
        let m = Matrix::<f64>::eye(3).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m[(i, j)], expected);
            }
        }
        assert!(Matrix::<f64>::eye(0).is_err());
    }

    #[test]
    fn from_rows() {
        let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m[(1, 2)], 6.0);
    }

    #[test]
    #[should_panic(expected = "slice length")]
    fn from_rows_wrong_length() {
        let _ = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn from_fn() {
        let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64).unwrap();
        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(1, 1)], 4.0);
        assert_eq!(m[(2, 2)], 8.0);
        assert!(Matrix::from_fn(0, 3, |_, _| 0.0).is_err());
    }

    #[test]
    fn index_mut() {
        let mut m = Matrix::<f64>::zeros(2, 2).unwrap();
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_column_overflow_panics() {
        let m = Matrix::<f64>::zeros(2, 2).unwrap();
        // Would alias (1, 0) without the bounds assertion.
        let _ = m[(0, 2)];
    }

    #[test]
    fn at_in_range() {
        let mut m = Matrix::<f64>::zeros(2, 3).unwrap();
        *m.at_mut(1, 1).unwrap() = 3.0;
        assert_eq!(*m.at(1, 1).unwrap(), 3.0);
        assert_eq!(*m.at(1usize, 2usize).unwrap(), 0.0);
    }

    #[test]
    fn at_out_of_range() {
        let m = Matrix::<f64>::zeros(1, 1).unwrap();
        assert_eq!(
            m.at(5, 0).unwrap_err(),
            MatrixError::IndexOutOfRange { row: 5, col: 0, nrows: 1, ncols: 1 }
        );

        let mut m = Matrix::<f64>::zeros(3, 3).unwrap();
        assert!(m.at_mut(-1, -1).is_err());
        assert!(m.at_mut(0, -1).is_err());
        assert!(m.at_mut(-1, 0).is_err());
        assert!(m.at_mut(-1, 1).is_err());
        assert!(m.at_mut(0, 3).is_err());

        let empty: Matrix = Matrix::new();
        assert!(empty.at(0, 0).is_err());
    }

    #[test]
    fn take_resets_source() {
        let mut a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let copy = a.clone();
        let b = a.take();
        assert_eq!(a.shape(), (0, 0));
        assert!(a.is_empty());
        assert_eq!(b.shape(), (2, 2));
        assert_eq!(b, copy);
    }

    #[test]
    fn clone_is_independent() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut b = a.clone();
        assert_eq!(a, b);
        b[(0, 0)] = 10.0;
        assert_eq!(a[(0, 0)], 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn clone_from_same_shape_reuses_buffer() {
        let src = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut dst = Matrix::<f64>::zeros(2, 2).unwrap();
        let before = dst.data.as_ptr();
        dst.clone_from(&src);
        assert_eq!(dst.data.as_ptr(), before);
        assert_eq!(dst, src);
    }

    #[test]
    fn clone_from_other_shape() {
        let src = Matrix::<f64>::zeros(2, 5).unwrap();
        let mut dst = Matrix::<f64>::zeros(2, 3).unwrap();
        dst.clone_from(&src);
        assert_eq!(dst.shape(), (2, 5));
        assert_eq!(dst, src);
    }

    #[test]
    fn set_nrows_grow_and_shrink() {
        let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        m.set_nrows(3).unwrap();
        assert_eq!(m, Matrix::from_rows(3, 2, &[1.0, 2.0, 3.0, 4.0, 0.0, 0.0]).unwrap());

        let mut m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j + 1) as f64).unwrap();
        m.set_nrows(2).unwrap();
        assert_eq!(m, Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap());
    }

    #[test]
    fn set_ncols_grow_and_shrink() {
        let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        m.set_ncols(3).unwrap();
        assert_eq!(m, Matrix::from_rows(2, 3, &[1.0, 2.0, 0.0, 3.0, 4.0, 0.0]).unwrap());

        let mut m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j + 1) as f64).unwrap();
        m.set_ncols(2).unwrap();
        assert_eq!(m, Matrix::from_rows(3, 2, &[1.0, 2.0, 4.0, 5.0, 7.0, 8.0]).unwrap());
    }

    #[test]
    fn set_same_count_is_noop() {
        let mut m = Matrix::from_rows(1, 2, &[1.0, 2.0]).unwrap();
        let before = m.data.as_ptr();
        m.set_nrows(1).unwrap();
        m.set_ncols(2).unwrap();
        assert_eq!(m.data.as_ptr(), before);
    }

    #[test]
    fn set_zero_leaves_matrix_unchanged() {
        let mut m = Matrix::from_rows(1, 2, &[1.0, 2.0]).unwrap();
        assert_eq!(
            m.set_nrows(0).unwrap_err(),
            MatrixError::InvalidShape { nrows: 0, ncols: 2 }
        );
        assert!(m.set_ncols(0).is_err());
        assert_eq!(m, Matrix::from_rows(1, 2, &[1.0, 2.0]).unwrap());

        let mut empty: Matrix = Matrix::new();
        assert!(empty.set_nrows(2).is_err());
        assert_eq!(empty.shape(), (0, 0));
    }

    #[test]
    fn matrix_ref_trait() {
        let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        fn trace<T: Scalar>(m: &impl MatrixRef<T>) -> T {
            let mut sum = T::zero();
            let n = m.nrows().min(m.ncols());
            for i in 0..n {
                sum = sum + *m.get(i, i);
            }
            sum
        }
        assert_eq!(trace(&m), 5.0);
    }

    #[test]
    fn matrix_mut_trait() {
        let mut m = Matrix::<f64>::zeros(2, 2).unwrap();
        fn set_diag<T: Scalar>(m: &mut impl MatrixMut<T>, val: T) {
            let n = m.nrows().min(m.ncols());
            for i in 0..n {
                *m.get_mut(i, i) = val;
            }
        }
        set_diag(&mut m, 7.0);
        assert_eq!(m[(0, 0)], 7.0);
        assert_eq!(m[(1, 1)], 7.0);
        assert_eq!(m[(0, 1)], 0.0);
    }
}
