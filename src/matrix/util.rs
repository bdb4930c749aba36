use alloc::string::String;
use alloc::vec::Vec;
use alloc::{format, vec};
use core::fmt;

use super::Matrix;

// ── Views ───────────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// The elements in row-major order.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Row `i` as a slice. Panics if `i >= nrows`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.nrows, "row {} out of range for {} rows", i, self.nrows);
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Iterate over the rows as slices. Yields nothing for the empty matrix.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let sums: Vec<f64> = m.rows().map(|r| r.iter().sum()).collect();
    /// assert_eq!(sums, vec![6.0, 15.0]);
    /// ```
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // `chunks` rejects a zero width; the empty matrix has no data anyway.
        self.data.chunks(self.ncols.max(1))
    }

    /// Apply a function to every element, producing a new matrix of the
    /// same shape.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, 4.0, 9.0, 16.0]).unwrap();
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U>
    where
        T: Copy,
    {
        let data: Vec<U> = self.data.iter().map(|&x| f(x)).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Nested-bracket rows with right-aligned columns, one row per line:
///
/// ```text
/// [[   1, 100],
///  [1000,   2]]
/// ```
///
/// A precision (`{:.3}`) is applied to every element. The empty matrix
/// prints as `[]`.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[]");
        }
        let cells: Vec<String> = self
            .data
            .iter()
            .map(|x| match f.precision() {
                Some(p) => format!("{:.*}", p, x),
                None => format!("{}", x),
            })
            .collect();

        let n = self.ncols;
        let mut widths = vec![0; n];
        for (k, cell) in cells.iter().enumerate() {
            widths[k % n] = widths[k % n].max(cell.chars().count());
        }

        for (i, row) in cells.chunks(n).enumerate() {
            f.write_str(if i == 0 { "[[" } else { " [" })?;
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{:>width$}", cell, width = widths[j])?;
            }
            f.write_str(if i + 1 == self.nrows { "]]" } else { "],\n" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_access() {
        let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.rows().count(), 2);
    }

    #[test]
    fn rows_of_empty() {
        let m: Matrix = Matrix::new();
        assert_eq!(m.rows().count(), 0);
        assert!(m.as_slice().is_empty());
    }

    #[test]
    fn map_type_change() {
        let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
        let rounded = m.map(|x| x as i32);
        assert_eq!(rounded[(0, 0)], 1);
        assert_eq!(rounded[(1, 1)], 4);
        assert_eq!(rounded.shape(), (2, 2));
    }

    #[test]
    fn display() {
        let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(format!("{}", m), "[[1, 2],\n [3, 4]]");
    }

    #[test]
    fn display_alignment() {
        let m = Matrix::from_rows(2, 2, &[1.0, 100.0, 1000.0, 2.0]).unwrap();
        assert_eq!(format!("{}", m), "[[   1, 100],\n [1000,   2]]");
    }

    #[test]
    fn display_precision() {
        let m = Matrix::from_rows(1, 3, &[0.5, -1.25, 2.0]).unwrap();
        assert_eq!(format!("{:.2}", m), "[[0.50, -1.25, 2.00]]");
    }

    #[test]
    fn display_integers() {
        let m = Matrix::from_rows(2, 1, &[7i64, -12]).unwrap();
        assert_eq!(format!("{}", m), "[[  7],\n [-12]]");
    }

    #[test]
    fn display_empty() {
        let m: Matrix = Matrix::new();
        assert_eq!(format!("{}", m), "[]");
    }
}
