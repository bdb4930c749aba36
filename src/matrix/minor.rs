use crate::traits::{MatrixMut, MatrixRef};

/// Copy `src` into `dst` with row `row` and column `col` removed.
///
/// `dst` must already be shaped `(src.nrows() - 1, src.ncols() - 1)`.
/// Remaining elements keep their relative order.
pub(crate) fn delete_row_col<T: Copy>(
    src: &impl MatrixRef<T>,
    dst: &mut impl MatrixMut<T>,
    row: usize,
    col: usize,
) {
    debug_assert_eq!(dst.nrows() + 1, src.nrows());
    debug_assert_eq!(dst.ncols() + 1, src.ncols());
    for i in 0..dst.nrows() {
        let si = if i < row { i } else { i + 1 };
        for j in 0..dst.ncols() {
            let sj = if j < col { j } else { j + 1 };
            *dst.get_mut(i, j) = *src.get(si, sj);
        }
    }
}
