use core::fmt::Debug;
use num_traits::{Float, Num, One, Signed, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Matrix elements with a sign: signed integers and floats.
///
/// Required by everything that negates an element (determinant,
/// complements, `Neg`). Unsigned integers are excluded because the
/// alternating cofactor sign would underflow.
pub trait SignedScalar: Scalar + Signed {}

impl<T: Scalar + Signed> SignedScalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by everything that compares elements with a tolerance
/// (equality, singularity checks) or divides by a determinant.
pub trait FloatScalar: SignedScalar + Float {
    /// Absolute per-element tolerance used by matrix equality and by the
    /// singularity check in [`inverse`](crate::Matrix::inverse).
    ///
    /// The same `1e-7` applies to `f32` and `f64`. For `f32` that is below
    /// `f32::EPSILON` (about `1.19e-7`), so two `f32` elements of magnitude
    /// 1 or more compare equal only when they are bit-identical; `==` on
    /// `Matrixf32` is effectively exact equality there.
    fn eq_tolerance() -> Self;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                #[inline] fn eq_tolerance() -> $t { 1e-7 }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);

/// Integer types accepted by the bounds-checked accessors
/// [`at`](crate::Matrix::at) and [`at_mut`](crate::Matrix::at_mut).
///
/// Signed types are accepted so that a negative request surfaces as
/// [`MatrixError::IndexOutOfRange`](crate::MatrixError::IndexOutOfRange)
/// rather than as a conversion failure at the call site.
pub trait MatrixIndex: Copy {
    /// The index as a `usize`, or `None` when it is negative or too large.
    fn to_index(self) -> Option<usize>;

    /// The raw index, widened for error reporting.
    fn to_i128(self) -> i128;
}

macro_rules! impl_matrix_index {
    ($($t:ty),*) => {
        $(
            impl MatrixIndex for $t {
                #[inline]
                fn to_index(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_matrix_index!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

/// Read-only access to a matrix-like type.
///
/// Lets the minor/cofactor helpers operate on anything that exposes a
/// rectangular grid of elements.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element access, enabling
/// in-place algorithms to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;
}
