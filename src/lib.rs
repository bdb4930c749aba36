//! # densemat
//!
//! Dense, heap-allocated matrix value type with cofactor-expansion
//! determinant, complements and inverse. No-std compatible (needs `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use densemat::{Matrix, MatrixError};
//!
//! let a = Matrix::from_rows(3, 3, &[
//!     2.0_f64, 5.0, 7.0,
//!     6.0, 3.0, 4.0,
//!     5.0, -2.0, -3.0,
//! ])?;
//! assert_eq!(a.det()?, -1.0);
//!
//! let inv = a.inverse()?;
//! assert_eq!(&a * &inv, Matrix::eye(3)?);
//!
//! // Shape errors are typed.
//! let b = Matrix::<f64>::zeros(3, 2)?;
//! assert!(matches!(a.checked_add(&b), Err(MatrixError::ShapeMismatch { .. })));
//! # Ok::<(), MatrixError>(())
//! ```
//!
//! ## Value semantics
//!
//! - [`Matrix::new`] / `Default` is the empty `0 x 0` matrix, the only shape
//!   with a zero dimension.
//! - `Clone` deep-copies; `clone_from` reuses the buffer when the shapes
//!   already match.
//! - [`Matrix::take`] moves the buffer out and leaves the source empty.
//! - `==` compares shapes exactly and elements within `1e-7`.
//! - [`Matrix::set_nrows`] / [`Matrix::set_ncols`] truncate or zero-pad.
//!
//! ## Modules
//!
//! - [`matrix`] — `Matrix<T>` with row-major `Vec<T>` storage, in-place
//!   arithmetic (`sum_matrix`, `sub_matrix`, `mul_number`, `mul_matrix`),
//!   operator forms, transpose, determinant, complements and inverse.
//!   [`Matrixf64`] and friends are type aliases.
//!
//! - [`error`] — [`MatrixError`], returned by every fallible operation.
//!   Operators (`+`, `-`, `*`, `+=`, …) panic with the same message instead,
//!   since operator traits cannot return a `Result`.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`SignedScalar`] — signed integers and floats, used by determinant, complements and negation
//!   - [`FloatScalar`] — real floats, used by equality and inverse
//!   - [`MatrixIndex`] — integer types accepted by the checked accessors
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for algorithms
//!
//! ## Logging
//!
//! Resizes, buffer reallocations and singular-matrix rejections are reported
//! through the [`log`](https://docs.rs/log) facade at `trace` / `debug`
//! level. No logger is installed by this crate.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | `std::error::Error` for `MatrixError`; hardware FPU via system libm |
//! | `libm`  | no       | Pure-Rust software float fallback; required when `std` is off |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("densemat needs a float backend: enable the `std` or `libm` feature");

extern crate alloc;

pub mod error;
pub mod matrix;
pub mod traits;

pub use error::MatrixError;
pub use matrix::Matrix;
pub use matrix::aliases::{Matrixf32, Matrixf64, Matrixi32, Matrixi64};
pub use traits::{FloatScalar, MatrixIndex, MatrixMut, MatrixRef, Scalar, SignedScalar};
