//! # matvec
//!
//! Small, self-contained mathematical value types: a complex number, a
//! dynamically-sized vector, and a dense dynamically-sized matrix with
//! elimination-based linear algebra (determinant, cofactors, inverse).
//! No-std compatible.
//!
//! ## Quick start
//!
//! ```
//! use matvec::{Matrix, Vector};
//!
//! let a = Matrix::from_rows(&[[4.0_f64, 7.0], [2.0, 6.0]]).unwrap();
//! let inv = a.inverse().unwrap();
//! let id = &a * &inv;
//! assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
//! assert!(id[(0, 1)].abs() < 1e-12);
//!
//! let v = Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
//! let w = Vector::from_slice(&[4.0, 5.0, 6.0]).unwrap();
//! assert_eq!(v.dot(&w).unwrap(), 32.0);
//! ```
//!
//! ## Modules
//!
//! - [`complex`] — `Complex<T>` value type with component arithmetic,
//!   conjugation, and modulus. Operators work between complex numbers and
//!   plain scalars in either position.
//!
//! - [`vector`] — Heap-allocated `Vector<T>` with a length ≥ 1 invariant.
//!   Element-wise arithmetic auto-extends the receiver to a longer operand,
//!   plus dot product, Euclidean norm, and resize/extend.
//!
//! - [`matrix`] — Heap-allocated `Matrix<T>` with runtime dimensions
//!   (always at least 1×1), `Vec<T>` row-major storage. Arithmetic operators,
//!   transpose, minor extraction, row-echelon reduction, determinant,
//!   cofactor matrix, and adjugate-based inverse.
//!
//! - [`error`] — [`MathError`], the single error type returned by every
//!   fallible operation. Operators delegate to the fallible methods and
//!   panic with the same message on misuse.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all container elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), required where
//!     a square root is taken (norms, complex modulus)
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm |
//! | `libm`  | no       | Pure-Rust software float fallback for no-std targets |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod complex;
pub mod error;
pub mod matrix;
pub mod traits;
pub mod vector;

pub use complex::Complex;
pub use error::MathError;
pub use matrix::Matrix;
pub use traits::{FloatScalar, Scalar};
pub use vector::Vector;
