//! # quire-linalg
//!
//! Exact elementary row operations on immutable rational matrices.
//!
//! This crate provides:
//! - A row-major `Matrix` of `Rational`s whose operations return new matrices
//! - Row swap, row scaling, scaled row addition and whole-matrix scaling
//! - A stable leading-coefficient row sort
//! - A `TransformationLog` recording each operation with its result
//!
//! ## Example
//!
//! ```
//! use quire_linalg::{Matrix, TransformationLog};
//!
//! let m = Matrix::parse(3, 3, "0 2 1  1 0 0  0 0 5").unwrap();
//! let mut log = TransformationLog::new(m.clone());
//! let sorted = m.sorted(Some(&mut log));
//!
//! assert_eq!(sorted, Matrix::parse(3, 3, "1 0 0  0 2 1  0 0 5").unwrap());
//! assert_eq!(log.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod format;
pub mod log;
pub mod matrix;
pub mod transformation;
pub mod vector;

pub use error::{IndexKind, MatrixError};
pub use format::DisplayConfig;
pub use log::{Step, TransformationLog};
pub use matrix::Matrix;
pub use transformation::Transformation;
pub use vector::Vector;

#[cfg(test)]
mod proptests;
