//! # Quire
//!
//! Exact-rational matrices and the elementary row operations that
//! Gaussian elimination is built from.
//!
//! Quire never rounds: cells are exact `i64` fractions, and every row
//! operation returns a new matrix. A `TransformationLog` can record each
//! operation alongside the matrix it produced so the steps can be shown
//! or replayed.
//!
//! ## Features
//!
//! - **Exact Rationals**: unreduced arithmetic with value equality
//! - **Immutable Matrices**: swap, scale and add rows without aliasing
//! - **Row Sorting**: stable ordering by leading-coefficient column
//! - **Transformation Logs**: step-by-step traces of row operations
//!
//! ## Quick Start
//!
//! ```rust
//! use quire::prelude::*;
//!
//! let m = Matrix::parse(2, 2, "0 3  2 4").unwrap();
//! let mut log = TransformationLog::new(m.clone());
//! let sorted = m.sorted(Some(&mut log));
//! let reduced = sorted.scale_row(0, Rational::HALF).unwrap();
//!
//! assert_eq!(reduced, Matrix::parse(2, 2, "1 2  0 3").unwrap());
//! assert_eq!(log.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quire_integers as integers;
pub use quire_linalg as linalg;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quire_integers::{Rational, RationalError};
    pub use quire_linalg::{
        DisplayConfig, Matrix, MatrixError, Transformation, TransformationLog, Vector,
    };
}
