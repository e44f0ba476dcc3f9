//! Descriptors for elementary row operations.
//!
//! A [`Transformation`] only records what was done to a matrix. Executing
//! one is the matrix's job, see [`Matrix::apply`](crate::Matrix::apply).

use std::fmt;

use quire_integers::Rational;

/// An elementary row operation. Row indices are zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transformation {
    /// Exchange two rows.
    Swap {
        /// First row.
        row_a: usize,
        /// Second row.
        row_b: usize,
    },
    /// `row[dest_row] += scale * row[src_row]`.
    Add {
        /// Row that is modified.
        dest_row: usize,
        /// Row that is scaled and added.
        src_row: usize,
        /// Multiplier applied to the source row.
        scale: Rational,
    },
    /// `row[row] *= scale`.
    Scale {
        /// Row that is scaled.
        row: usize,
        /// Multiplier.
        scale: Rational,
    },
}

impl Transformation {
    /// Rows read or written by this operation.
    #[must_use]
    pub fn rows(&self) -> Vec<usize> {
        match *self {
            Transformation::Swap { row_a, row_b } => vec![row_a, row_b],
            Transformation::Add {
                dest_row, src_row, ..
            } => vec![dest_row, src_row],
            Transformation::Scale { row, .. } => vec![row],
        }
    }
}

// Rows are rendered one-based.
impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transformation::Swap { row_a, row_b } => {
                write!(f, "Swapping row {} with {}", row_a + 1, row_b + 1)
            }
            Transformation::Add {
                dest_row,
                src_row,
                scale,
            } => write!(
                f,
                "Adding row {} by {} x row {}",
                dest_row + 1,
                scale,
                src_row + 1
            ),
            Transformation::Scale { row, scale } => {
                write!(f, "Scaling row {} by {}", row + 1, scale)
            }
        }
    }
}
