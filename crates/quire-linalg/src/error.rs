//! Errors raised by matrix construction, access and row operations.

use quire_integers::RationalError;
use thiserror::Error;

/// Errors that can occur while building or transforming a matrix.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The requested shape cannot be represented.
    #[error("invalid matrix size {rows} x {columns}")]
    InvalidDimension {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        columns: usize,
    },

    /// The number of supplied cells does not equal `rows * columns`.
    #[error("{actual} cells supplied, but the matrix needs {expected}")]
    SizeMismatch {
        /// `rows * columns`.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },

    /// Division by a zero scalar, or a ratio with a zero denominator.
    #[error("division by zero")]
    DivideByZero,

    /// A malformed ratio or matrix token.
    #[error("parse error: {0}")]
    Parse(RationalError),

    /// A row, column or step index outside its valid range.
    #[error("{kind} index {index} out of range 0..{len}")]
    IndexOutOfRange {
        /// Which kind of index was out of range.
        kind: IndexKind,
        /// The offending index.
        index: usize,
        /// The exclusive upper bound.
        len: usize,
    },
}

/// The kind of index reported by [`MatrixError::IndexOutOfRange`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexKind {
    /// A matrix row.
    Row,
    /// A matrix column.
    Column,
    /// A vector element.
    Element,
    /// A transformation log step.
    Step,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IndexKind::Row => "row",
            IndexKind::Column => "column",
            IndexKind::Element => "element",
            IndexKind::Step => "step",
        };
        f.write_str(name)
    }
}

impl From<RationalError> for MatrixError {
    fn from(err: RationalError) -> Self {
        match err {
            RationalError::DivideByZero => MatrixError::DivideByZero,
            other => MatrixError::Parse(other),
        }
    }
}

/// Checks `index < len`.
pub(crate) fn check_index(kind: IndexKind, index: usize, len: usize) -> Result<(), MatrixError> {
    if index < len {
        Ok(())
    } else {
        Err(MatrixError::IndexOutOfRange { kind, index, len })
    }
}
