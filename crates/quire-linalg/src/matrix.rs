//! Immutable dense matrices of exact rationals.
//!
//! A [`Matrix`] never changes after construction. Each row operation
//! clones the row-major store, mutates the clone through private in-place
//! routines and hands the clone back, so the receiver is left untouched
//! and no two matrices ever share cells.

use std::fmt;
use std::ops::Mul;

use num_traits::Zero;
use quire_integers::Rational;
use tracing::{debug, trace};

use crate::error::{check_index, IndexKind, MatrixError};
use crate::format::DisplayConfig;
use crate::log::TransformationLog;
use crate::transformation::Transformation;
use crate::vector::Vector;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    /// Matrix entries in row-major order.
    data: Vec<Rational>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl Matrix {
    /// Creates a matrix from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if `num_rows * num_cols`
    /// overflows, and [`MatrixError::SizeMismatch`] if `data` does not hold
    /// exactly that many cells.
    pub fn of(num_rows: usize, num_cols: usize, data: Vec<Rational>) -> Result<Self, MatrixError> {
        let expected = cell_count(num_rows, num_cols)?;
        if data.len() != expected {
            return Err(MatrixError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SizeMismatch`] if the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<Rational>>) -> Result<Self, MatrixError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if let Some(ragged) = rows.iter().find(|row| row.len() != num_cols) {
            return Err(MatrixError::SizeMismatch {
                expected: num_cols,
                actual: ragged.len(),
            });
        }
        let data: Vec<Rational> = rows.into_iter().flatten().collect();
        Self::of(num_rows, num_cols, data)
    }

    /// Creates the `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if `n * n` overflows.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let len = cell_count(n, n)?;
        let data = (0..len)
            .map(|i| {
                if i % (n + 1) == 0 {
                    Rational::ONE
                } else {
                    Rational::ZERO
                }
            })
            .collect();
        Ok(Self {
            data,
            num_rows: n,
            num_cols: n,
        })
    }

    /// Parses a matrix from whitespace-separated ratios in row-major order.
    ///
    /// Each token is `<int>` or `<int>/<int>`. Runs of whitespace, including
    /// newlines, separate tokens.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Parse`] for a malformed token,
    /// [`MatrixError::DivideByZero`] for a zero denominator, and
    /// [`MatrixError::SizeMismatch`] if the token count is wrong.
    pub fn parse(num_rows: usize, num_cols: usize, text: &str) -> Result<Self, MatrixError> {
        let data = text
            .split_whitespace()
            .map(Rational::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Self::of(num_rows, num_cols, data)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Rational] {
        &self.data
    }

    /// Returns the entry at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<Rational, MatrixError> {
        check_index(IndexKind::Row, row, self.num_rows)?;
        check_index(IndexKind::Column, col, self.num_cols)?;
        Ok(self.data[row * self.num_cols + col])
    }

    /// Returns a slice of the specified row.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Result<&[Rational], MatrixError> {
        check_index(IndexKind::Row, row, self.num_rows)?;
        Ok(self.row_slice(row))
    }

    /// Returns a copy of the specified row as a [`Vector`].
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if `row` is out of bounds.
    pub fn row_vector(&self, row: usize) -> Result<Vector, MatrixError> {
        Ok(Vector::of(self.row(row)?.to_vec()))
    }

    /// Returns the column of the first non-zero entry in `row`, or `None`
    /// when the whole row is zero.
    ///
    /// `None` orders before every `Some`, so zero rows sort first.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if `row` is out of bounds.
    pub fn leading_coefficient_column(&self, row: usize) -> Result<Option<usize>, MatrixError> {
        check_index(IndexKind::Row, row, self.num_rows)?;
        Ok(self.leading_column(row))
    }

    /// Returns a matrix with rows `row_a` and `row_b` exchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if either row is out of bounds.
    pub fn swap(&self, row_a: usize, row_b: usize) -> Result<Self, MatrixError> {
        self.swap_all(&[(row_a, row_b)])
    }

    /// Returns a matrix with every pair of rows exchanged, left to right.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if any row is out of bounds.
    pub fn swap_all(&self, swaps: &[(usize, usize)]) -> Result<Self, MatrixError> {
        let mut m = self.clone();
        for &(row_a, row_b) in swaps {
            check_index(IndexKind::Row, row_a, self.num_rows)?;
            check_index(IndexKind::Row, row_b, self.num_rows)?;
            m.swap_rows(row_a, row_b);
        }
        Ok(m)
    }

    /// Returns a matrix with `row` multiplied by `scalar`. Cells are not reduced.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if `row` is out of bounds.
    pub fn scale_row(&self, row: usize, scalar: Rational) -> Result<Self, MatrixError> {
        check_index(IndexKind::Row, row, self.num_rows)?;
        let mut m = self.clone();
        m.scale_row_in_place(row, scalar);
        Ok(m)
    }

    /// Returns a matrix with `scalar * row[src_row]` added to `row[dest_row]`.
    ///
    /// `dest_row` and `src_row` may be the same row.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if either row is out of bounds.
    pub fn add_row(
        &self,
        dest_row: usize,
        src_row: usize,
        scalar: Rational,
    ) -> Result<Self, MatrixError> {
        check_index(IndexKind::Row, dest_row, self.num_rows)?;
        check_index(IndexKind::Row, src_row, self.num_rows)?;
        let mut m = self.clone();
        m.add_scaled_row(dest_row, src_row, scalar);
        Ok(m)
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn times(&self, scalar: Rational) -> Self {
        let mut m = self.clone();
        for cell in &mut m.data {
            *cell = *cell * scalar;
        }
        m
    }

    /// Divides all entries by a scalar, i.e. scales by its reciprocal.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DivideByZero`] if `scalar` is zero.
    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, scalar: Rational) -> Result<Self, MatrixError> {
        Ok(self.times(scalar.recip()?))
    }

    /// Returns a matrix with every cell in lowest terms.
    #[must_use]
    pub fn simplified(&self) -> Self {
        let mut m = self.clone();
        for cell in &mut m.data {
            *cell = cell.simplified();
        }
        m
    }

    /// Returns the rows ordered by ascending leading-coefficient column.
    ///
    /// All-zero rows come first. The sort is a stable bubble sort: adjacent
    /// rows are exchanged only when the lower one leads strictly earlier,
    /// and passes repeat until one makes no exchange. Each exchange is
    /// appended to `log` together with the matrix right after it.
    #[must_use]
    pub fn sorted(&self, log: Option<&mut TransformationLog>) -> Self {
        let mut m = self.clone();
        m.sort_rows(log);
        m
    }

    /// Executes a recorded row operation against this matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if the operation names a
    /// row outside this matrix.
    pub fn apply(&self, transformation: &Transformation) -> Result<Self, MatrixError> {
        match *transformation {
            Transformation::Swap { row_a, row_b } => self.swap(row_a, row_b),
            Transformation::Add {
                dest_row,
                src_row,
                scale,
            } => self.add_row(dest_row, src_row, scale),
            Transformation::Scale { row, scale } => self.scale_row(row, scale),
        }
    }

    /// Renders the matrix with the given options.
    #[must_use]
    pub fn display_with(&self, config: &DisplayConfig) -> String {
        config.render(self.num_cols, &self.data)
    }

    // In-place routines below are only ever run on a fresh clone, with
    // row indices already checked.

    fn row_slice(&self, row: usize) -> &[Rational] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    fn leading_column(&self, row: usize) -> Option<usize> {
        self.row_slice(row).iter().position(|cell| !cell.is_zero())
    }

    fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    fn scale_row_in_place(&mut self, row: usize, scale: Rational) {
        let start = row * self.num_cols;
        for cell in &mut self.data[start..start + self.num_cols] {
            *cell = *cell * scale;
        }
    }

    fn add_scaled_row(&mut self, target: usize, source: usize, scale: Rational) {
        for k in 0..self.num_cols {
            let val = self.data[source * self.num_cols + k] * scale;
            let idx = target * self.num_cols + k;
            self.data[idx] = self.data[idx] + val;
        }
    }

    fn sort_rows(&mut self, mut log: Option<&mut TransformationLog>) {
        let mut pass = 0usize;
        loop {
            pass += 1;
            let mut swaps = 0usize;
            for row in 0..self.num_rows.saturating_sub(1) {
                let lead_a = self.leading_column(row);
                let lead_b = self.leading_column(row + 1);
                if lead_b < lead_a {
                    self.swap_rows(row, row + 1);
                    swaps += 1;
                    trace!(row, ?lead_a, ?lead_b, "swapped adjacent rows");
                    if let Some(log) = log.as_deref_mut() {
                        log.push(
                            Transformation::Swap {
                                row_a: row,
                                row_b: row + 1,
                            },
                            self.clone(),
                        );
                    }
                }
            }
            debug!(pass, swaps, rows = self.num_rows, "row sort pass");
            if swaps == 0 {
                break;
            }
        }
    }
}

fn cell_count(num_rows: usize, num_cols: usize) -> Result<usize, MatrixError> {
    num_rows
        .checked_mul(num_cols)
        .ok_or(MatrixError::InvalidDimension {
            rows: num_rows,
            columns: num_cols,
        })
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(&DisplayConfig::default()))
    }
}

impl Mul<Rational> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: Rational) -> Matrix {
        self.times(scalar)
    }
}

impl Mul<Rational> for Matrix {
    type Output = Matrix;

    fn mul(self, scalar: Rational) -> Matrix {
        self.times(scalar)
    }
}
