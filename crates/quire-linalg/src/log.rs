//! A recorded sequence of row operations and the matrices they produced.

use std::fmt;

use tracing::trace;

use crate::error::{check_index, IndexKind, MatrixError};
use crate::format::DisplayConfig;
use crate::matrix::Matrix;
use crate::transformation::Transformation;

/// One recorded operation and the matrix it is said to produce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// The operation performed.
    pub transformation: Transformation,
    /// The matrix after the operation.
    pub result: Matrix,
}

/// Ordered record of row operations anchored to an initial matrix.
///
/// Step `i` holds the operation applied to the result of step `i - 1`
/// (or to the initial matrix for step 0) and its outcome. The log records
/// whatever it is given; use [`TransformationLog::replay`] to recompute
/// the snapshots.
#[derive(Clone, Debug)]
pub struct TransformationLog {
    initial: Matrix,
    steps: Vec<Step>,
    display: DisplayConfig,
}

impl TransformationLog {
    /// Creates an empty log seeded with `initial`.
    #[must_use]
    pub fn new(initial: Matrix) -> Self {
        Self {
            initial,
            steps: Vec::new(),
            display: DisplayConfig::default(),
        }
    }

    /// Sets the options used to render snapshots.
    #[must_use]
    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// Appends a step. Returns `self` so calls can be chained.
    pub fn push(&mut self, transformation: Transformation, result: Matrix) -> &mut Self {
        trace!(step = self.steps.len() + 1, %transformation, "logged transformation");
        self.steps.push(Step {
            transformation,
            result,
        });
        self
    }

    /// Returns the seed matrix.
    #[must_use]
    pub fn initial(&self) -> &Matrix {
        &self.initial
    }

    /// Returns the latest snapshot, or the seed matrix if nothing was logged.
    #[must_use]
    pub fn current(&self) -> &Matrix {
        self.steps.last().map_or(&self.initial, |step| &step.result)
    }

    /// Number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if no step was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the step at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn step(&self, index: usize) -> Result<&Step, MatrixError> {
        check_index(IndexKind::Step, index, self.steps.len())?;
        Ok(&self.steps[index])
    }

    /// Iterates over the recorded steps in order.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    /// Recomputes every snapshot by applying each recorded operation to the
    /// previous matrix, starting from the seed.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while applying an operation.
    pub fn replay(&self) -> Result<Vec<Matrix>, MatrixError> {
        let mut current = self.initial.clone();
        let mut snapshots = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            current = current.apply(&step.transformation)?;
            snapshots.push(current.clone());
        }
        Ok(snapshots)
    }
}

impl fmt::Display for TransformationLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initial matrix:")?;
        writeln!(f, "{}", self.initial.display_with(&self.display))?;
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "Step {}:", i + 1)?;
            writeln!(f, "{}", step.transformation)?;
            writeln!(f, "{}", step.result.display_with(&self.display))?;
        }
        Ok(())
    }
}
