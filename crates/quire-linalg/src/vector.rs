//! Immutable vectors of rationals.

use std::fmt;

use quire_integers::Rational;

use crate::error::{check_index, IndexKind, MatrixError};

/// An immutable sequence of rationals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    elements: Vec<Rational>,
}

impl Vector {
    /// Creates a vector holding `elements`.
    #[must_use]
    pub fn of(elements: Vec<Rational>) -> Self {
        Self { elements }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<Rational, MatrixError> {
        check_index(IndexKind::Element, index, self.elements.len())?;
        Ok(self.elements[index])
    }

    /// Returns a new vector with `f` applied to every element.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(Rational) -> Rational,
    {
        Self {
            elements: self.elements.iter().copied().map(f).collect(),
        }
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &Rational> {
        self.elements.iter()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Rational] {
        &self.elements
    }
}

impl From<Vec<Rational>> for Vector {
    fn from(elements: Vec<Rational>) -> Self {
        Self::of(elements)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{element}")?;
        }
        Ok(())
    }
}
