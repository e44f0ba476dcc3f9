//! Exact rational numbers over `i64`.
//!
//! Unlike a canonical big-rational type, a [`Rational`] keeps whatever
//! numerator and denominator it was built with. Arithmetic never reduces;
//! call [`Rational::simplified`] when lowest terms are wanted. Equality,
//! ordering and hashing all compare values, so `2/4 == 1/2` even though
//! the two are stored differently.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::ParseIntError;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{One, Zero};
use thiserror::Error;

use crate::math::{gcd, lcm};

/// Errors produced when building or parsing a [`Rational`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A zero denominator, or the reciprocal of / division by zero.
    #[error("cannot create a rational with a denominator of zero")]
    DivideByZero,

    /// One side of the ratio is not an integer.
    #[error("invalid integer `{input}` in ratio: {source}")]
    InvalidInteger {
        /// The offending token after trimming.
        input: String,
        /// The underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },

    /// More than one `/` separator.
    #[error("malformed ratio `{0}`, expected <int> or <int>/<int>")]
    Malformed(String),
}

impl RationalError {
    /// Returns true for the text-format failures.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            RationalError::InvalidInteger { .. } | RationalError::Malformed(_)
        )
    }
}

/// An exact fraction `numerator / denominator` with a non-zero denominator.
///
/// The pair is stored as given; no sign or gcd normalization happens
/// outside of [`Rational::simplified`].
#[derive(Clone, Copy)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// 0
    pub const ZERO: Self = Self::integer(0);
    /// 1
    pub const ONE: Self = Self::integer(1);
    /// 2
    pub const TWO: Self = Self::integer(2);
    /// 3
    pub const THREE: Self = Self::integer(3);
    /// 1/2
    pub const HALF: Self = Self {
        numerator: 1,
        denominator: 2,
    };

    /// Creates a rational from numerator and denominator without reducing.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] if the denominator is zero.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        if denominator == 0 {
            return Err(RationalError::DivideByZero);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Creates `n / 1`.
    #[must_use]
    pub const fn integer(n: i64) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }

    /// Returns the stored numerator.
    #[must_use]
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Returns the stored denominator. Never zero.
    #[must_use]
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Returns true if the denominator divides the numerator.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.numerator % self.denominator == 0
    }

    /// Returns this value in lowest terms.
    ///
    /// The divisor comes from [`gcd`], whose sign follows the denominator,
    /// so the result always has a positive denominator.
    #[must_use]
    pub fn simplified(&self) -> Self {
        let g = gcd(self.numerator, self.denominator);
        Self {
            numerator: self.numerator / g,
            denominator: self.denominator / g,
        }
    }

    /// Returns the reciprocal by swapping numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] if this value is zero.
    pub fn recip(&self) -> Result<Self, RationalError> {
        Self::new(self.denominator, self.numerator)
    }

    /// Divides by another rational: `self * rhs.recip()`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] if `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> Result<Self, RationalError> {
        Ok(self * rhs.recip()?)
    }

    /// Divides by an integer without reducing: `n / (d * k)`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] if `k` is zero.
    pub fn checked_div_int(self, k: i64) -> Result<Self, RationalError> {
        Self::new(self.numerator, self.denominator * k)
    }

    /// Converts to the nearest `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Converts to the nearest `f32`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f32(&self) -> f32 {
        self.numerator as f32 / self.denominator as f32
    }

    /// Parses `<int>` or `<int>/<int>`, trimming whitespace around each side.
    ///
    /// # Errors
    ///
    /// Returns a parse error for a non-integer side or an extra `/`, and
    /// [`RationalError::DivideByZero`] for a zero denominator.
    pub fn parse(text: &str) -> Result<Self, RationalError> {
        let mut parts = text.split('/');
        let numerator = parse_side(parts.next().unwrap_or_default())?;
        let denominator = match parts.next() {
            Some(side) => parse_side(side)?,
            None => 1,
        };
        if parts.next().is_some() {
            return Err(RationalError::Malformed(text.trim().to_string()));
        }
        Self::new(numerator, denominator)
    }

    /// Numerator and denominator of the reduced form with positive denominator.
    fn canonical_parts(&self) -> (i64, i64) {
        if self.numerator == 0 {
            return (0, 1);
        }
        let reduced = self.simplified();
        (reduced.numerator, reduced.denominator)
    }
}

fn parse_side(side: &str) -> Result<i64, RationalError> {
    let side = side.trim();
    side.parse::<i64>().map_err(|source| RationalError::InvalidInteger {
        input: side.to_string(),
        source,
    })
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        i128::from(self.numerator) * i128::from(other.denominator)
            == i128::from(other.numerator) * i128::from(self.denominator)
    }
}

impl Eq for Rational {}

impl PartialEq<i64> for Rational {
    fn eq(&self, other: &i64) -> bool {
        i128::from(self.numerator) == i128::from(*other) * i128::from(self.denominator)
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = i128::from(self.numerator) * i128::from(other.denominator);
        let rhs = i128::from(other.numerator) * i128::from(self.denominator);
        if (self.denominator < 0) == (other.denominator < 0) {
            lhs.cmp(&rhs)
        } else {
            rhs.cmp(&lhs)
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_parts().hash(state);
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else if self.numerator == 0 {
            f.write_str("0")
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::integer(i64::from(n))
    }
}

// Arithmetic operations. None of these reduce the result.
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let den = lcm(self.denominator, rhs.denominator);
        let lhs_num = self.numerator * (den / self.denominator);
        let rhs_num = rhs.numerator * (den / rhs.denominator);
        Self {
            numerator: lhs_num + rhs_num,
            denominator: den,
        }
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let den = lcm(self.denominator, rhs.denominator);
        let lhs_num = self.numerator * (den / self.denominator);
        let rhs_num = rhs.numerator * (den / rhs.denominator);
        Self {
            numerator: lhs_num - rhs_num,
            denominator: den,
        }
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            numerator: self.numerator * rhs.numerator,
            denominator: self.denominator * rhs.denominator,
        }
    }
}

impl Add<i64> for Rational {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        Self {
            numerator: self.numerator + rhs * self.denominator,
            denominator: self.denominator,
        }
    }
}

impl Sub<i64> for Rational {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self::Output {
        Self {
            numerator: self.numerator - rhs * self.denominator,
            denominator: self.denominator,
        }
    }
}

impl Mul<i64> for Rational {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self {
            numerator: self.numerator * rhs,
            denominator: self.denominator,
        }
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}
