//! # quire-integers
//!
//! Exact rational arithmetic over fixed-width integers.
//!
//! This crate provides:
//! - Integer helpers for normalization (`gcd`, `lcm`, `modulo`)
//! - An exact `Rational` that is only reduced on request
//!
//! ## Overflow
//!
//! Numerators and denominators are `i64`. Unreduced arithmetic grows
//! denominators quickly, so long chains should call
//! [`Rational::simplified`] now and then. Overflow behaves like native
//! integer arithmetic.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod math;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use math::{gcd, lcm, modulo};
pub use rational::{Rational, RationalError};
