//! # exacta-integers
//!
//! Arbitrary precision integer and rational arithmetic with exact results.
//!
//! This crate provides:
//! - Arbitrary precision integers ([`BigInt`]) with floor division and
//!   infinite two's-complement bitwise operations
//! - Arbitrary precision rationals ([`BigRational`]), always in lowest
//!   terms with a positive denominator
//! - Mixed-type coercion ([`Numeric`]) and cross-type comparisons
//! - `gcd`, `lcm`, `gcdext` and `factorial` free functions
//!
//! All operations are pure value computations: results are newly allocated
//! canonical values and no limb storage is ever shared between instances.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coerce;
pub mod error;
pub mod functions;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use coerce::Numeric;
pub use error::NumError;
pub use functions::{factorial, gcd, gcdext, lcm};
pub use integer::{BigInt, Sign};
pub use rational::BigRational;
