//! # Exacta
//!
//! Exact arbitrary-precision integer and rational arithmetic.
//!
//! Exacta provides numeric types that behave like the native ones: full
//! operator support, mixed-type comparison and arithmetic with native
//! integers, consistent hashing, and exact decimal string conversion.
//!
//! ## Features
//!
//! - **BigInt**: sign-magnitude big integers with floor division and
//!   infinite two's-complement bitwise operations
//! - **BigRational**: always-reduced exact fractions
//! - **Mixed-type coercion**: native operands promote before any operation
//! - **Number theory**: `gcd`, `lcm`, `gcdext`, `factorial`
//!
//! ## Quick Start
//!
//! ```rust
//! use exacta::prelude::*;
//!
//! let a: BigInt = "123456789012345678901234567890".parse().unwrap();
//! let b = BigInt::new(-7);
//! assert_eq!(&b % &BigInt::new(3), BigInt::new(2));
//! assert_eq!((&a * &b).to_string(), "-864197523086419752308641975230");
//!
//! let half = BigRational::from_ratio(1, 2).unwrap();
//! let third = BigRational::from_ratio(1, 3).unwrap();
//! assert_eq!((half + third).to_string(), "5/6");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use exacta_integers as integers;
pub use exacta_limbs as limbs;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use exacta_integers::{
        factorial, gcd, gcdext, lcm, BigInt, BigRational, NumError, Numeric,
    };
}
