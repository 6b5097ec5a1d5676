//! # exacta-limbs
//!
//! Limb buffers and the low-level unsigned arithmetic they support.
//!
//! A [`LimbBuffer`] stores the magnitude of a big integer as a little-endian
//! vector of 64-bit limbs with no trailing zero limbs. Sign handling,
//! coercion and the user-facing types live in `exacta-integers`; this crate
//! only knows about non-negative magnitudes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod buffer;

pub use buffer::LimbBuffer;
