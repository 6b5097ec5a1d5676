//! Number-theoretic free functions over [`BigInt`].

use exacta_limbs::LimbBuffer;

use crate::error::NumError;
use crate::integer::{BigInt, Sign};

/// Computes the greatest common divisor, always non-negative.
///
/// `gcd(0, 0)` is 0 by convention.
#[must_use]
pub fn gcd(x: &BigInt, y: &BigInt) -> BigInt {
    // Euclid on magnitudes; signs never matter for the gcd.
    let mut a = x.magnitude().clone();
    let mut b = y.magnitude().clone();
    while !b.is_zero() {
        let (_, r) = a.div_rem(&b);
        a = b;
        b = r;
    }
    BigInt::from_parts(Sign::Positive, a)
}

/// Computes the least common multiple, always non-negative.
///
/// Zero when either argument is zero.
#[must_use]
pub fn lcm(x: &BigInt, y: &BigInt) -> BigInt {
    if x.is_zero() || y.is_zero() {
        return BigInt::zero();
    }
    let g = gcd(x, y);
    let (reduced, _) = x.magnitude().div_rem(g.magnitude());
    BigInt::from_parts(Sign::Positive, reduced.mul(y.magnitude()))
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, s, t)` with `g = gcd(x, y) = s*x + t*y` and `g >= 0`.
#[must_use]
pub fn gcdext(x: &BigInt, y: &BigInt) -> (BigInt, BigInt, BigInt) {
    let mut old_r = x.clone();
    let mut r = y.clone();
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();
    let mut old_t = BigInt::zero();
    let mut t = BigInt::one();

    while !r.is_zero() {
        let (q, rem) = old_r
            .checked_div_rem_floor(&r)
            .expect("loop guard keeps the divisor nonzero");
        old_r = r;
        r = rem;

        let next_s = old_s - &q * &s;
        old_s = s;
        s = next_s;

        let next_t = old_t - &q * &t;
        old_t = t;
        t = next_t;
    }

    if old_r.is_negative() {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Computes `n!` for non-negative `n`.
///
/// # Errors
///
/// Returns [`NumError::InvalidArgument`] when `n` is negative or too large
/// to iterate.
pub fn factorial(n: &BigInt) -> Result<BigInt, NumError> {
    if n.is_negative() {
        return Err(NumError::InvalidArgument);
    }
    let count = n.to_i64().ok_or(NumError::InvalidArgument)?;
    let mut acc = LimbBuffer::from_limb(1);
    for i in 2..=count.unsigned_abs() {
        acc = acc.mul(&LimbBuffer::from_limb(i));
    }
    Ok(BigInt::from_parts(Sign::Positive, acc))
}
