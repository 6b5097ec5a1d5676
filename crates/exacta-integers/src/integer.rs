//! Arbitrary precision signed integers.
//!
//! A [`BigInt`] is a sign plus a [`LimbBuffer`] magnitude. The
//! representation is canonical: zero has [`Sign::Zero`] and an empty
//! magnitude, every other value has a nonzero most significant limb.
//!
//! Division and modulo use floor semantics: the quotient rounds toward
//! negative infinity and the remainder takes the divisor's sign.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, Mul,
    MulAssign, Neg, Not, Rem, RemAssign, Sub, SubAssign,
};
use std::str::FromStr;

use exacta_limbs::LimbBuffer;
use num_traits::{One, Zero};

use crate::error::NumError;

/// The sign of a [`BigInt`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Sign {
    /// Strictly negative.
    Negative,
    /// Exactly zero.
    #[default]
    Zero,
    /// Strictly positive.
    Positive,
}

impl Sign {
    /// The opposite sign; zero stays zero.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
            Self::Positive => Self::Negative,
        }
    }

    /// The sign of a product.
    #[must_use]
    pub fn product(self, other: Self) -> Self {
        match (self, other) {
            (Self::Zero, _) | (_, Self::Zero) => Self::Zero,
            (a, b) if a == b => Self::Positive,
            _ => Self::Negative,
        }
    }
}

/// An arbitrary precision signed integer.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct BigInt {
    sign: Sign,
    mag: LimbBuffer,
}

impl BigInt {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        let sign = match value.cmp(&0) {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        };
        Self {
            sign,
            mag: LimbBuffer::from_limb(value.unsigned_abs()),
        }
    }

    /// Assembles an integer from a sign and a magnitude, forcing the
    /// canonical zero when the magnitude is empty.
    pub(crate) fn from_parts(sign: Sign, mag: LimbBuffer) -> Self {
        if mag.is_zero() {
            Self::default()
        } else {
            debug_assert!(sign != Sign::Zero, "nonzero magnitude needs a sign");
            Self { sign, mag }
        }
    }

    /// Returns the magnitude.
    pub(crate) fn magnitude(&self) -> &LimbBuffer {
        &self.mag
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match self.sign {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Returns true if this integer is positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_parts(
            if self.sign == Sign::Zero {
                Sign::Zero
            } else {
                Sign::Positive
            },
            self.mag.clone(),
        )
    }

    /// Returns the value unchanged (the unary `+` of the operator set).
    #[must_use]
    pub fn pos(&self) -> Self {
        self.clone()
    }

    /// Returns the number of bits in the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.mag.bit_len()
    }

    /// The value itself; integers are their own numerator.
    #[must_use]
    pub fn numerator(&self) -> Self {
        self.clone()
    }

    /// Always one for an integer.
    #[must_use]
    pub fn denominator(&self) -> Self {
        Self::one()
    }

    fn add_values(&self, other: &Self) -> Self {
        match (self.sign, other.sign) {
            (Sign::Zero, _) => other.clone(),
            (_, Sign::Zero) => self.clone(),
            (a, b) if a == b => Self::from_parts(a, self.mag.add(&other.mag)),
            _ => match self.mag.cmp_mag(&other.mag) {
                Ordering::Equal => Self::default(),
                Ordering::Greater => Self::from_parts(self.sign, self.mag.sub(&other.mag)),
                Ordering::Less => Self::from_parts(other.sign, other.mag.sub(&self.mag)),
            },
        }
    }

    fn sub_values(&self, other: &Self) -> Self {
        self.add_values(&Self::from_parts(other.sign.flip(), other.mag.clone()))
    }

    fn mul_values(&self, other: &Self) -> Self {
        Self::from_parts(self.sign.product(other.sign), self.mag.mul(&other.mag))
    }

    /// Floor division and modulo in one pass.
    ///
    /// The quotient rounds toward negative infinity; the remainder is zero
    /// or takes the divisor's sign.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] when `divisor` is zero.
    pub fn checked_div_rem_floor(&self, divisor: &Self) -> Result<(Self, Self), NumError> {
        if divisor.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        let (q_mag, r_mag) = self.mag.div_rem(&divisor.mag);
        let mut quotient = Self::from_parts(self.sign.product(divisor.sign), q_mag);
        let mut remainder = Self::from_parts(self.sign, r_mag);
        if !remainder.is_zero() && self.sign != divisor.sign {
            quotient = quotient.sub_values(&Self::one());
            remainder = remainder.add_values(divisor);
        }
        Ok((quotient, remainder))
    }

    /// Floor division.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] when `divisor` is zero.
    pub fn checked_div_floor(&self, divisor: &Self) -> Result<Self, NumError> {
        Ok(self.checked_div_rem_floor(divisor)?.0)
    }

    /// Floor modulo.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] when `divisor` is zero.
    pub fn checked_rem_floor(&self, divisor: &Self) -> Result<Self, NumError> {
        Ok(self.checked_div_rem_floor(divisor)?.1)
    }

    /// Exact true division is deliberately not provided for integers.
    ///
    /// Promote both operands to [`crate::BigRational`] for an exact
    /// quotient.
    ///
    /// # Errors
    ///
    /// Always returns [`NumError::Unsupported`].
    pub fn checked_true_div(&self, _divisor: &Self) -> Result<Self, NumError> {
        Err(NumError::Unsupported)
    }

    /// Raises to a non-negative power by repeated squaring.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::InvalidExponent`] when `exponent` is negative.
    pub fn checked_pow(&self, exponent: &Self) -> Result<Self, NumError> {
        if exponent.is_negative() {
            return Err(NumError::InvalidExponent);
        }
        let bits = exponent.mag.bit_len();
        let mut result = Self::one();
        let mut base = self.clone();
        for i in 0..bits {
            if exponent.mag.bit(i) {
                result = result.mul_values(&base);
            }
            if i + 1 < bits {
                base = base.mul_values(&base);
            }
        }
        Ok(result)
    }

    /// Modular exponentiation by repeated squaring.
    ///
    /// The result is reduced into `[0, |modulus|)`.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::InvalidExponent`] when `exponent` is negative
    /// and [`NumError::DivisionByZero`] when `modulus` is zero.
    pub fn checked_pow_mod(&self, exponent: &Self, modulus: &Self) -> Result<Self, NumError> {
        if exponent.is_negative() {
            return Err(NumError::InvalidExponent);
        }
        if modulus.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        let m = modulus.abs();
        let bits = exponent.mag.bit_len();
        let mut result = Self::one().checked_rem_floor(&m)?;
        let mut base = self.checked_rem_floor(&m)?;
        for i in 0..bits {
            if exponent.mag.bit(i) {
                result = result.mul_values(&base).checked_rem_floor(&m)?;
            }
            if i + 1 < bits {
                base = base.mul_values(&base).checked_rem_floor(&m)?;
            }
        }
        Ok(result)
    }

    /// Left shift is deliberately not implemented for big integers.
    ///
    /// # Errors
    ///
    /// Always returns [`NumError::Unsupported`].
    pub fn checked_shl(&self, _amount: &Self) -> Result<Self, NumError> {
        Err(NumError::Unsupported)
    }

    /// Right shift, only when both operands fit a native integer.
    ///
    /// This is a known limitation, not a general big-integer shift: the
    /// value and the shift amount are lowered to `i64` and shifted with
    /// native floor semantics.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::Unsupported`] when either operand does not fit
    /// an `i64`, and [`NumError::InvalidArgument`] for a negative shift.
    pub fn checked_shr(&self, amount: &Self) -> Result<Self, NumError> {
        let (Some(value), Some(shift)) = (self.to_i64(), amount.to_i64()) else {
            return Err(NumError::Unsupported);
        };
        if shift < 0 {
            return Err(NumError::InvalidArgument);
        }
        let shifted = if shift >= 64 {
            // Arithmetic shift past the width saturates to the sign.
            if value < 0 {
                -1
            } else {
                0
            }
        } else {
            value >> shift
        };
        Ok(Self::new(shifted))
    }

    /// Already integral: returns the value unchanged.
    #[must_use]
    pub fn ceil(&self) -> Self {
        self.clone()
    }

    /// Already integral: returns the value unchanged.
    #[must_use]
    pub fn floor(&self) -> Self {
        self.clone()
    }

    /// Already integral: returns the value unchanged.
    #[must_use]
    pub fn round(&self) -> Self {
        self.clone()
    }

    /// Already integral: returns the value unchanged.
    #[must_use]
    pub fn trunc(&self) -> Self {
        self.clone()
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        match self.sign {
            Sign::Zero => Some(0),
            Sign::Positive => {
                if self.mag.bit_len() <= 63 {
                    Some(self.mag.limbs()[0] as i64)
                } else {
                    None
                }
            }
            Sign::Negative => {
                let bits = self.mag.bit_len();
                if bits <= 63 {
                    Some(-(self.mag.limbs()[0] as i64))
                } else if bits == 64 && self.mag.limbs()[0] == 1 << 63 {
                    Some(i64::MIN)
                } else {
                    None
                }
            }
        }
    }

    /// Converts to an f64, losing precision for wide values and
    /// overflowing to infinity past the float range.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let bits = self.mag.bit_len();
        let magnitude = if bits <= 64 {
            self.mag.limbs()[0] as f64
        } else {
            let shift = bits - 64;
            let top = self.mag.shr_bits(shift).limbs()[0];
            (top as f64) * (shift as f64).exp2()
        };
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// Applies `f` limbwise over the infinite two's-complement images of both
/// operands, then converts the result back to sign-magnitude.
///
/// Negative operands are streamed through limbwise negation (`!limb` plus
/// a running carry), so no two's-complement buffer is ever materialized.
fn bitwise(a: &BigInt, b: &BigInt, f: impl Fn(u64, u64) -> u64) -> BigInt {
    fn twos_limb(v: &BigInt, i: usize, carry: &mut u64) -> u64 {
        let limb = v.mag.limbs().get(i).copied().unwrap_or(0);
        if v.is_negative() {
            let t = u128::from(!limb) + u128::from(*carry);
            *carry = (t >> 64) as u64;
            t as u64
        } else {
            limb
        }
    }

    let width = a.mag.len().max(b.mag.len()) + 1;
    let mut carry_a = 1u64;
    let mut carry_b = 1u64;
    let mut out = Vec::with_capacity(width);
    for i in 0..width {
        let limb_a = twos_limb(a, i, &mut carry_a);
        let limb_b = twos_limb(b, i, &mut carry_b);
        out.push(f(limb_a, limb_b));
    }

    // The sign-extension limbs are constant, so one application of `f`
    // to them decides the result's sign.
    let ext = |v: &BigInt| if v.is_negative() { u64::MAX } else { 0 };
    let negative = f(ext(a), ext(b)) != 0;
    if negative {
        // Negate back out of two's complement to recover the magnitude.
        let mut carry = 1u64;
        for limb in &mut out {
            let t = u128::from(!*limb) + u128::from(carry);
            *limb = t as u64;
            carry = (t >> 64) as u64;
        }
    }
    BigInt::from_parts(
        if negative { Sign::Negative } else { Sign::Positive },
        LimbBuffer::from_limbs(out),
    )
}

impl Zero for BigInt {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }
}

impl One for BigInt {
    fn one() -> Self {
        Self::new(1)
    }

    fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.mag.limbs() == [1]
    }
}

impl BigInt {
    /// Returns true if this integer is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    /// Returns true if this integer is one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        One::is_one(self)
    }

    /// The additive identity.
    #[must_use]
    pub fn zero() -> Self {
        Zero::zero()
    }

    /// The multiplicative identity.
    #[must_use]
    pub fn one() -> Self {
        One::one()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Zero => Ordering::Equal,
                Sign::Positive => self.mag.cmp_mag(&other.mag),
                Sign::Negative => other.mag.cmp_mag(&self.mag),
            },
            ord => ord,
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Values that fit an i64 hash exactly as the i64 does, so a BigInt
        // and a native integer of equal value are interchangeable map keys.
        if let Some(small) = self.to_i64() {
            small.hash(state);
        } else {
            self.signum().hash(state);
            self.mag.limbs().hash(state);
        }
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-")?;
        }
        write!(f, "{}", self.mag.to_decimal())
    }
}

impl FromStr for BigInt {
    type Err = NumError;

    /// Parses an optional leading `-` followed by one or more ASCII digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, s),
        };
        let mag = LimbBuffer::from_decimal(digits).ok_or(NumError::InvalidLiteral)?;
        Ok(Self::from_parts(sign, mag))
    }
}

// Arithmetic operations
impl Add for BigInt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_values(&rhs)
    }
}

impl Add<&BigInt> for BigInt {
    type Output = Self;

    fn add(self, rhs: &BigInt) -> Self::Output {
        self.add_values(rhs)
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_values(rhs)
    }
}

impl Sub for BigInt {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_values(&rhs)
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = Self;

    fn sub(self, rhs: &BigInt) -> Self::Output {
        self.sub_values(rhs)
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_values(rhs)
    }
}

impl Mul for BigInt {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_values(&rhs)
    }
}

impl Mul<&BigInt> for BigInt {
    type Output = Self;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        self.mul_values(rhs)
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_values(rhs)
    }
}

impl Div for BigInt {
    type Output = Self;

    /// Floor division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`BigInt::checked_div_floor`] to
    /// handle that case.
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div_floor(&rhs).expect("division by zero")
    }
}

impl Div<&BigInt> for BigInt {
    type Output = Self;

    fn div(self, rhs: &BigInt) -> Self::Output {
        self.checked_div_floor(rhs).expect("division by zero")
    }
}

impl Div for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div_floor(rhs).expect("division by zero")
    }
}

impl Rem for BigInt {
    type Output = Self;

    /// Floor modulo: the result is zero or takes the divisor's sign.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`BigInt::checked_rem_floor`] to
    /// handle that case.
    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem_floor(&rhs).expect("division by zero")
    }
}

impl Rem<&BigInt> for BigInt {
    type Output = Self;

    fn rem(self, rhs: &BigInt) -> Self::Output {
        self.checked_rem_floor(rhs).expect("division by zero")
    }
}

impl Rem for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem_floor(rhs).expect("division by zero")
    }
}

impl Neg for BigInt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_parts(self.sign.flip(), self.mag)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        BigInt::from_parts(self.sign.flip(), self.mag.clone())
    }
}

impl Not for BigInt {
    type Output = Self;

    /// Infinite two's-complement complement: `!x == -(x + 1)`.
    fn not(self) -> Self::Output {
        -(self + BigInt::one())
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        -(self + &BigInt::one())
    }
}

impl BitAnd for BigInt {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        bitwise(&self, &rhs, |a, b| a & b)
    }
}

impl BitAnd<&BigInt> for BigInt {
    type Output = Self;

    fn bitand(self, rhs: &BigInt) -> Self::Output {
        bitwise(&self, rhs, |a, b| a & b)
    }
}

impl BitAnd for &BigInt {
    type Output = BigInt;

    fn bitand(self, rhs: Self) -> Self::Output {
        bitwise(self, rhs, |a, b| a & b)
    }
}

impl BitOr for BigInt {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        bitwise(&self, &rhs, |a, b| a | b)
    }
}

impl BitOr<&BigInt> for BigInt {
    type Output = Self;

    fn bitor(self, rhs: &BigInt) -> Self::Output {
        bitwise(&self, rhs, |a, b| a | b)
    }
}

impl BitOr for &BigInt {
    type Output = BigInt;

    fn bitor(self, rhs: Self) -> Self::Output {
        bitwise(self, rhs, |a, b| a | b)
    }
}

impl BitXor for BigInt {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        bitwise(&self, &rhs, |a, b| a ^ b)
    }
}

impl BitXor<&BigInt> for BigInt {
    type Output = Self;

    fn bitxor(self, rhs: &BigInt) -> Self::Output {
        bitwise(&self, rhs, |a, b| a ^ b)
    }
}

impl BitXor for &BigInt {
    type Output = BigInt;

    fn bitxor(self, rhs: Self) -> Self::Output {
        bitwise(self, rhs, |a, b| a ^ b)
    }
}

// Compound assignment rebinds a freshly computed canonical value; no
// buffer is mutated while another owner can still observe it.
impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = self.add_values(rhs);
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: BigInt) {
        *self += &rhs;
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = self.sub_values(rhs);
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: BigInt) {
        *self -= &rhs;
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = self.mul_values(rhs);
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: BigInt) {
        *self *= &rhs;
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = self.checked_rem_floor(rhs).expect("division by zero");
    }
}

impl RemAssign for BigInt {
    fn rem_assign(&mut self, rhs: BigInt) {
        *self %= &rhs;
    }
}

impl BitAndAssign<&BigInt> for BigInt {
    fn bitand_assign(&mut self, rhs: &BigInt) {
        *self = bitwise(self, rhs, |a, b| a & b);
    }
}

impl BitAndAssign for BigInt {
    fn bitand_assign(&mut self, rhs: BigInt) {
        *self &= &rhs;
    }
}

impl BitOrAssign<&BigInt> for BigInt {
    fn bitor_assign(&mut self, rhs: &BigInt) {
        *self = bitwise(self, rhs, |a, b| a | b);
    }
}

impl BitOrAssign for BigInt {
    fn bitor_assign(&mut self, rhs: BigInt) {
        *self |= &rhs;
    }
}

impl BitXorAssign<&BigInt> for BigInt {
    fn bitxor_assign(&mut self, rhs: &BigInt) {
        *self = bitwise(self, rhs, |a, b| a ^ b);
    }
}

impl BitXorAssign for BigInt {
    fn bitxor_assign(&mut self, rhs: BigInt) {
        *self ^= &rhs;
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::from_parts(Sign::Positive, LimbBuffer::from_limb(value))
    }
}
