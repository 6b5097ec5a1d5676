//! Arbitrary precision rational numbers.
//!
//! A [`BigRational`] is a pair of [`BigInt`]s kept in canonical form:
//! fully reduced, denominator strictly positive, sign on the numerator,
//! zero stored as `0/1`. Every constructor and arithmetic result passes
//! through the same reduction step, so equality and hashing can work
//! structurally.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::error::NumError;
use crate::functions::gcd;
use crate::integer::BigInt;

/// An arbitrary precision rational number in lowest terms.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigRational {
    numer: BigInt,
    denom: BigInt,
}

impl BigRational {
    /// Creates a rational from a numerator and a denominator, reducing to
    /// canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] when `denominator` is zero.
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self, NumError> {
        if denominator.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        Ok(Self::reduced(numerator, denominator))
    }

    /// Reduces a fraction with a known-nonzero denominator.
    fn reduced(mut numer: BigInt, mut denom: BigInt) -> Self {
        debug_assert!(!denom.is_zero());
        if numer.is_zero() {
            return Self::zero();
        }
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        let g = gcd(&numer, &denom);
        if !g.is_one() {
            numer = numer.checked_div_floor(&g).expect("gcd is nonzero");
            denom = denom.checked_div_floor(&g).expect("gcd is nonzero");
        }
        Self { numer, denom }
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: BigInt) -> Self {
        Self {
            numer: n,
            denom: BigInt::one(),
        }
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] when `denominator` is zero.
    pub fn from_ratio(numerator: i64, denominator: i64) -> Result<Self, NumError> {
        Self::new(BigInt::new(numerator), BigInt::new(denominator))
    }

    /// Builds a rational from two rational operands, read as the quotient
    /// `numerator / denominator` and reduced to canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] when `denominator` is zero.
    pub fn from_rationals(numerator: &Self, denominator: &Self) -> Result<Self, NumError> {
        numerator.checked_div(denominator)
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &BigInt {
        &self.numer
    }

    /// Returns the denominator (always strictly positive).
    #[must_use]
    pub fn denominator(&self) -> &BigInt {
        &self.denom
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numer.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numer: self.numer.abs(),
            denom: self.denom.clone(),
        }
    }

    /// Returns the value unchanged (the unary `+` of the operator set).
    #[must_use]
    pub fn pos(&self) -> Self {
        self.clone()
    }

    /// Returns the reciprocal.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] when the value is zero.
    pub fn recip(&self) -> Result<Self, NumError> {
        Self::new(self.denom.clone(), self.numer.clone())
    }

    fn add_values(&self, other: &Self) -> Self {
        Self::reduced(
            &self.numer * &other.denom + &other.numer * &self.denom,
            &self.denom * &other.denom,
        )
    }

    fn sub_values(&self, other: &Self) -> Self {
        Self::reduced(
            &self.numer * &other.denom - &other.numer * &self.denom,
            &self.denom * &other.denom,
        )
    }

    fn mul_values(&self, other: &Self) -> Self {
        Self::reduced(&self.numer * &other.numer, &self.denom * &other.denom)
    }

    /// Exact division.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] when `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, NumError> {
        if divisor.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        Ok(Self::reduced(
            &self.numer * &divisor.denom,
            &self.denom * &divisor.numer,
        ))
    }

    /// Raises to a power when both base and exponent are integral.
    ///
    /// A negative exponent inverts: `base^-n == 1 / base^n`.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::Unsupported`] when either operand has a
    /// denominator other than 1, and [`NumError::DivisionByZero`] for a
    /// zero base with a negative exponent.
    pub fn checked_pow(&self, exponent: &Self) -> Result<Self, NumError> {
        if !self.is_integer() || !exponent.is_integer() {
            return Err(NumError::Unsupported);
        }
        if exponent.numer.is_negative() {
            let raised = self.numer.checked_pow(&-(&exponent.numer))?;
            if raised.is_zero() {
                return Err(NumError::DivisionByZero);
            }
            return Self::new(BigInt::one(), raised);
        }
        Ok(Self::from_integer(self.numer.checked_pow(&exponent.numer)?))
    }

    /// Floor of the exact value as an integer.
    #[must_use]
    pub fn to_integer(&self) -> BigInt {
        self.numer
            .checked_div_floor(&self.denom)
            .expect("denominator is nonzero")
    }

    /// Exact quotient floored to an integer.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] when `divisor` is zero.
    pub fn checked_floor_div(&self, divisor: &Self) -> Result<BigInt, NumError> {
        Ok(self.checked_div(divisor)?.to_integer())
    }

    /// Modulo is deliberately not implemented for rationals.
    ///
    /// # Errors
    ///
    /// Always returns [`NumError::Unsupported`].
    pub fn checked_rem(&self, _divisor: &Self) -> Result<Self, NumError> {
        Err(NumError::Unsupported)
    }

    /// Rounding up is deliberately not implemented for rationals.
    ///
    /// # Errors
    ///
    /// Always returns [`NumError::Unsupported`].
    pub fn ceil(&self) -> Result<Self, NumError> {
        Err(NumError::Unsupported)
    }

    /// Rounding down is deliberately not implemented for rationals; see
    /// [`BigRational::to_integer`] for the floor of the exact value.
    ///
    /// # Errors
    ///
    /// Always returns [`NumError::Unsupported`].
    pub fn floor(&self) -> Result<Self, NumError> {
        Err(NumError::Unsupported)
    }

    /// Rounding to nearest is deliberately not implemented for rationals.
    ///
    /// # Errors
    ///
    /// Always returns [`NumError::Unsupported`].
    pub fn round(&self) -> Result<Self, NumError> {
        Err(NumError::Unsupported)
    }

    /// Truncation is deliberately not implemented for rationals.
    ///
    /// # Errors
    ///
    /// Always returns [`NumError::Unsupported`].
    pub fn trunc(&self) -> Result<Self, NumError> {
        Err(NumError::Unsupported)
    }

    /// Returns true if this rational is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    /// Returns true if this rational is one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        One::is_one(self)
    }

    /// The additive identity, `0/1`.
    #[must_use]
    pub fn zero() -> Self {
        Zero::zero()
    }

    /// The multiplicative identity, `1/1`.
    #[must_use]
    pub fn one() -> Self {
        One::one()
    }
}

impl Zero for BigRational {
    fn zero() -> Self {
        Self {
            numer: BigInt::zero(),
            denom: BigInt::one(),
        }
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(&self.numer)
    }
}

impl One for BigRational {
    fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    fn is_one(&self) -> bool {
        One::is_one(&self.numer) && One::is_one(&self.denom)
    }
}

impl Default for BigRational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for BigRational {
    /// Cross-multiplied comparison: both denominators are positive, so the
    /// order of `a/b` and `c/d` is the order of `a*d` and `c*b`. No
    /// floating point is involved.
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl PartialOrd for BigRational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for BigRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigRational({self})")
    }
}

impl fmt::Display for BigRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl FromStr for BigRational {
    type Err = NumError;

    /// Parses `"numerator/denominator"` or a bare integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((numer, denom)) => Self::new(numer.parse()?, denom.parse()?),
            None => Ok(Self::from_integer(s.parse()?)),
        }
    }
}

// Arithmetic operations
impl Add for BigRational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_values(&rhs)
    }
}

impl Add<&BigRational> for BigRational {
    type Output = Self;

    fn add(self, rhs: &BigRational) -> Self::Output {
        self.add_values(rhs)
    }
}

impl Add for &BigRational {
    type Output = BigRational;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_values(rhs)
    }
}

impl Sub for BigRational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_values(&rhs)
    }
}

impl Sub<&BigRational> for BigRational {
    type Output = Self;

    fn sub(self, rhs: &BigRational) -> Self::Output {
        self.sub_values(rhs)
    }
}

impl Sub for &BigRational {
    type Output = BigRational;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_values(rhs)
    }
}

impl Mul for BigRational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_values(&rhs)
    }
}

impl Mul<&BigRational> for BigRational {
    type Output = Self;

    fn mul(self, rhs: &BigRational) -> Self::Output {
        self.mul_values(rhs)
    }
}

impl Mul for &BigRational {
    type Output = BigRational;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_values(rhs)
    }
}

impl Div for BigRational {
    type Output = Self;

    /// Exact division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`BigRational::checked_div`] to
    /// handle that case.
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(&rhs).expect("division by zero")
    }
}

impl Div<&BigRational> for BigRational {
    type Output = Self;

    fn div(self, rhs: &BigRational) -> Self::Output {
        self.checked_div(rhs).expect("division by zero")
    }
}

impl Div for &BigRational {
    type Output = BigRational;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("division by zero")
    }
}

impl Neg for BigRational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Neg for &BigRational {
    type Output = BigRational;

    fn neg(self) -> Self::Output {
        BigRational {
            numer: -(&self.numer),
            denom: self.denom.clone(),
        }
    }
}

impl AddAssign<&BigRational> for BigRational {
    fn add_assign(&mut self, rhs: &BigRational) {
        *self = self.add_values(rhs);
    }
}

impl AddAssign for BigRational {
    fn add_assign(&mut self, rhs: BigRational) {
        *self += &rhs;
    }
}

impl SubAssign<&BigRational> for BigRational {
    fn sub_assign(&mut self, rhs: &BigRational) {
        *self = self.sub_values(rhs);
    }
}

impl SubAssign for BigRational {
    fn sub_assign(&mut self, rhs: BigRational) {
        *self -= &rhs;
    }
}

impl MulAssign<&BigRational> for BigRational {
    fn mul_assign(&mut self, rhs: &BigRational) {
        *self = self.mul_values(rhs);
    }
}

impl MulAssign for BigRational {
    fn mul_assign(&mut self, rhs: BigRational) {
        *self *= &rhs;
    }
}

impl From<BigInt> for BigRational {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for BigRational {
    fn from(n: i64) -> Self {
        Self::from_integer(BigInt::new(n))
    }
}

impl From<i32> for BigRational {
    fn from(n: i32) -> Self {
        Self::from_integer(BigInt::new(i64::from(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(p: i64, q: i64) -> BigRational {
        BigRational::from_ratio(p, q).unwrap()
    }

    #[test]
    fn test_basic_ops() {
        let a = ratio(1, 2);
        let b = ratio(1, 3);

        // 1/2 + 1/3 = 5/6
        let sum = a.clone() + b.clone();
        assert_eq!(sum, ratio(5, 6));

        // 1/2 * 1/3 = 1/6
        let prod = a.clone() * b.clone();
        assert_eq!(prod, ratio(1, 6));

        // 1/2 - 1/3 = 1/6
        assert_eq!(a.clone() - b.clone(), ratio(1, 6));

        // (1/2) / (1/3) = 3/2
        assert_eq!(a / b, ratio(3, 2));
    }

    #[test]
    fn test_reduction() {
        // 4/6 reduces to 2/3; the sign moves onto the numerator.
        let r = ratio(4, 6);
        assert_eq!(r.numerator(), &BigInt::new(2));
        assert_eq!(r.denominator(), &BigInt::new(3));

        let neg = ratio(3, -6);
        assert_eq!(neg.numerator(), &BigInt::new(-1));
        assert_eq!(neg.denominator(), &BigInt::new(2));

        let zero = ratio(0, -5);
        assert_eq!(zero.numerator(), &BigInt::new(0));
        assert_eq!(zero.denominator(), &BigInt::new(1));
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(
            BigRational::from_ratio(1, 0),
            Err(NumError::DivisionByZero)
        );
        assert_eq!(
            ratio(1, 1).checked_div(&ratio(0, 1)),
            Err(NumError::DivisionByZero)
        );
    }

    #[test]
    fn test_ordering_cross_multiplied() {
        assert!(ratio(1, 2) < ratio(2, 3));
        assert!(ratio(2, 1) > ratio(3, 2));
        assert!(ratio(-1, 2) < ratio(1, 3));
        assert_eq!(ratio(2, 4), ratio(1, 2));
    }

    #[test]
    fn test_pow_integral_only() {
        assert_eq!(
            ratio(3, 1).checked_pow(&ratio(4, 1)),
            Ok(ratio(81, 1))
        );
        assert_eq!(
            ratio(2, 1).checked_pow(&ratio(-3, 1)),
            Ok(ratio(1, 8))
        );
        assert_eq!(
            ratio(1, 2).checked_pow(&ratio(2, 1)),
            Err(NumError::Unsupported)
        );
        assert_eq!(
            ratio(2, 1).checked_pow(&ratio(1, 2)),
            Err(NumError::Unsupported)
        );
        assert_eq!(
            ratio(0, 1).checked_pow(&ratio(-1, 1)),
            Err(NumError::DivisionByZero)
        );
    }

    #[test]
    fn test_to_integer_floors() {
        assert_eq!(ratio(7, 2).to_integer(), BigInt::new(3));
        assert_eq!(ratio(-7, 2).to_integer(), BigInt::new(-4));
        assert_eq!(ratio(6, 3).to_integer(), BigInt::new(2));
    }

    #[test]
    fn test_floor_div() {
        assert_eq!(
            ratio(7, 2).checked_floor_div(&ratio(1, 3)),
            Ok(BigInt::new(10))
        );
        assert_eq!(
            ratio(1, 1).checked_floor_div(&ratio(0, 1)),
            Err(NumError::DivisionByZero)
        );
    }

    #[test]
    fn test_unsupported_surface() {
        let r = ratio(1, 2);
        assert_eq!(r.checked_rem(&r), Err(NumError::Unsupported));
        assert_eq!(r.ceil(), Err(NumError::Unsupported));
        assert_eq!(r.floor(), Err(NumError::Unsupported));
        assert_eq!(r.round(), Err(NumError::Unsupported));
        assert_eq!(r.trunc(), Err(NumError::Unsupported));
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(ratio(3, 1).to_string(), "3");
        assert_eq!(ratio(2, 3).to_string(), "2/3");
        assert_eq!(ratio(-2, 3).to_string(), "-2/3");

        assert_eq!("2/3".parse::<BigRational>(), Ok(ratio(2, 3)));
        assert_eq!("-6/9".parse::<BigRational>(), Ok(ratio(-2, 3)));
        assert_eq!("5".parse::<BigRational>(), Ok(ratio(5, 1)));
        assert_eq!("1/0".parse::<BigRational>(), Err(NumError::DivisionByZero));
        assert_eq!("a/2".parse::<BigRational>(), Err(NumError::InvalidLiteral));
    }

    #[test]
    fn test_compound_assignment() {
        let mut x = ratio(1, 2);
        x += ratio(1, 3);
        assert_eq!(x, ratio(5, 6));
        x -= ratio(1, 6);
        assert_eq!(x, ratio(2, 3));
        x *= ratio(3, 4);
        assert_eq!(x, ratio(1, 2));
    }

    #[test]
    fn test_from_rationals() {
        // 3/4 over 1/2 is the quotient 3/2.
        let q = BigRational::from_rationals(&ratio(3, 4), &ratio(1, 2));
        assert_eq!(q, Ok(ratio(3, 2)));
        assert_eq!(
            BigRational::from_rationals(&ratio(1, 2), &ratio(0, 1)),
            Err(NumError::DivisionByZero)
        );
    }

    #[test]
    fn test_recip() {
        assert_eq!(ratio(2, 3).recip(), Ok(ratio(3, 2)));
        assert_eq!(ratio(-2, 3).recip(), Ok(ratio(-3, 2)));
        assert_eq!(ratio(0, 1).recip(), Err(NumError::DivisionByZero));
    }
}
