//! Mixed-type coercion.
//!
//! Every binary entry point promotes native operands to the engine's own
//! types before dispatching. The closed variant set [`Numeric`] covers the
//! four numeric kinds the engine understands; conversion out of it is
//! explicit and fallible, never a silent coercion.

use std::cmp::Ordering;

use crate::error::NumError;
use crate::integer::BigInt;
use crate::rational::BigRational;

/// A value of one of the four numeric kinds the engine can coerce.
#[derive(Clone, Debug, PartialEq)]
pub enum Numeric {
    /// A native integer.
    Int(i64),
    /// A native rational as a numerator/denominator pair.
    Ratio(i64, i64),
    /// A big integer.
    Big(BigInt),
    /// A big rational.
    BigRatio(BigRational),
}

impl Numeric {
    /// Coerces to a [`BigInt`].
    ///
    /// # Errors
    ///
    /// Returns [`NumError::TypeMismatch`] when the value is a rational
    /// with a denominator other than 1, and [`NumError::DivisionByZero`]
    /// for a native rational with a zero denominator.
    pub fn into_integer(self) -> Result<BigInt, NumError> {
        match self {
            Self::Int(v) => Ok(BigInt::new(v)),
            Self::Big(z) => Ok(z),
            Self::Ratio(p, q) => {
                let r = BigRational::from_ratio(p, q)?;
                Self::BigRatio(r).into_integer()
            }
            Self::BigRatio(r) => {
                if r.is_integer() {
                    Ok(r.numerator().clone())
                } else {
                    Err(NumError::TypeMismatch)
                }
            }
        }
    }

    /// Coerces to a [`BigRational`].
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] for a native rational with a
    /// zero denominator.
    pub fn into_rational(self) -> Result<BigRational, NumError> {
        match self {
            Self::Int(v) => Ok(BigRational::from(v)),
            Self::Big(z) => Ok(BigRational::from_integer(z)),
            Self::Ratio(p, q) => BigRational::from_ratio(p, q),
            Self::BigRatio(r) => Ok(r),
        }
    }

    /// The total order across the variant set, computed by promoting both
    /// sides to rationals.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] when either side is a native
    /// rational with a zero denominator.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, NumError> {
        let a = self.clone().into_rational()?;
        let b = other.clone().into_rational()?;
        Ok(a.cmp(&b))
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<(i64, i64)> for Numeric {
    fn from((numer, denom): (i64, i64)) -> Self {
        Self::Ratio(numer, denom)
    }
}

impl From<BigInt> for Numeric {
    fn from(value: BigInt) -> Self {
        Self::Big(value)
    }
}

impl From<BigRational> for Numeric {
    fn from(value: BigRational) -> Self {
        Self::BigRatio(value)
    }
}

// A BigInt equals a BigRational iff the rational's denominator is 1 and
// the numerators match; ordering falls back to cross-multiplication.
impl PartialEq<BigRational> for BigInt {
    fn eq(&self, other: &BigRational) -> bool {
        other.is_integer() && other.numerator() == self
    }
}

impl PartialEq<BigInt> for BigRational {
    fn eq(&self, other: &BigInt) -> bool {
        other == self
    }
}

impl PartialOrd<BigRational> for BigInt {
    fn partial_cmp(&self, other: &BigRational) -> Option<Ordering> {
        Some((self * other.denominator()).cmp(other.numerator()))
    }
}

impl PartialOrd<BigInt> for BigRational {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.numerator().cmp(&(other * self.denominator())))
    }
}

impl PartialEq<i64> for BigInt {
    fn eq(&self, other: &i64) -> bool {
        self.to_i64() == Some(*other)
    }
}

impl PartialEq<BigInt> for i64 {
    fn eq(&self, other: &BigInt) -> bool {
        other == self
    }
}

impl PartialOrd<i64> for BigInt {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp(&BigInt::new(*other)))
    }
}

impl PartialOrd<BigInt> for i64 {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(BigInt::new(*self).cmp(other))
    }
}

impl PartialEq<i64> for BigRational {
    fn eq(&self, other: &i64) -> bool {
        self.is_integer() && self.numerator() == &BigInt::new(*other)
    }
}

impl PartialEq<BigRational> for i64 {
    fn eq(&self, other: &BigRational) -> bool {
        other == self
    }
}

impl PartialOrd<i64> for BigRational {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.partial_cmp(&BigInt::new(*other))
    }
}

impl PartialOrd<BigRational> for i64 {
    fn partial_cmp(&self, other: &BigRational) -> Option<Ordering> {
        BigInt::new(*self).partial_cmp(other)
    }
}

/// Generates the mixed-operand operator impls that promote an `i64` to the
/// engine type before dispatching.
macro_rules! mixed_int_ops {
    ($big:ty, $( $trait:ident :: $method:ident ),+ $(,)?) => {
        $(
            impl std::ops::$trait<i64> for $big {
                type Output = $big;

                fn $method(self, rhs: i64) -> $big {
                    std::ops::$trait::$method(self, <$big>::from(rhs))
                }
            }

            impl std::ops::$trait<i64> for &$big {
                type Output = $big;

                fn $method(self, rhs: i64) -> $big {
                    std::ops::$trait::$method(self, &<$big>::from(rhs))
                }
            }

            impl std::ops::$trait<$big> for i64 {
                type Output = $big;

                fn $method(self, rhs: $big) -> $big {
                    std::ops::$trait::$method(<$big>::from(self), rhs)
                }
            }

            impl std::ops::$trait<&$big> for i64 {
                type Output = $big;

                fn $method(self, rhs: &$big) -> $big {
                    std::ops::$trait::$method(&<$big>::from(self), rhs)
                }
            }
        )+
    };
}

mixed_int_ops!(
    BigInt,
    Add::add,
    Sub::sub,
    Mul::mul,
    Div::div,
    Rem::rem,
    BitAnd::bitand,
    BitOr::bitor,
    BitXor::bitxor,
);

mixed_int_ops!(BigRational, Add::add, Sub::sub, Mul::mul, Div::div);

/// Generates compound assignment from an `i64` operand.
macro_rules! mixed_int_assign_ops {
    ($big:ty, $( $trait:ident :: $method:ident ),+ $(,)?) => {
        $(
            impl std::ops::$trait<i64> for $big {
                fn $method(&mut self, rhs: i64) {
                    std::ops::$trait::$method(self, <$big>::from(rhs));
                }
            }
        )+
    };
}

mixed_int_assign_ops!(
    BigInt,
    AddAssign::add_assign,
    SubAssign::sub_assign,
    MulAssign::mul_assign,
    RemAssign::rem_assign,
    BitAndAssign::bitand_assign,
    BitOrAssign::bitor_assign,
    BitXorAssign::bitxor_assign,
);

mixed_int_assign_ops!(
    BigRational,
    AddAssign::add_assign,
    SubAssign::sub_assign,
    MulAssign::mul_assign,
);
