//! Error type shared by the integer and rational engines.

use thiserror::Error;

/// Errors surfaced by arithmetic operations.
///
/// All errors are synchronous and local: an operation either completes
/// fully or fails without mutating its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumError {
    /// A decimal string was malformed.
    #[error("malformed decimal literal")]
    InvalidLiteral,

    /// An operand could not be coerced to the required numeric kind.
    #[error("operand is not coercible to the required numeric kind")]
    TypeMismatch,

    /// A zero divisor in division, modulo, or rational construction.
    #[error("division by zero")]
    DivisionByZero,

    /// A negative exponent where only non-negative exponents are defined.
    #[error("exponent must be non-negative")]
    InvalidExponent,

    /// An argument outside the operation's domain.
    #[error("argument outside the operation's domain")]
    InvalidArgument,

    /// An operation deliberately left unimplemented for this type.
    #[error("operation not supported for this type")]
    Unsupported,
}
