//! Error types for the unsigned primitives.
//!
//! Only two things can go wrong at runtime: dividing by zero, and asking
//! the dynamic [`Num`](super::Num) layer for an operation that the static
//! API refuses to type-check. Everything else is total.

use thiserror::Error;

use super::kind::Kind;

/// Failure of an arithmetic operation on unsigned values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The right-hand operand of a division or remainder was zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Errors raised by the dynamically-typed [`Num`](super::Num) value.
///
/// These mirror the operations that are rejected at compile time on the
/// concrete types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumError {
    /// Widening a signed value into a wider unsigned kind.
    ///
    /// Neither zero-extension nor sign-extension is an unambiguous
    /// default, so the conversion does not exist.
    #[error("no conversion from {from} to {to}: signed values cannot widen into unsigned kinds")]
    SignedToUnsignedWidening { from: Kind, to: Kind },

    /// Ordering a signed value against an unsigned one.
    #[error("cannot order {lhs} against {rhs}: operands mix signed and unsigned kinds")]
    MixedDomain { lhs: Kind, rhs: Kind },
}
