//! Arithmetic, bitwise and shift operations for the unsigned kinds
//!
//! All operators are defined only between unsigned operands; there is no
//! impl pairing an unsigned kind with a signed one, so mixing domains is a
//! type error rather than a runtime coercion. Negation and an arithmetic
//! right shift are not provided at all.
//!
//! Operands are promoted before the operation runs:
//! - if either side is `UInt64`, both are widened to `UInt64`;
//! - otherwise both are widened to `UInt32`.
//!
//! Widening is zero-extension, so promotion never changes a value. After
//! promotion:
//! - `+`, `-`, `*` wrap modulo 2^N, using the wrapping arithmetic of the
//!   same-width signed word on the unchanged bit pattern;
//! - `/`, `%` are true unsigned division over `0..=2^N - 1`, and panic on a
//!   zero divisor (use [`UInt32::try_div`] and friends to handle it);
//! - `&`, `|`, `^`, `!` operate on the signed word directly, so they commute
//!   with reinterpretation by construction;
//! - `<<` and `>>` take an unsigned shift count modulo the working width;
//!   `>>` is always logical.

use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use super::conv::{ToUInt32, ToUInt64};
use super::error::ArithmeticError;
use super::{UInt8, UInt16, UInt32, UInt64};

macro_rules! same_width_ops {
    ($($Name:ident),*) => {
        $(
            impl $Name {
                /// Addition modulo `2^BITS`.
                #[inline]
                pub const fn wrapping_add(self, rhs: Self) -> Self {
                    Self(self.0.wrapping_add(rhs.0))
                }

                /// Subtraction modulo `2^BITS`.
                #[inline]
                pub const fn wrapping_sub(self, rhs: Self) -> Self {
                    Self(self.0.wrapping_sub(rhs.0))
                }

                /// Multiplication modulo `2^BITS`.
                ///
                /// The low `BITS` bits of a product do not depend on how the
                /// operands are read, so the signed multiply is exact here.
                #[inline]
                pub const fn wrapping_mul(self, rhs: Self) -> Self {
                    Self(self.0.wrapping_mul(rhs.0))
                }

                /// Unsigned quotient, or [`ArithmeticError::DivisionByZero`].
                #[inline]
                pub const fn try_div(self, rhs: Self) -> Result<Self, ArithmeticError> {
                    if rhs.0 == 0 {
                        return Err(ArithmeticError::DivisionByZero);
                    }

                    Ok(Self::new(self.get() / rhs.get()))
                }

                /// Unsigned remainder, or [`ArithmeticError::DivisionByZero`].
                ///
                /// Satisfies `a == (a / b) * b + (a % b)` for every non-zero `b`.
                #[inline]
                pub const fn try_rem(self, rhs: Self) -> Result<Self, ArithmeticError> {
                    if rhs.0 == 0 {
                        return Err(ArithmeticError::DivisionByZero);
                    }

                    Ok(Self::new(self.get() % rhs.get()))
                }

                /// Left shift by `count % BITS`, without promotion.
                #[inline]
                pub const fn shift_left(self, count: u32) -> Self {
                    Self(self.0.wrapping_shl(count))
                }

                /// Logical right shift by `count % BITS`, without promotion.
                ///
                /// Zeros are shifted in; the top bit is never replicated.
                #[inline]
                pub const fn logical_shift_right(self, count: u32) -> Self {
                    Self::new(self.get().wrapping_shr(count))
                }
            }

            impl Not for $Name {
                type Output = $Name;

                #[inline]
                fn not(self) -> $Name {
                    $Name(!self.0)
                }
            }
        )*
    };
}

same_width_ops!(UInt8, UInt16, UInt32, UInt64);

fn or_panic<T>(result: Result<T, ArithmeticError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

macro_rules! promoted_binops {
    ($($L:ident, $R:ident => $Out:ident via $to:ident;)*) => {
        $(
            impl Add<$R> for $L {
                type Output = $Out;

                #[inline]
                fn add(self, rhs: $R) -> $Out {
                    self.$to().wrapping_add(rhs.$to())
                }
            }

            impl Sub<$R> for $L {
                type Output = $Out;

                #[inline]
                fn sub(self, rhs: $R) -> $Out {
                    self.$to().wrapping_sub(rhs.$to())
                }
            }

            impl Mul<$R> for $L {
                type Output = $Out;

                #[inline]
                fn mul(self, rhs: $R) -> $Out {
                    self.$to().wrapping_mul(rhs.$to())
                }
            }

            /// Unsigned division. Panics if `rhs` is zero.
            impl Div<$R> for $L {
                type Output = $Out;

                #[inline]
                fn div(self, rhs: $R) -> $Out {
                    or_panic(self.$to().try_div(rhs.$to()))
                }
            }

            /// Unsigned remainder. Panics if `rhs` is zero.
            impl Rem<$R> for $L {
                type Output = $Out;

                #[inline]
                fn rem(self, rhs: $R) -> $Out {
                    or_panic(self.$to().try_rem(rhs.$to()))
                }
            }

            impl BitAnd<$R> for $L {
                type Output = $Out;

                #[inline]
                fn bitand(self, rhs: $R) -> $Out {
                    $Out(self.$to().0 & rhs.$to().0)
                }
            }

            impl BitOr<$R> for $L {
                type Output = $Out;

                #[inline]
                fn bitor(self, rhs: $R) -> $Out {
                    $Out(self.$to().0 | rhs.$to().0)
                }
            }

            impl BitXor<$R> for $L {
                type Output = $Out;

                #[inline]
                fn bitxor(self, rhs: $R) -> $Out {
                    $Out(self.$to().0 ^ rhs.$to().0)
                }
            }
        )*
    };
}

promoted_binops! {
    UInt8, UInt8 => UInt32 via to_uint32;
    UInt8, UInt16 => UInt32 via to_uint32;
    UInt8, UInt32 => UInt32 via to_uint32;
    UInt8, UInt64 => UInt64 via to_uint64;

    UInt16, UInt8 => UInt32 via to_uint32;
    UInt16, UInt16 => UInt32 via to_uint32;
    UInt16, UInt32 => UInt32 via to_uint32;
    UInt16, UInt64 => UInt64 via to_uint64;

    UInt32, UInt8 => UInt32 via to_uint32;
    UInt32, UInt16 => UInt32 via to_uint32;
    UInt32, UInt32 => UInt32 via to_uint32;
    UInt32, UInt64 => UInt64 via to_uint64;

    UInt64, UInt8 => UInt64 via to_uint64;
    UInt64, UInt16 => UInt64 via to_uint64;
    UInt64, UInt32 => UInt64 via to_uint64;
    UInt64, UInt64 => UInt64 via to_uint64;
}

// Compound assignment only where the promoted type is the left operand's.
macro_rules! promoted_assign {
    ($L:ident: $($R:ident),*) => {
        $(
            impl AddAssign<$R> for $L {
                #[inline]
                fn add_assign(&mut self, rhs: $R) {
                    *self = *self + rhs;
                }
            }

            impl SubAssign<$R> for $L {
                #[inline]
                fn sub_assign(&mut self, rhs: $R) {
                    *self = *self - rhs;
                }
            }

            impl MulAssign<$R> for $L {
                #[inline]
                fn mul_assign(&mut self, rhs: $R) {
                    *self = *self * rhs;
                }
            }

            impl DivAssign<$R> for $L {
                #[inline]
                fn div_assign(&mut self, rhs: $R) {
                    *self = *self / rhs;
                }
            }

            impl RemAssign<$R> for $L {
                #[inline]
                fn rem_assign(&mut self, rhs: $R) {
                    *self = *self % rhs;
                }
            }

            impl BitAndAssign<$R> for $L {
                #[inline]
                fn bitand_assign(&mut self, rhs: $R) {
                    *self = *self & rhs;
                }
            }

            impl BitOrAssign<$R> for $L {
                #[inline]
                fn bitor_assign(&mut self, rhs: $R) {
                    *self = *self | rhs;
                }
            }

            impl BitXorAssign<$R> for $L {
                #[inline]
                fn bitxor_assign(&mut self, rhs: $R) {
                    *self = *self ^ rhs;
                }
            }

            impl ShlAssign<$R> for $L {
                #[inline]
                fn shl_assign(&mut self, rhs: $R) {
                    *self = *self << rhs;
                }
            }

            impl ShrAssign<$R> for $L {
                #[inline]
                fn shr_assign(&mut self, rhs: $R) {
                    *self = *self >> rhs;
                }
            }
        )*
    };
}

promoted_assign!(UInt32: UInt8, UInt16, UInt32);
promoted_assign!(UInt64: UInt8, UInt16, UInt32, UInt64);

// The shift count is itself an unsigned value; only the left operand is
// promoted. Truncating a 64-bit count to `u32` keeps it congruent modulo
// the working width, which always divides 2^32.
macro_rules! promoted_shifts {
    ($L:ident => $Out:ident via $to:ident; $($R:ident),*) => {
        $(
            impl Shl<$R> for $L {
                type Output = $Out;

                #[inline]
                fn shl(self, rhs: $R) -> $Out {
                    self.$to().shift_left(rhs.get() as u32)
                }
            }

            impl Shr<$R> for $L {
                type Output = $Out;

                #[inline]
                fn shr(self, rhs: $R) -> $Out {
                    self.$to().logical_shift_right(rhs.get() as u32)
                }
            }
        )*
    };
}

promoted_shifts!(UInt8 => UInt32 via to_uint32; UInt8, UInt16, UInt32, UInt64);
promoted_shifts!(UInt16 => UInt32 via to_uint32; UInt8, UInt16, UInt32, UInt64);
promoted_shifts!(UInt32 => UInt32 via to_uint32; UInt8, UInt16, UInt32, UInt64);
promoted_shifts!(UInt64 => UInt64 via to_uint64; UInt8, UInt16, UInt32, UInt64);

macro_rules! fold_impls {
    ($($Name:ident),*) => {
        $(
            /// Wrapping sum.
            impl Sum for $Name {
                fn sum<I: Iterator<Item = $Name>>(iter: I) -> $Name {
                    iter.fold($Name::ZERO, $Name::wrapping_add)
                }
            }

            /// Wrapping product.
            impl Product for $Name {
                fn product<I: Iterator<Item = $Name>>(iter: I) -> $Name {
                    iter.fold($Name::ONE, $Name::wrapping_mul)
                }
            }
        )*
    };
}

fold_impls!(UInt32, UInt64);
