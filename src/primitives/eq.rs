//! Equality and hashing engine
//!
//! One relation covers all eight kinds: two values are equal exactly when
//! their mathematical values are equal. Every cross-kind `PartialEq` impl
//! below, and [`num_eq`], compares [`MathValue::math_value`] and nothing
//! else, so the relation is transitive because integer equality is.
//!
//! `i128` holds every value of every kind (`-2^63..=2^64 - 1`), so no
//! comparison is ever lossy.
//!
//! Hashes follow the same rule: [`MathValue::hash_code`] depends only on the
//! mathematical value, so equal values hash alike whatever their kinds.

use std::hash::{Hash, Hasher};

use super::conv::Sealed;
use super::{UInt8, UInt16, UInt32, UInt64};

/// Canonical mathematical value of any of the eight kinds.
pub trait MathValue: Sealed + Copy {
    /// The integer this value denotes.
    fn math_value(self) -> i128;

    /// Hash code of the mathematical value. See [`hash_value`].
    #[inline]
    fn hash_code(self) -> i32 {
        hash_value(self.math_value())
    }
}

macro_rules! math_value {
    (signed: $($s:ty),*; unsigned: $($u:ident),*) => {
        $(
            impl MathValue for $s {
                #[inline]
                fn math_value(self) -> i128 {
                    self as i128
                }
            }
        )*
        $(
            impl MathValue for $u {
                #[inline]
                fn math_value(self) -> i128 {
                    self.get() as i128
                }
            }
        )*
    };
}

math_value!(signed: i8, i16, i32, i64; unsigned: UInt8, UInt16, UInt32, UInt64);

/// Global equality between values of any two kinds.
///
/// ```
/// use uword::{num_eq, ToUInt32, UInt32};
///
/// let all_ones = (-1i32).to_uint32();
/// assert!(!num_eq(all_ones, -1i32));
/// assert!(num_eq(all_ones, 4_294_967_295i64));
/// assert!(num_eq(UInt32::new(7), 7i8));
/// ```
#[inline]
pub fn num_eq<A: MathValue, B: MathValue>(a: A, b: B) -> bool {
    a.math_value() == b.math_value()
}

/// Hash code of a mathematical value.
///
/// Values that fit an `i32` hash to themselves, and values that fit an `i64`
/// hash to the fold of their two 32-bit halves; this is the scheme the signed
/// kinds already use, so an unsigned value hashes exactly like a signed value
/// of the same magnitude.
///
/// Only `UInt64` reaches above `i64::MAX`. Those magnitudes hash to the
/// complement of the same fold, which keeps the result a function of the
/// magnitude alone without mirroring the negative `i64` sharing its bits.
pub fn hash_value(value: i128) -> i32 {
    if let Ok(small) = i32::try_from(value) {
        return small;
    }

    match i64::try_from(value) {
        Ok(wide) => fold(wide as u64),
        Err(_) => !fold(value as u64),
    }
}

#[inline]
fn fold(bits: u64) -> i32 {
    (bits ^ (bits >> 32)) as u32 as i32
}

macro_rules! hash_by_value {
    ($($Name:ident),*) => {
        $(
            /// Feeds [`MathValue::hash_code`] to the hasher as an `i32`, the
            /// way `i32` hashes itself.
            impl Hash for $Name {
                #[inline]
                fn hash<H: Hasher>(&self, state: &mut H) {
                    state.write_i32(self.hash_code());
                }
            }
        )*
    };
}

hash_by_value!(UInt8, UInt16, UInt32, UInt64);

macro_rules! cross_eq {
    ($L:ty: $($R:ty),*) => {
        $(
            impl PartialEq<$R> for $L {
                #[inline]
                fn eq(&self, other: &$R) -> bool {
                    num_eq(*self, *other)
                }
            }
        )*
    };
}

// Same-kind equality is derived from the bits, which agrees with the value.
// Pairs of two signed kinds belong to the host.
cross_eq!(UInt8: UInt16, UInt32, UInt64, i8, i16, i32, i64);
cross_eq!(UInt16: UInt8, UInt32, UInt64, i8, i16, i32, i64);
cross_eq!(UInt32: UInt8, UInt16, UInt64, i8, i16, i32, i64);
cross_eq!(UInt64: UInt8, UInt16, UInt32, i8, i16, i32, i64);
cross_eq!(i8: UInt8, UInt16, UInt32, UInt64);
cross_eq!(i16: UInt8, UInt16, UInt32, UInt64);
cross_eq!(i32: UInt8, UInt16, UInt32, UInt64);
cross_eq!(i64: UInt8, UInt16, UInt32, UInt64);
