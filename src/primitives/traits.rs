//! `num-traits` integration
//!
//! `Bounded` and `ToPrimitive` fit every kind. The algebraic traits
//! (`Zero`, `One`, `Num`, `Unsigned`, the wrapping and checked operations)
//! require operators that return `Self`, which promotion only guarantees for
//! `UInt32` and `UInt64`; the narrow kinds stay out of them.

use core::num::ParseIntError;

use num_traits::{
    Bounded, CheckedDiv, CheckedRem, Num, One, ToPrimitive, Unsigned, WrappingAdd, WrappingMul,
    WrappingSub, Zero,
};

use super::{UInt8, UInt16, UInt32, UInt64};

macro_rules! bounded_and_primitive {
    ($($Name:ident),*) => {
        $(
            impl Bounded for $Name {
                #[inline]
                fn min_value() -> Self {
                    $Name::MIN
                }

                #[inline]
                fn max_value() -> Self {
                    $Name::MAX
                }
            }

            impl ToPrimitive for $Name {
                #[inline]
                fn to_i64(&self) -> Option<i64> {
                    self.get().to_i64()
                }

                #[inline]
                fn to_u64(&self) -> Option<u64> {
                    Some(self.get() as u64)
                }

                #[inline]
                fn to_i128(&self) -> Option<i128> {
                    Some(self.get() as i128)
                }

                #[inline]
                fn to_u128(&self) -> Option<u128> {
                    Some(self.get() as u128)
                }
            }
        )*
    };
}

bounded_and_primitive!(UInt8, UInt16, UInt32, UInt64);

macro_rules! closed_arithmetic {
    ($($Name:ident => $Native:ty),*) => {
        $(
            impl Zero for $Name {
                #[inline]
                fn zero() -> Self {
                    $Name::ZERO
                }

                #[inline]
                fn is_zero(&self) -> bool {
                    self.0 == 0
                }
            }

            impl One for $Name {
                #[inline]
                fn one() -> Self {
                    $Name::ONE
                }
            }

            impl Num for $Name {
                type FromStrRadixErr = ParseIntError;

                fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseIntError> {
                    <$Native>::from_str_radix(src, radix).map($Name::new)
                }
            }

            impl Unsigned for $Name {}

            impl WrappingAdd for $Name {
                #[inline]
                fn wrapping_add(&self, v: &Self) -> Self {
                    $Name::wrapping_add(*self, *v)
                }
            }

            impl WrappingSub for $Name {
                #[inline]
                fn wrapping_sub(&self, v: &Self) -> Self {
                    $Name::wrapping_sub(*self, *v)
                }
            }

            impl WrappingMul for $Name {
                #[inline]
                fn wrapping_mul(&self, v: &Self) -> Self {
                    $Name::wrapping_mul(*self, *v)
                }
            }

            impl CheckedDiv for $Name {
                #[inline]
                fn checked_div(&self, v: &Self) -> Option<Self> {
                    self.try_div(*v).ok()
                }
            }

            impl CheckedRem for $Name {
                #[inline]
                fn checked_rem(&self, v: &Self) -> Option<Self> {
                    self.try_rem(*v).ok()
                }
            }
        )*
    };
}

closed_arithmetic!(UInt32 => u32, UInt64 => u64);
