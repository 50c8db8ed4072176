//! Conversion engine
//!
//! Every conversion between the eight kinds goes through one 64-bit bit
//! carrier: the source writes its bits into a `u64`, extended according to
//! the source domain (zero-extension for unsigned kinds, sign-extension for
//! signed ones), and the target keeps the low bits it has room for.
//!
//! That single rule yields all four conversion classes:
//! - reinterpretation (same width) and narrowing keep the low bits, so the
//!   extension mode never shows and the result depends only on the target;
//! - widening from an unsigned kind zero-extends, preserving the value;
//! - widening from a signed kind into a signed kind sign-extends.
//!
//! Widening a signed kind into a larger unsigned kind would have to pick an
//! extension mode, and neither is an obvious default. That conversion has
//! no trait impl, so it is rejected by the type checker.
//!
//! Conversions are split by target width, one file each.

use super::{UInt8, UInt16, UInt32, UInt64};

mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for super::UInt8 {}
    impl Sealed for super::UInt16 {}
    impl Sealed for super::UInt32 {}
    impl Sealed for super::UInt64 {}
}

pub(crate) use private::Sealed;

/// Writes a value's bits into the 64-bit carrier.
pub(crate) trait BitCarrier: Sealed + Copy {
    fn carry(self) -> u64;
}

/// Builds a value from the low bits of the carrier.
pub(crate) trait FromCarrier: Sealed {
    fn from_carrier(bits: u64) -> Self;
}

macro_rules! signed_carrier {
    ($($t:ty),*) => {
        $(
            impl BitCarrier for $t {
                #[inline(always)]
                fn carry(self) -> u64 {
                    self as i64 as u64
                }
            }

            impl FromCarrier for $t {
                #[inline(always)]
                fn from_carrier(bits: u64) -> Self {
                    bits as $t
                }
            }
        )*
    };
}

macro_rules! unsigned_carrier {
    ($($t:ident => $signed:ty),*) => {
        $(
            impl BitCarrier for $t {
                #[inline(always)]
                fn carry(self) -> u64 {
                    self.get() as u64
                }
            }

            impl FromCarrier for $t {
                #[inline(always)]
                fn from_carrier(bits: u64) -> Self {
                    $t::from_bits(bits as $signed)
                }
            }
        )*
    };
}

signed_carrier!(i8, i16, i32, i64);
unsigned_carrier!(UInt8 => i8, UInt16 => i16, UInt32 => i32, UInt64 => i64);

/// Implements a conversion trait for each listed source kind by passing the
/// value through the bit carrier.
macro_rules! convert_via_carrier {
    ($Trait:ident, $method:ident, $Target:ty; $($src:ty),* $(,)?) => {
        $(
            impl $crate::primitives::conv::$Trait for $src {
                #[inline]
                fn $method(self) -> $Target {
                    use $crate::primitives::conv::{BitCarrier, FromCarrier};

                    <$Target as FromCarrier>::from_carrier(self.carry())
                }
            }
        )*
    };
}

/// Conversion into [`UInt8`]. Implemented for every kind.
pub trait ToUInt8: Sealed {
    fn to_uint8(self) -> UInt8;
}

/// Conversion into [`UInt16`].
///
/// Not implemented for `i8`: a signed value cannot widen into an unsigned
/// kind.
pub trait ToUInt16: Sealed {
    fn to_uint16(self) -> UInt16;
}

/// Conversion into [`UInt32`].
///
/// Not implemented for `i8` and `i16`.
pub trait ToUInt32: Sealed {
    fn to_uint32(self) -> UInt32;
}

/// Conversion into [`UInt64`].
///
/// Only `i64` among the signed kinds converts, by reinterpretation.
pub trait ToUInt64: Sealed {
    fn to_uint64(self) -> UInt64;
}

/// Conversion into `i8`. Implemented for every kind.
pub trait ToInt8: Sealed {
    fn to_int8(self) -> i8;
}

/// Conversion into `i16`. Implemented for every kind.
pub trait ToInt16: Sealed {
    fn to_int16(self) -> i16;
}

/// Conversion into `i32`. Implemented for every kind.
pub trait ToInt32: Sealed {
    fn to_int32(self) -> i32;
}

/// Conversion into `i64`. Implemented for every kind.
pub trait ToInt64: Sealed {
    fn to_int64(self) -> i64;
}

/// Same-width reinterpretation between a signed kind and its unsigned peer.
///
/// This is also the escape hatch for an arithmetic right shift on an
/// unsigned value: reinterpret, shift the signed peer, reinterpret back.
///
/// ```
/// use uword::{Reinterpret, UInt32};
///
/// let x = UInt32::MAX;
/// let shifted: UInt32 = (x.reinterpret() >> 4).reinterpret();
/// assert_eq!(shifted, UInt32::MAX);
/// ```
pub trait Reinterpret: Sealed {
    type Peer: Reinterpret<Peer = Self>;

    fn reinterpret(self) -> Self::Peer;
}

macro_rules! reinterpret_pair {
    ($($unsigned:ident <=> $signed:ty),*) => {
        $(
            impl Reinterpret for $unsigned {
                type Peer = $signed;

                #[inline]
                fn reinterpret(self) -> $signed {
                    self.to_bits()
                }
            }

            impl Reinterpret for $signed {
                type Peer = $unsigned;

                #[inline]
                fn reinterpret(self) -> $unsigned {
                    $unsigned::from_bits(self)
                }
            }
        )*
    };
}

reinterpret_pair!(UInt8 <=> i8, UInt16 <=> i16, UInt32 <=> i32, UInt64 <=> i64);

mod u16;
mod u32;
mod u64;
mod u8;
