//! Representation layer
//!
//! Each unsigned kind is a transparent wrapper around the signed machine
//! word of the same width. The wrapper never changes a bit: it only
//! changes how the bits are read. The mathematical value of a `UIntN` is
//! its bit pattern read as plain binary, in `0..=2^N - 1`.
//!
//! Because the layout is exactly that of the native `uN`/`iN` word, slices
//! of external buffers can be viewed as slices of these types without
//! copying or per-element work.

use bytemuck::{Pod, TransparentWrapper, Zeroable};

macro_rules! unsigned_kind {
    ($(#[$meta:meta])* $Name:ident, $Signed:ty, $Native:ty, $BITS:expr) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Default, PartialEq, Eq, Pod, Zeroable, TransparentWrapper)]
        #[repr(transparent)]
        pub struct $Name(pub(crate) $Signed);

        impl $Name {
            /// Width in bits.
            pub const BITS: u32 = $BITS;

            /// The value zero.
            pub const ZERO: Self = Self(0);

            /// The value one.
            pub const ONE: Self = Self(1);

            /// The smallest value, zero.
            pub const MIN: Self = Self::ZERO;

            /// The largest value, `2^BITS - 1` (all bits set).
            pub const MAX: Self = Self(-1);

            /// Wraps a native unsigned integer.
            #[inline]
            pub const fn new(value: $Native) -> Self {
                Self(value as $Signed)
            }

            /// The mathematical value as a native unsigned integer.
            #[inline]
            pub const fn get(self) -> $Native {
                self.0 as $Native
            }

            /// Reads a signed word's bit pattern as unsigned.
            #[inline]
            pub const fn from_bits(bits: $Signed) -> Self {
                Self(bits)
            }

            /// The bit pattern as the same-width signed word.
            #[inline]
            pub const fn to_bits(self) -> $Signed {
                self.0
            }

            /// Views a buffer of native unsigned words as this kind.
            pub fn from_raw_slice(raw: &[$Native]) -> &[Self] {
                bytemuck::cast_slice(raw)
            }

            /// Mutable variant of [`Self::from_raw_slice`].
            pub fn from_raw_slice_mut(raw: &mut [$Native]) -> &mut [Self] {
                bytemuck::cast_slice_mut(raw)
            }

            /// Views a slice of this kind as native unsigned words.
            pub fn as_raw_slice(values: &[Self]) -> &[$Native] {
                bytemuck::cast_slice(values)
            }

            /// Views a buffer of signed words as this kind, bit for bit.
            pub fn from_signed_slice(raw: &[$Signed]) -> &[Self] {
                <Self as TransparentWrapper<$Signed>>::wrap_slice(raw)
            }

            /// Number of leading zero bits.
            #[inline]
            pub const fn leading_zeros(self) -> u32 {
                self.get().leading_zeros()
            }

            /// Number of trailing zero bits.
            #[inline]
            pub const fn trailing_zeros(self) -> u32 {
                self.get().trailing_zeros()
            }

            /// Number of set bits.
            #[inline]
            pub const fn count_ones(self) -> u32 {
                self.get().count_ones()
            }
        }

        impl From<$Native> for $Name {
            #[inline]
            fn from(value: $Native) -> Self {
                Self::new(value)
            }
        }

        impl From<$Name> for $Native {
            #[inline]
            fn from(value: $Name) -> Self {
                value.get()
            }
        }
    };
}

unsigned_kind!(
    /// 8-bit unsigned integer, stored as the bits of an `i8`.
    UInt8, i8, u8, 8
);

unsigned_kind!(
    /// 16-bit unsigned integer, stored as the bits of an `i16`.
    UInt16, i16, u16, 16
);

unsigned_kind!(
    /// 32-bit unsigned integer, stored as the bits of an `i32`.
    ///
    /// ```
    /// use uword::UInt32;
    ///
    /// let all_ones = UInt32::from_bits(-1);
    /// assert_eq!(all_ones, UInt32::MAX);
    /// assert_eq!(all_ones.get(), 4_294_967_295);
    /// assert_eq!(all_ones.to_string(), "4294967295");
    /// ```
    UInt32, i32, u32, 32
);

unsigned_kind!(
    /// 64-bit unsigned integer, stored as the bits of an `i64`.
    UInt64, i64, u64, 64
);
