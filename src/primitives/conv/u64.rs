//! Conversions into the 64-bit kinds.
//!
//! `i64` is the only signed source for `UInt64`, and only because it has
//! the same width. Unsigned sources of any width widen losslessly into
//! both 64-bit kinds, so those also get `From` impls.

use crate::primitives::{UInt8, UInt16, UInt32, UInt64};

convert_via_carrier!(ToUInt64, to_uint64, UInt64;
    i64, UInt8, UInt16, UInt32, UInt64);

convert_via_carrier!(ToInt64, to_int64, i64;
    i8, i16, i32, i64, UInt8, UInt16, UInt32, UInt64);

macro_rules! widen_into_64 {
    ($($src:ident),*) => {
        $(
            impl From<$src> for UInt64 {
                #[inline]
                fn from(value: $src) -> Self {
                    UInt64::new(value.get() as u64)
                }
            }

            impl From<$src> for i64 {
                #[inline]
                fn from(value: $src) -> Self {
                    value.get() as i64
                }
            }
        )*
    };
}

widen_into_64!(UInt8, UInt16, UInt32);
