//! Conversions into the 32-bit kinds.

use crate::primitives::{UInt8, UInt16, UInt32, UInt64};

convert_via_carrier!(ToUInt32, to_uint32, UInt32;
    i32, i64, UInt8, UInt16, UInt32, UInt64);

convert_via_carrier!(ToInt32, to_int32, i32;
    i8, i16, i32, i64, UInt8, UInt16, UInt32, UInt64);

macro_rules! widen_into_32 {
    ($($src:ident),*) => {
        $(
            impl From<$src> for UInt32 {
                #[inline]
                fn from(value: $src) -> Self {
                    UInt32::new(value.get() as u32)
                }
            }

            impl From<$src> for i32 {
                #[inline]
                fn from(value: $src) -> Self {
                    value.get() as i32
                }
            }
        )*
    };
}

widen_into_32!(UInt8, UInt16);
