//! Conversions into the 16-bit kinds.

use crate::primitives::{UInt8, UInt16, UInt32, UInt64};

// `i8` is absent: no signed-to-unsigned widening.
convert_via_carrier!(ToUInt16, to_uint16, UInt16;
    i16, i32, i64, UInt8, UInt16, UInt32, UInt64);

convert_via_carrier!(ToInt16, to_int16, i16;
    i8, i16, i32, i64, UInt8, UInt16, UInt32, UInt64);

/// Zero-extends a `UInt8`; the value is preserved.
impl From<UInt8> for UInt16 {
    #[inline]
    fn from(value: UInt8) -> Self {
        UInt16::new(value.get() as u16)
    }
}

/// Zero-extends a `UInt8` into the wider signed kind.
impl From<UInt8> for i16 {
    #[inline]
    fn from(value: UInt8) -> Self {
        value.get() as i16
    }
}
