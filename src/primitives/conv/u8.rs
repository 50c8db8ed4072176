//! Conversions into the 8-bit kinds.
//!
//! Every kind converts into `UInt8` and `i8`: from wider sources this is
//! narrowing, from the same width it is reinterpretation.

use crate::primitives::{UInt8, UInt16, UInt32, UInt64};

convert_via_carrier!(ToUInt8, to_uint8, UInt8;
    i8, i16, i32, i64, UInt8, UInt16, UInt32, UInt64);

convert_via_carrier!(ToInt8, to_int8, i8;
    i8, i16, i32, i64, UInt8, UInt16, UInt32, UInt64);
