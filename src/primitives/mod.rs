//! Primitive types
//!
//! This module defines the four fixed-width unsigned kinds and the rules
//! that tie them to the host's signed kinds (`i8`, `i16`, `i32`, `i64`).
//!
//! Primitives are simple, fixed-size, `Copy` values with well-defined
//! semantics:
//! - `UInt8`, `UInt16`, `UInt32`, `UInt64`: bit-pattern wrappers over the
//!   same-width signed word, read as plain binary
//! - conversions between all eight kinds, split by target width
//! - wrapping arithmetic, bitwise operators and shifts with promotion
//! - unsigned ordering
//! - one equality and hash relation across all eight kinds
//! - `Num`, a tagged union of the eight kinds for dynamic code
//!
//! Layering, leaves first: `repr` -> `conv` -> `ops`, `cmp`, `eq`, `fmt`
//! -> `num`.

mod cmp;
mod conv;
mod eq;
mod error;
mod fmt;
mod kind;
mod num;
mod ops;
mod repr;
mod traits;

pub use conv::{
    Reinterpret, ToInt8, ToInt16, ToInt32, ToInt64, ToUInt8, ToUInt16, ToUInt32, ToUInt64,
};
pub use eq::{MathValue, hash_value, num_eq};
pub use error::{ArithmeticError, NumError};
pub use kind::{Conversion, Domain, Kind};
pub use num::Num;

/// Fixed-width unsigned integer primitives.
///
/// These are the four unsigned kinds; the signed kinds are the native
/// `i8`..`i64`.
pub use repr::{UInt8, UInt16, UInt32, UInt64};
