//! Fixed-width unsigned integers alongside the signed kinds
//!
//! This crate provides four unsigned kinds, [`UInt8`], [`UInt16`],
//! [`UInt32`] and [`UInt64`], designed to coexist with the native signed
//! kinds `i8`, `i16`, `i32` and `i64` under strict rules.
//!
//! The focus is on **predictable semantics**: every conversion, operator
//! and comparison is either total and well-defined, or absent from the
//! API so that misuse fails to compile.
//!
//! # Module overview
//!
//! - `primitives`
//!   The unsigned kinds, the conversion algebra between all eight kinds,
//!   wrapping arithmetic with width promotion, unsigned ordering, the
//!   global equality/hash relation and decimal formatting. Everything is
//!   re-exported at the crate root.
//!
//! # Representation
//!
//! Each `UIntN` is a `#[repr(transparent)]` wrapper over the `iN` word of
//! the same width. Its mathematical value is that bit pattern read as plain
//! binary. External `uN` buffers can be viewed as `UIntN` slices without
//! copying ([`UInt32::from_raw_slice`]).
//!
//! # Equality
//!
//! Any two values of any two kinds are equal exactly when their
//! mathematical values are equal:
//!
//! ```
//! use uword::{ToUInt32, UInt32};
//!
//! let all_ones = (-1i32).to_uint32();
//! assert_eq!(all_ones, UInt32::MAX);
//! assert!(all_ones != -1i32);
//! assert!(all_ones == 4_294_967_295i64);
//! ```
//!
//! # Type errors
//!
//! Mixing signed and unsigned operands does not compile:
//!
//! ```compile_fail
//! use uword::UInt32;
//!
//! let _ = UInt32::new(1) + 1i32;
//! ```
//!
//! ```compile_fail
//! use uword::UInt32;
//!
//! let _ = UInt32::new(1) < 2i32;
//! ```
//!
//! Unsigned values have no negation; `!x + UInt32::ONE` is the substitute:
//!
//! ```compile_fail
//! use uword::UInt32;
//!
//! let _ = -UInt32::new(1);
//! ```
//!
//! A signed value cannot widen into a larger unsigned kind:
//!
//! ```compile_fail
//! use uword::ToUInt32;
//!
//! let _ = 5i16.to_uint32();
//! ```
//!
//! There is no arithmetic right shift on unsigned values, and the shift
//! count must itself be unsigned:
//!
//! ```compile_fail
//! use uword::UInt32;
//!
//! let _ = UInt32::MAX >> 3i32;
//! ```
//!
//! # Design goals
//!
//! - Zero-cost wrappers with the native memory layout
//! - One canonical value mapping behind every equality and hash
//! - Static rejection of ambiguous operations
//! - No shared state: all values are `Copy + Send + Sync`

pub mod primitives;

pub use primitives::*;
