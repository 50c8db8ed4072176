//! Dynamically-typed numeric value
//!
//! `Num` is a closed tagged union over the eight kinds, for heterogeneous
//! collections and other places where a value's kind is only known at
//! runtime. Equality and hashing go through the single canonical mapping
//! [`Num::value`], so a `HashSet<Num>` holding `5u32` and `5i64` holds one
//! element.
//!
//! Operations the static API rejects at compile time are reported as
//! [`NumError`] here, before any value is produced.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};

use super::conv::{BitCarrier, FromCarrier};
use super::eq::{MathValue, hash_value};
use super::error::NumError;
use super::kind::Kind;
use super::{UInt8, UInt16, UInt32, UInt64};

/// A value of any of the eight kinds.
#[derive(Copy, Clone, Debug)]
pub enum Num {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(UInt8),
    U16(UInt16),
    U32(UInt32),
    U64(UInt64),
}

impl Num {
    pub const fn kind(&self) -> Kind {
        match self {
            Num::I8(_) => Kind::I8,
            Num::I16(_) => Kind::I16,
            Num::I32(_) => Kind::I32,
            Num::I64(_) => Kind::I64,
            Num::U8(_) => Kind::U8,
            Num::U16(_) => Kind::U16,
            Num::U32(_) => Kind::U32,
            Num::U64(_) => Kind::U64,
        }
    }

    /// The mathematical value; the one mapping equality and hashing use.
    pub fn value(&self) -> i128 {
        match *self {
            Num::I8(v) => v.math_value(),
            Num::I16(v) => v.math_value(),
            Num::I32(v) => v.math_value(),
            Num::I64(v) => v.math_value(),
            Num::U8(v) => v.math_value(),
            Num::U16(v) => v.math_value(),
            Num::U32(v) => v.math_value(),
            Num::U64(v) => v.math_value(),
        }
    }

    /// Hash code of the mathematical value, see [`hash_value`].
    pub fn hash_code(&self) -> i32 {
        hash_value(self.value())
    }

    /// Converts to `target` following the same rules as the conversion
    /// traits.
    ///
    /// # Errors
    ///
    /// [`NumError::SignedToUnsignedWidening`] when a signed value would
    /// widen into a larger unsigned kind.
    pub fn convert(self, target: Kind) -> Result<Num, NumError> {
        if self.kind().conversion_to(target).is_none() {
            return Err(NumError::SignedToUnsignedWidening {
                from: self.kind(),
                to: target,
            });
        }

        let bits = self.carry();

        Ok(match target {
            Kind::I8 => Num::I8(FromCarrier::from_carrier(bits)),
            Kind::I16 => Num::I16(FromCarrier::from_carrier(bits)),
            Kind::I32 => Num::I32(FromCarrier::from_carrier(bits)),
            Kind::I64 => Num::I64(FromCarrier::from_carrier(bits)),
            Kind::U8 => Num::U8(FromCarrier::from_carrier(bits)),
            Kind::U16 => Num::U16(FromCarrier::from_carrier(bits)),
            Kind::U32 => Num::U32(FromCarrier::from_carrier(bits)),
            Kind::U64 => Num::U64(FromCarrier::from_carrier(bits)),
        })
    }

    /// Orders two values of the same domain.
    ///
    /// # Errors
    ///
    /// [`NumError::MixedDomain`] when one side is signed and the other is
    /// unsigned.
    pub fn try_cmp(&self, other: &Num) -> Result<Ordering, NumError> {
        let (lhs, rhs) = (self.kind(), other.kind());

        if lhs.domain() != rhs.domain() {
            return Err(NumError::MixedDomain { lhs, rhs });
        }

        Ok(self.value().cmp(&other.value()))
    }

    fn carry(self) -> u64 {
        match self {
            Num::I8(v) => v.carry(),
            Num::I16(v) => v.carry(),
            Num::I32(v) => v.carry(),
            Num::I64(v) => v.carry(),
            Num::U8(v) => v.carry(),
            Num::U16(v) => v.carry(),
            Num::U32(v) => v.carry(),
            Num::U64(v) => v.carry(),
        }
    }
}

impl PartialEq for Num {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for Num {}

impl Hash for Num {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl Display for Num {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Num::I8(v) => Display::fmt(v, f),
            Num::I16(v) => Display::fmt(v, f),
            Num::I32(v) => Display::fmt(v, f),
            Num::I64(v) => Display::fmt(v, f),
            Num::U8(v) => Display::fmt(v, f),
            Num::U16(v) => Display::fmt(v, f),
            Num::U32(v) => Display::fmt(v, f),
            Num::U64(v) => Display::fmt(v, f),
        }
    }
}

macro_rules! num_from {
    ($($t:ty => $variant:ident),*) => {
        $(
            impl From<$t> for Num {
                #[inline]
                fn from(value: $t) -> Self {
                    Num::$variant(value)
                }
            }
        )*
    };
}

num_from!(
    i8 => I8, i16 => I16, i32 => I32, i64 => I64,
    UInt8 => U8, UInt16 => U16, UInt32 => U32, UInt64 => U64
);
