//! Runtime descriptors for the eight integer kinds
//!
//! The static API encodes every conversion rule in trait impls. This
//! module describes the same rules as data, for code that only learns the
//! kinds of its operands at runtime (see [`Num`](super::Num)).

use std::fmt::{Display, Formatter, Result};

/// How a bit pattern is read: two's complement or plain binary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    Signed,
    Unsigned,
}

/// One of the four signed or four unsigned fixed-width kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

/// The class of a conversion between two kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// Source and target are the same kind.
    Identity,

    /// Same width, other domain. The bit pattern is kept as is.
    Reinterpret,

    /// Smaller target. Only the low target-width bits are kept.
    Narrow,

    /// Larger target from an unsigned source. The value is preserved.
    ZeroExtend,

    /// Larger signed target from a signed source. The value is preserved.
    SignExtend,
}

impl Kind {
    /// All kinds, signed first, each domain ordered by width.
    pub const ALL: [Kind; 8] = [
        Kind::I8,
        Kind::I16,
        Kind::I32,
        Kind::I64,
        Kind::U8,
        Kind::U16,
        Kind::U32,
        Kind::U64,
    ];

    /// Width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Kind::I8 | Kind::U8 => 8,
            Kind::I16 | Kind::U16 => 16,
            Kind::I32 | Kind::U32 => 32,
            Kind::I64 | Kind::U64 => 64,
        }
    }

    pub const fn domain(self) -> Domain {
        match self {
            Kind::I8 | Kind::I16 | Kind::I32 | Kind::I64 => Domain::Signed,
            Kind::U8 | Kind::U16 | Kind::U32 | Kind::U64 => Domain::Unsigned,
        }
    }

    pub const fn is_signed(self) -> bool {
        matches!(self.domain(), Domain::Signed)
    }

    /// The kind with the same width in the other domain.
    pub const fn peer(self) -> Kind {
        match self {
            Kind::I8 => Kind::U8,
            Kind::I16 => Kind::U16,
            Kind::I32 => Kind::U32,
            Kind::I64 => Kind::U64,
            Kind::U8 => Kind::I8,
            Kind::U16 => Kind::I16,
            Kind::U32 => Kind::I32,
            Kind::U64 => Kind::I64,
        }
    }

    /// Smallest mathematical value of the kind.
    pub const fn min_value(self) -> i128 {
        match self.domain() {
            Domain::Signed => -(1i128 << (self.bits() - 1)),
            Domain::Unsigned => 0,
        }
    }

    /// Largest mathematical value of the kind.
    pub const fn max_value(self) -> i128 {
        match self.domain() {
            Domain::Signed => (1i128 << (self.bits() - 1)) - 1,
            Domain::Unsigned => (1i128 << self.bits()) - 1,
        }
    }

    /// Classifies the conversion from `self` to `target`.
    ///
    /// Returns `None` for the one conversion that does not exist: widening
    /// a signed kind into a larger unsigned kind.
    pub const fn conversion_to(self, target: Kind) -> Option<Conversion> {
        let (from, to) = (self.bits(), target.bits());

        if from > to {
            return Some(Conversion::Narrow);
        }

        if from == to {
            return if self.is_signed() == target.is_signed() {
                Some(Conversion::Identity)
            } else {
                Some(Conversion::Reinterpret)
            };
        }

        match (self.domain(), target.domain()) {
            (Domain::Unsigned, _) => Some(Conversion::ZeroExtend),
            (Domain::Signed, Domain::Signed) => Some(Conversion::SignExtend),
            (Domain::Signed, Domain::Unsigned) => None,
        }
    }

    /// Working kind of a binary unsigned operator whose operands are `self`
    /// and `rhs`. `None` when either side is signed.
    pub const fn promote(self, rhs: Kind) -> Option<Kind> {
        if self.is_signed() || rhs.is_signed() {
            return None;
        }

        if self.bits() == 64 || rhs.bits() == 64 {
            Some(Kind::U64)
        } else {
            Some(Kind::U32)
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(match self {
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::U8 => "UInt8",
            Kind::U16 => "UInt16",
            Kind::U32 => "UInt32",
            Kind::U64 => "UInt64",
        })
    }
}
