//! Ordering engine
//!
//! Unsigned values are ordered by their mathematical value, never by the
//! signed reading of their bits. Operands of different widths compare after
//! promotion, which preserves values, so comparing the native unsigned
//! readings widened to `u64` is exact.
//!
//! There is no ordering between a signed and an unsigned kind.

use std::cmp::Ordering;

use super::{UInt8, UInt16, UInt32, UInt64};

macro_rules! total_order {
    ($($Name:ident),*) => {
        $(
            impl Ord for $Name {
                #[inline]
                fn cmp(&self, other: &Self) -> Ordering {
                    self.get().cmp(&other.get())
                }
            }

            impl PartialOrd for $Name {
                #[inline]
                fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                    Some(self.cmp(other))
                }
            }
        )*
    };
}

total_order!(UInt8, UInt16, UInt32, UInt64);

macro_rules! promoted_order {
    ($L:ident: $($R:ident),*) => {
        $(
            impl PartialOrd<$R> for $L {
                #[inline]
                fn partial_cmp(&self, other: &$R) -> Option<Ordering> {
                    Some((self.get() as u64).cmp(&(other.get() as u64)))
                }
            }
        )*
    };
}

promoted_order!(UInt8: UInt16, UInt32, UInt64);
promoted_order!(UInt16: UInt8, UInt32, UInt64);
promoted_order!(UInt32: UInt8, UInt16, UInt64);
promoted_order!(UInt64: UInt8, UInt16, UInt32);
