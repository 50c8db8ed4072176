//! Property tests for the laws every kind must satisfy.
//!
//! Uses proptest to check them across random inputs.

use proptest::prelude::*;
use uword::{
    Kind, MathValue, Num, ToInt8, ToInt16, ToInt32, ToInt64, ToUInt8, ToUInt16, ToUInt32,
    ToUInt64, UInt8, UInt16, UInt32, UInt64,
};

/// Values of any kind, biased towards small magnitudes so that equal pairs
/// across kinds actually occur.
fn any_num() -> impl Strategy<Value = Num> {
    let raw = prop_oneof![-3i64..=3, 250i64..=260, any::<i64>()];

    (0..Kind::ALL.len(), raw).prop_map(|(index, raw)| {
        Num::from(raw)
            .convert(Kind::ALL[index])
            .expect("i64 converts into every kind")
    })
}

proptest! {
    // ========================================================================
    // Arithmetic
    // ========================================================================

    #[test]
    fn prop_add_sub_wraparound_32(x in any::<u32>(), y in any::<u32>()) {
        let (x, y) = (UInt32::new(x), UInt32::new(y));

        prop_assert_eq!((x + y) - y, x);
        prop_assert_eq!((x - y) + y, x);
    }

    #[test]
    fn prop_add_sub_wraparound_64(x in any::<u64>(), y in any::<u64>()) {
        let (x, y) = (UInt64::new(x), UInt64::new(y));

        prop_assert_eq!((x + y) - y, x);
        prop_assert_eq!((x - y) + y, x);
    }

    #[test]
    fn prop_add_sub_wraparound_narrow(x in any::<u8>(), y in any::<u8>(), z in any::<u16>()) {
        let (x, y, z) = (UInt8::new(x), UInt8::new(y), UInt16::new(z));

        prop_assert_eq!(x.wrapping_add(y).wrapping_sub(y), x);
        prop_assert_eq!(x.wrapping_sub(y).wrapping_add(y), x);
        prop_assert_eq!(z.wrapping_sub(z), UInt16::ZERO);

        // Promoted results never wrap for 8-bit operands.
        prop_assert_eq!((x + y) - y, x);
    }

    #[test]
    fn prop_add_matches_native(x in any::<u64>(), y in any::<u64>()) {
        prop_assert_eq!((UInt64::new(x) + UInt64::new(y)).get(), x.wrapping_add(y));
        prop_assert_eq!((UInt64::new(x) * UInt64::new(y)).get(), x.wrapping_mul(y));
    }

    #[test]
    fn prop_division_identity(x in any::<u64>(), y in 1u64..) {
        let (a, b) = (UInt64::new(x), UInt64::new(y));

        prop_assert_eq!((a / b) * b + (a % b), a);
        prop_assert!(a % b < b);
        prop_assert_eq!((a / b).get(), x / y);
    }

    #[test]
    fn prop_division_by_zero_always_fails(x in any::<u32>()) {
        prop_assert!(UInt32::new(x).try_div(UInt32::ZERO).is_err());
        prop_assert!(UInt32::new(x).try_rem(UInt32::ZERO).is_err());
    }

    #[test]
    fn prop_bitwise_commutes_with_reinterpretation(x in any::<u32>(), y in any::<u32>()) {
        let (a, b) = (UInt32::new(x), UInt32::new(y));

        prop_assert_eq!((!a).to_int32(), !a.to_int32());
        prop_assert_eq!((a & b).to_int32(), a.to_int32() & b.to_int32());
        prop_assert_eq!((a | b).to_int32(), a.to_int32() | b.to_int32());
        prop_assert_eq!((a ^ b).to_int32(), a.to_int32() ^ b.to_int32());
    }

    #[test]
    fn prop_shift_right_never_sign_extends(x in any::<u64>(), n in 0u64..64) {
        let shifted = UInt64::new(x) >> UInt64::new(n);

        prop_assert_eq!(shifted.get(), x >> n);
        if n > 0 {
            prop_assert!(shifted.leading_zeros() >= n as u32);
        }
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    #[test]
    fn prop_reinterpretation_round_trips(a in any::<u8>(), b in any::<u16>(), c in any::<u32>(), d in any::<u64>()) {
        let (a, b, c, d) = (UInt8::new(a), UInt16::new(b), UInt32::new(c), UInt64::new(d));

        prop_assert_eq!(a.to_int8().to_uint8(), a);
        prop_assert_eq!(b.to_int16().to_uint16(), b);
        prop_assert_eq!(c.to_int32().to_uint32(), c);
        prop_assert_eq!(d.to_int64().to_uint64(), d);
    }

    #[test]
    fn prop_narrowing_commutes(v in any::<i64>(), w in any::<i32>()) {
        prop_assert_eq!(v.to_uint64().to_uint8(), v.to_uint8());
        prop_assert_eq!(v.to_uint64().to_uint16(), v.to_uint16());
        prop_assert_eq!(v.to_uint64().to_uint32(), v.to_uint32());
        prop_assert_eq!(w.to_uint32().to_uint8(), w.to_uint8());
        prop_assert_eq!(w.to_uint32().to_uint16(), w.to_uint16());

        let u = v.to_uint64();
        prop_assert_eq!(u.to_int64().to_uint16(), u.to_uint16());
        prop_assert_eq!(u.to_int16().to_uint16(), u.to_uint16());
    }

    #[test]
    fn prop_narrowing_commutes_from_narrow_sources(h in any::<i16>(), b in any::<u16>(), c in any::<u32>()) {
        prop_assert_eq!(h.to_uint16().to_uint8(), h.to_uint8());
        prop_assert_eq!(h.to_int8().to_uint8(), h.to_uint8());

        let b = UInt16::new(b);
        prop_assert_eq!(b.to_int16().to_uint8(), b.to_uint8());
        prop_assert_eq!(b.to_int8().to_uint8(), b.to_uint8());

        let c = UInt32::new(c);
        prop_assert_eq!(c.to_int32().to_uint8(), c.to_uint8());
        prop_assert_eq!(c.to_int32().to_uint16(), c.to_uint16());
        prop_assert_eq!(c.to_uint16().to_uint8(), c.to_uint8());
        prop_assert_eq!(c.to_int16().to_uint16(), c.to_uint16());
    }

    #[test]
    fn prop_unsigned_widening_preserves_value(a in any::<u8>(), c in any::<u32>()) {
        let (a, c) = (UInt8::new(a), UInt32::new(c));

        prop_assert_eq!(a.to_uint64().math_value(), a.math_value());
        prop_assert_eq!(a.to_int16().math_value(), a.math_value());
        prop_assert_eq!(c.to_int64().math_value(), c.math_value());
        prop_assert!(c.to_uint64() == c);
    }

    // ========================================================================
    // Equality, hashing and ordering
    // ========================================================================

    #[test]
    fn prop_equality_is_value_equality(s in any::<i64>(), u in any::<u64>()) {
        let unsigned = UInt64::new(u);

        prop_assert_eq!(unsigned == s, s as i128 == u as i128);
        prop_assert_eq!(s == unsigned, unsigned == s);
    }

    #[test]
    fn prop_equality_transitive_and_hash_consistent(a in any_num(), b in any_num(), c in any_num()) {
        if a == b {
            prop_assert_eq!(a.hash_code(), b.hash_code());

            if b == c {
                prop_assert_eq!(a, c);
            }
        }

        prop_assert_eq!(a == b, a.value() == b.value());
    }

    #[test]
    fn prop_static_equality_is_transitive(
        x in prop_oneof![0u32..=3, any::<u32>()],
        s in prop_oneof![-1i64..=3, 0i64..=u32::MAX as i64, any::<i64>()],
        y in prop_oneof![0u64..=3, 0u64..=u32::MAX as u64]
    ) {
        let (x, y) = (UInt32::new(x), UInt64::new(y));

        if x == s && s == y {
            prop_assert!(x == y);
        }
        prop_assert_eq!(x == y, x.to_uint64() == y);
        prop_assert_eq!(x == s, s == x);
        prop_assert_eq!(s == y, y == s);
        prop_assert_eq!(x == s, x.math_value() == s as i128);
        prop_assert_eq!(s == y, s as i128 == y.math_value());

        // Equal values across kinds hash alike.
        if x == s {
            prop_assert_eq!(x.hash_code(), s.hash_code());
        }
        if x == y {
            prop_assert_eq!(x.hash_code(), y.hash_code());
        }
    }

    #[test]
    fn prop_hash_ignores_kind(v in 0i64..) {
        let unsigned = v.to_uint64();

        prop_assert_eq!(unsigned.hash_code(), v.hash_code());
        prop_assert_eq!(unsigned.to_uint32().hash_code(), v.to_uint32().to_int64().hash_code());
    }

    #[test]
    fn prop_order_matches_native(x in any::<u32>(), y in any::<u32>()) {
        prop_assert_eq!(UInt32::new(x).cmp(&UInt32::new(y)), x.cmp(&y));
        prop_assert_eq!(UInt32::new(x) < UInt64::new(y as u64), x < y);
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    #[test]
    fn prop_decimal_matches_native(x in any::<u64>(), y in any::<u16>()) {
        prop_assert_eq!(UInt64::new(x).to_string(), x.to_string());
        prop_assert_eq!(UInt16::new(y).to_string(), y.to_string());
    }
}
