use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use uword::{MathValue, Num, ToUInt32, UInt8, UInt16, UInt32, UInt64, hash_value, num_eq};

fn std_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn same_bits_different_values_are_unequal() {
    let all_ones = (-1i32).to_uint32();

    assert!(all_ones != -1i32);
    assert!(-1i32 != all_ones);
    assert!(all_ones == 4_294_967_295i64);
    assert!(4_294_967_295i64 == all_ones);
}

#[test]
fn top_bit_values_only_match_wider_signed() {
    let big = UInt32::new(0x8000_0000);

    assert!(big != i32::MIN);
    assert!(big == 0x8000_0000i64);
    assert!(UInt8::new(200) != (200u8 as i8));
    assert!(UInt8::new(200) == 200i16);
}

#[test]
fn negative_signed_never_equals_unsigned() {
    for s in [-1i64, -128, i64::MIN] {
        assert!(UInt8::MAX != s);
        assert!(UInt16::MAX != s);
        assert!(UInt32::MAX != s);
        assert!(UInt64::MAX != s);
        assert!(UInt64::new(s as u64) != s);
    }
}

#[test]
fn equal_values_across_widths() {
    assert!(UInt8::new(5) == UInt64::new(5));
    assert!(UInt16::new(5) == UInt32::new(5));
    assert!(UInt8::new(5) == 5i8);
    assert!(5i64 == UInt16::new(5));
    assert!(UInt64::new(u64::MAX) != UInt32::MAX);
    assert!(num_eq(UInt64::new(255), UInt8::MAX));
}

#[test]
fn math_value_is_canonical() {
    assert_eq!(UInt64::MAX.math_value(), u64::MAX as i128);
    assert_eq!((-7i16).math_value(), -7);
    assert_eq!(UInt8::MAX.math_value(), 255);
}

#[test]
fn hash_depends_only_on_value() {
    let five = UInt32::new(5).hash_code();

    assert_eq!(five, 5i32.hash_code());
    assert_eq!(five, 5i64.hash_code());
    assert_eq!(five, UInt8::new(5).hash_code());
    assert_eq!(five, 5);

    assert_eq!(UInt32::MAX.hash_code(), 4_294_967_295i64.hash_code());
    assert_eq!(UInt32::MAX.hash_code(), UInt64::new(4_294_967_295).hash_code());
    assert_eq!(UInt64::MAX.hash_code(), Num::from(UInt64::MAX).hash_code());
}

#[test]
fn hash_scheme_by_range() {
    assert_eq!(hash_value(-3), -3);
    assert_eq!(hash_value(i32::MAX as i128), i32::MAX);

    // Within i64: fold of the two halves.
    assert_eq!(hash_value(1 << 32), 1);
    assert_eq!(hash_value(i64::MAX as i128), i32::MIN);

    // Above i64::MAX: complement of the fold.
    assert_eq!(hash_value(u64::MAX as i128), -1);
    assert_eq!(hash_value(1 << 63), !i32::MIN);
}

#[test]
fn std_hash_matches_i32() {
    assert_eq!(std_hash(&UInt32::new(5)), std_hash(&5i32));
    assert_eq!(std_hash(&UInt8::new(5)), std_hash(&5i32));
    assert_eq!(std_hash(&UInt64::new(5)), std_hash(&UInt16::new(5)));
    assert_eq!(std_hash(&Num::from(5i64)), std_hash(&UInt32::new(5)));
}

#[test]
fn equality_is_transitive() {
    let values = [
        Num::from(-1i8),
        Num::from(-1i64),
        Num::from(255i16),
        Num::from(UInt8::MAX),
        Num::from(UInt16::new(255)),
        Num::from(UInt32::MAX),
        Num::from(4_294_967_295i64),
        Num::from(UInt64::new(4_294_967_295)),
        Num::from(UInt64::MAX),
        Num::from(-1i32),
        Num::from(0i8),
        Num::from(UInt64::ZERO),
    ];

    for a in values {
        for b in values {
            assert_eq!(a == b, b == a);

            if a == b {
                assert_eq!(a.hash_code(), b.hash_code());
            }

            for c in values {
                if a == b && b == c {
                    assert_eq!(a, c);
                }
            }
        }
    }
}
