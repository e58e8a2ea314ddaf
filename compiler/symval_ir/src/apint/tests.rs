use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_new_masks_unused_bits() {
    let value = ApInt::new(4, &[0xFF]);
    assert_eq!(value.words(), &[0x0F]);
    assert_eq!(value.to_u64(), Some(15));
}

#[test]
fn test_new_pads_missing_limbs() {
    let value = ApInt::new(130, &[1]);
    assert_eq!(value.words(), &[1, 0, 0]);
}

#[test]
fn test_from_i64_sign_extends() {
    let value = ApInt::from_i64(128, -1);
    assert_eq!(value.words(), &[u64::MAX, u64::MAX]);
    assert!(value.is_negative());
    assert_eq!(value.to_i64(), Some(-1));
    assert_eq!(value.to_u64(), None);
}

#[test]
fn test_narrow_signed_readback() {
    let value = ApInt::from_i64(8, -5);
    assert_eq!(value.to_u64(), Some(251));
    assert_eq!(value.to_i64(), Some(-5));
    assert_eq!(value.to_string(), "-5");
}

#[test]
fn test_zero() {
    let value = ApInt::zero(33);
    assert!(value.is_zero());
    assert!(!value.is_negative());
    assert_eq!(value.to_string(), "0");
}

#[test]
fn test_equality_includes_width() {
    assert_ne!(ApInt::from_u64(32, 7), ApInt::from_u64(64, 7));
    assert_eq!(ApInt::from_u64(32, 7), ApInt::new(32, &[7, 99]));
}

#[test]
fn test_from_bigint_truncates() {
    let big = BigInt::from(1u8) << 70u32;
    let value = ApInt::from_bigint(64, &(big + BigInt::from(3u8)));
    assert_eq!(value.to_u64(), Some(3));
}

#[test]
fn test_from_bigint_negative() {
    let value = ApInt::from_bigint(16, &BigInt::from(-2));
    assert_eq!(value.to_u64(), Some(0xFFFE));
    assert_eq!(value.to_bigint_signed(), BigInt::from(-2));
}

#[test]
fn test_wide_value_roundtrip() {
    let text = "1".repeat(3000);
    let value = match ApInt::from_str_radix(&text, 2, 10_000) {
        Ok(value) => value,
        Err(err) => panic!("expected a 10000-bit value, got {err}"),
    };
    assert_eq!(value.bit_width(), 10_000);
    assert_eq!(value.words().len(), 157);
    assert_eq!(value.to_biguint().bits(), 3000);
}

#[test]
fn test_from_str_radix_errors() {
    assert_eq!(
        ApInt::from_str_radix("12", 10, 0),
        Err(ApIntError::ZeroWidth)
    );
    assert_eq!(
        ApInt::from_str_radix("12", 40, 8),
        Err(ApIntError::InvalidRadix(40))
    );
    assert_eq!(
        ApInt::from_str_radix("12z", 10, 8),
        Err(ApIntError::InvalidDigits {
            text: "12z".to_owned(),
            radix: 10
        })
    );
    assert_eq!(
        ApInt::from_str_radix("256", 10, 8),
        Err(ApIntError::TooWide {
            text: "256".to_owned(),
            bit_width: 8
        })
    );
    assert_eq!(
        ApInt::from_str_radix("-129", 10, 8),
        Err(ApIntError::TooWide {
            text: "-129".to_owned(),
            bit_width: 8
        })
    );
}

#[test]
fn test_from_str_radix_accepts_signed_and_unsigned_ranges() {
    assert_eq!(
        ApInt::from_str_radix("255", 10, 8),
        Ok(ApInt::from_u64(8, 255))
    );
    assert_eq!(
        ApInt::from_str_radix("-128", 10, 8),
        Ok(ApInt::from_i64(8, -128))
    );
    assert_eq!(
        ApInt::from_str_radix("ff", 16, 8),
        Ok(ApInt::from_u64(8, 255))
    );
}

#[test]
fn test_error_display() {
    let err = ApIntError::TooWide {
        text: "300".to_owned(),
        bit_width: 8,
    };
    assert_eq!(err.to_string(), "`300` does not fit in 8 bits");
}

#[test]
fn test_debug_shows_width() {
    assert_eq!(format!("{:?}", ApInt::from_i64(32, -3)), "i32 -3");
}

proptest! {
    #[test]
    fn prop_i64_roundtrip(v in any::<i64>()) {
        let value = ApInt::from_i64(64, v);
        prop_assert_eq!(value.to_i64(), Some(v));
        prop_assert_eq!(ApInt::from_bigint(64, &value.to_bigint_signed()), value);
    }

    #[test]
    fn prop_u64_roundtrip(v in any::<u64>(), width in 64u32..300) {
        let value = ApInt::from_u64(width, v);
        prop_assert_eq!(value.to_u64(), Some(v));
        prop_assert_eq!(ApInt::from_bigint(width, &BigInt::from(value.to_biguint())), value);
    }
}

#[test]
#[should_panic(expected = "bit width must be non-zero")]
fn test_from_i64_zero_width_panics() {
    let _ = ApInt::from_i64(0, -1);
}
