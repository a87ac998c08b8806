//! Integration tests for the Int64 value type
//!
//! Exercises the public API the way external callers combine it: strict and
//! lenient construction, operand normalization, and layout arithmetic.

use lohi_core::{layout, lohi_from_one, Half, Int64, Int64Error, Operand};

#[test]
fn test_carry_across_half_boundary() {
    let a = Int64::new(0xFFFF_FFFFu32, 0).unwrap();
    let b = Int64::new(1, 0).unwrap();
    assert_eq!(a.wrapping_add(b), Int64::new(0, 1).unwrap());
}

#[test]
fn test_overflow_out_of_64_bits() {
    let a = Int64::new(0, 0xFFFF_FFFFu32).unwrap();
    let b = Int64::new(0, 1).unwrap();
    assert_eq!(a.wrapping_add(b), Int64::new(0, 0).unwrap());

    let all_ones = Int64::new(-1, -1).unwrap();
    assert_eq!(all_ones.wrapping_add(1), Int64::ZERO);
}

#[test]
fn test_double_negation() {
    for v in [
        Int64::ZERO,
        Int64::MIN,
        Int64::MAX,
        Int64::from_loose(1),
        Int64::from_loose(-1),
        Int64::from_halves(0, 1),
        Int64::from_halves(0xFFFF_FFFF, 0),
    ] {
        assert_eq!(v.wrapping_neg().wrapping_neg(), v, "{v:?}");
    }
    assert_eq!(Int64::MIN.wrapping_neg(), Int64::MIN);
}

#[test]
fn test_sub_boundaries() {
    let zero = Int64::ZERO;
    let ones = Int64::from_halves(u32::MAX, u32::MAX);
    for (a, b) in [(zero, zero), (zero, ones), (ones, zero), (ones, ones)] {
        assert_eq!(a.wrapping_sub(b), a.wrapping_add(b.wrapping_neg()));
        assert_eq!(a.wrapping_add(b).wrapping_sub(b), a);
    }
}

#[test]
fn test_sign_extension_of_plain_numbers() {
    let v = Int64::from_loose(-1);
    assert_eq!(v.high(), 0xFFFF_FFFF);
    assert_eq!(v.signed_high(), -1);
    assert_eq!(v.signed_low(), -1);

    assert!(Int64::from_loose(5).equals(5));
    assert!(Int64::from_loose(5).not_equals(-5));
}

#[test]
fn test_strict_vs_lenient() {
    let err = Int64::new(0x1_0000_0000u64, 0).unwrap_err();
    assert_eq!(err, Int64Error::InvalidArgument { half: Half::Low });
    assert_eq!(err.to_string(), "Invalid argument: low not a 32-bit integer");

    // The same literal is accepted (as zero) everywhere else
    assert_eq!(Int64::from_loose(0x1_0000_0000u64), Int64::ZERO);
    assert_eq!(Int64::from_halves(7, 0).wrapping_add(0x1_0000_0000u64).low(), 7);
    assert_eq!(lohi_from_one(0x1_0000_0000u64), [0, 0]);
}

#[test]
fn test_non_numeric_is_zero() {
    #[derive(Debug)]
    struct Unrelated;

    impl From<Unrelated> for Operand {
        fn from(_: Unrelated) -> Self {
            Operand::NonNumeric
        }
    }

    assert_eq!(Int64::from_loose(Unrelated), Int64::ZERO);
    assert_eq!(Int64::from_loose("0x1234"), Int64::ZERO);
    assert_eq!(Int64::from_loose(None::<u32>).limbs(), [0, 0]);
}

#[test]
fn test_rendering() {
    let v = Int64::new(0x1234, 0xABCD).unwrap();
    assert_eq!(v.to_hex_string(false), "0x0000abcd00001234");
    assert_eq!(v.to_hex_string(true), "0x0000_abcd_0000_1234");

    let v = Int64::from_halves(0x89AB_CDEF, 0x0123_4567);
    assert_eq!(v.to_string(), "0x0123456789abcdef");
    assert_eq!(format!("{v:#}"), "0x0123_4567_89ab_cdef");
}

#[test]
fn test_layout_address_math() {
    let view = Int64::from_halves(0xFFFF_FFF0, 0x2);
    let vector = view + layout::VIEW_M_VECTOR;
    assert_eq!(vector, Int64::from_halves(0, 0x3));

    let length = view + layout::VIEW_M_LENGTH;
    assert_eq!(length.wrapping_sub(vector), Int64::from_loose(8));

    let end = view + layout::SIZE_VIEW;
    assert_eq!(end - view, Int64::from(layout::SIZE_VIEW));
}

#[test]
fn test_values_are_shareable() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<Int64>();

    let a = Int64::from_loose(3);
    let b = a;
    let c = a + 1;
    assert_eq!(a, b);
    assert_ne!(a, c);
}
