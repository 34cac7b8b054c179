//! Reinterpretation Tests
//!
//! Bit-level behaviour of the u32 ↔ binary32 conversions:
//! - The fixed demo value 0xC016147B
//! - Round-trip laws over the whole u32 domain
//! - Width and range failures

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use ax_wire::bytes::{bytes_to_f32, f32_to_bytes, parse_hex_bytes, u32_to_bytes};
use ax_wire::{
    decode_le_f32, decode_le_u32, encode_le_f32, encode_le_u32, format_bytes, try_encode_le_u32,
    ByteOrder, WireError,
};
use proptest::prelude::*;

const DEMO_VALUE: u32 = 0xC016147B;

// ============================================================================
// Demo value
// ============================================================================

#[test]
fn test_demo_bytes() {
    assert_eq!(encode_le_u32(DEMO_VALUE), [0x7b, 0x14, 0x16, 0xc0]);
}

#[test]
fn test_demo_formatting() {
    assert_eq!(
        format_bytes(&encode_le_u32(DEMO_VALUE)),
        "0x7b, 0x14, 0x16, 0xc0, "
    );
}

#[test]
fn test_demo_float() {
    let value = decode_le_f32(&[0x7b, 0x14, 0x16, 0xc0]).unwrap();
    assert_eq!(encode_le_f32(value), [0x7b, 0x14, 0x16, 0xc0]);
    assert_eq!(value.to_bits(), DEMO_VALUE);
    assert_eq!(f64::from(value), -2.3450000286102295);
    assert_eq!(format!("{}", value), "-2.345");
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_wrong_widths() {
    for len in [0usize, 1, 2, 3, 5, 8] {
        let bytes = vec![0u8; len];
        assert_eq!(decode_le_f32(&bytes), Err(WireError::length(4, len)));
        assert_eq!(decode_le_u32(&bytes), Err(WireError::length(4, len)));
    }
}

#[test]
fn test_out_of_range_inputs() {
    for value in [-1i64, i64::MIN, 1 << 32, i64::MAX] {
        assert!(
            matches!(try_encode_le_u32(value), Err(WireError::Range { .. })),
            "value {} should be rejected",
            value
        );
    }
}

// ============================================================================
// Special float patterns
// ============================================================================

#[test]
fn test_special_patterns_survive() {
    let patterns: [u32; 8] = [
        0x0000_0000, // +0
        0x8000_0000, // -0
        0x7F80_0000, // +inf
        0xFF80_0000, // -inf
        0x7FC0_0000, // quiet NaN
        0x7F80_0001, // signalling NaN
        0xFFFF_FFFF, // negative NaN, full payload
        0x0000_0001, // smallest subnormal
    ];

    for bits in patterns {
        let bytes = encode_le_u32(bits);
        let value = decode_le_f32(&bytes).unwrap();
        assert_eq!(value.to_bits(), bits, "pattern {:08X}", bits);
        assert_eq!(encode_le_f32(value), bytes, "pattern {:08X}", bits);
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_u32_roundtrip(value in any::<u32>()) {
        prop_assert_eq!(decode_le_u32(&encode_le_u32(value)).unwrap(), value);
    }

    #[test]
    fn prop_byte_zero_is_least_significant(value in any::<u32>()) {
        let bytes = encode_le_u32(value);
        prop_assert_eq!(bytes[0], (value & 0xFF) as u8);
        prop_assert_eq!(bytes[3], (value >> 24) as u8);
    }

    #[test]
    fn prop_float_bitcast_roundtrip(bytes in any::<[u8; 4]>()) {
        let value = decode_le_f32(&bytes).unwrap();
        prop_assert_eq!(encode_le_f32(value), bytes);
    }

    #[test]
    fn prop_checked_encode_agrees(value in any::<u32>()) {
        prop_assert_eq!(try_encode_le_u32(i64::from(value)).unwrap(), encode_le_u32(value));
    }

    #[test]
    fn prop_ordered_float_roundtrip(bits in any::<u32>(), order_idx in 0usize..4) {
        let order = [
            ByteOrder::BigEndian,
            ByteOrder::LittleEndian,
            ByteOrder::BigEndianSwap,
            ByteOrder::LittleEndianSwap,
        ][order_idx];
        let bytes = u32_to_bytes(bits, order);
        let value = bytes_to_f32(&bytes, order);
        prop_assert_eq!(value.to_bits(), bits);
        prop_assert_eq!(f32_to_bytes(value, order), bytes);
    }

    #[test]
    fn prop_format_parse_inverse(bytes in proptest::collection::vec(any::<u8>(), 0..32)) {
        prop_assert_eq!(parse_hex_bytes(&format_bytes(&bytes)).unwrap(), bytes);
    }
}
