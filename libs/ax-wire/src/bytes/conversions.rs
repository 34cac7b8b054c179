//! 32-bit integer and float reinterpretation
//!
//! Every conversion here is a bit-level operation: integers are split into
//! bytes and floats are bit-cast, never numerically converted. NaN payloads
//! and subnormals therefore survive a round trip unchanged.

use super::ByteOrder;
use crate::error::{Result, WireError};

// ============================================================================
// Little-endian reinterpretation
// ============================================================================

/// Encode a `u32` as 4 little-endian bytes
///
/// `0xC016147B` → `[0x7b, 0x14, 0x16, 0xc0]`
pub fn encode_le_u32(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Encode a wider integer as 4 little-endian bytes
///
/// Fails with `WireError::Range` for negative values and values ≥ 2^32.
pub fn try_encode_le_u32(value: i64) -> Result<[u8; 4]> {
    let narrowed = u32::try_from(value).map_err(|_| WireError::range(value, "u32"))?;
    Ok(encode_le_u32(narrowed))
}

/// Decode exactly 4 little-endian bytes into a `u32`
pub fn decode_le_u32(bytes: &[u8]) -> Result<u32> {
    Ok(u32::from_le_bytes(exact_4(bytes)?))
}

/// Reinterpret exactly 4 little-endian bytes as an IEEE-754 binary32
pub fn decode_le_f32(bytes: &[u8]) -> Result<f32> {
    Ok(f32::from_le_bytes(exact_4(bytes)?))
}

/// Inverse bit-cast of `decode_le_f32`
pub fn encode_le_f32(value: f32) -> [u8; 4] {
    value.to_le_bytes()
}

fn exact_4(bytes: &[u8]) -> Result<[u8; 4]> {
    <[u8; 4]>::try_from(bytes).map_err(|_| WireError::length(4, bytes.len()))
}

// ============================================================================
// Ordered conversions
// ============================================================================

/// Convert a `u32` to 4 bytes with specified byte order
pub fn u32_to_bytes(value: u32, order: ByteOrder) -> [u8; 4] {
    let [a, b, c, d] = value.to_be_bytes();

    match order {
        ByteOrder::BigEndian => [a, b, c, d],        // ABCD
        ByteOrder::LittleEndian => [d, c, b, a],     // DCBA
        ByteOrder::BigEndianSwap => [c, d, a, b],    // CDAB
        ByteOrder::LittleEndianSwap => [b, a, d, c], // BADC
    }
}

/// Convert 4 bytes to `u32` with specified byte order
pub fn bytes_to_u32(bytes: &[u8; 4], order: ByteOrder) -> u32 {
    let [w, x, y, z] = *bytes;

    let abcd = match order {
        ByteOrder::BigEndian => [w, x, y, z],
        ByteOrder::LittleEndian => [z, y, x, w],
        ByteOrder::BigEndianSwap => [y, z, w, x],
        ByteOrder::LittleEndianSwap => [x, w, z, y],
    };
    u32::from_be_bytes(abcd)
}

/// Reinterpret 4 bytes as `f32` with specified byte order
pub fn bytes_to_f32(bytes: &[u8; 4], order: ByteOrder) -> f32 {
    f32::from_bits(bytes_to_u32(bytes, order))
}

/// Convert an `f32` bit pattern to 4 bytes with specified byte order
pub fn f32_to_bytes(value: f32, order: ByteOrder) -> [u8; 4] {
    u32_to_bytes(value.to_bits(), order)
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    const ALL_ORDERS: [ByteOrder; 4] = [
        ByteOrder::BigEndian,
        ByteOrder::LittleEndian,
        ByteOrder::BigEndianSwap,
        ByteOrder::LittleEndianSwap,
    ];

    #[test]
    fn test_encode_le_u32_demo_value() {
        assert_eq!(encode_le_u32(0xC016147B), [0x7b, 0x14, 0x16, 0xc0]);
    }

    #[test]
    fn test_try_encode_le_u32_range() {
        assert_eq!(try_encode_le_u32(0).unwrap(), [0, 0, 0, 0]);
        assert_eq!(
            try_encode_le_u32(u32::MAX as i64).unwrap(),
            [0xff, 0xff, 0xff, 0xff]
        );
        assert!(matches!(
            try_encode_le_u32(-1),
            Err(WireError::Range { target: "u32", .. })
        ));
        assert!(matches!(
            try_encode_le_u32(1 << 32),
            Err(WireError::Range { .. })
        ));
    }

    #[test]
    fn test_decode_le_f32_demo_value() {
        let value = decode_le_f32(&[0x7b, 0x14, 0x16, 0xc0]).unwrap();
        assert_eq!(value.to_bits(), 0xC016147B);
        assert_eq!(value.to_string(), "-2.345");
    }

    #[test]
    fn test_decode_length_errors() {
        assert_eq!(
            decode_le_f32(&[0x7b, 0x14, 0x16]),
            Err(WireError::length(4, 3))
        );
        assert_eq!(
            decode_le_f32(&[0x7b, 0x14, 0x16, 0xc0, 0x00]),
            Err(WireError::length(4, 5))
        );
        assert_eq!(decode_le_u32(&[]), Err(WireError::length(4, 0)));
    }

    #[test]
    fn test_nan_payload_preserved() {
        // Signalling NaN with a non-canonical payload
        let bytes = [0x01, 0x00, 0x80, 0x7f];
        let value = decode_le_f32(&bytes).unwrap();
        assert!(value.is_nan());
        assert_eq!(encode_le_f32(value), bytes);
    }

    #[test]
    fn test_subnormal_preserved() {
        let bytes = encode_le_u32(0x0000_0001);
        let value = decode_le_f32(&bytes).unwrap();
        assert!(value.is_subnormal());
        assert_eq!(encode_le_f32(value), bytes);
    }

    #[test]
    fn test_u32_to_bytes_all_orders() {
        let value = 0x12345678;

        assert_eq!(
            u32_to_bytes(value, ByteOrder::BigEndian),
            [0x12, 0x34, 0x56, 0x78]
        );
        assert_eq!(
            u32_to_bytes(value, ByteOrder::LittleEndian),
            [0x78, 0x56, 0x34, 0x12]
        );
        assert_eq!(
            u32_to_bytes(value, ByteOrder::BigEndianSwap),
            [0x56, 0x78, 0x12, 0x34]
        );
        assert_eq!(
            u32_to_bytes(value, ByteOrder::LittleEndianSwap),
            [0x34, 0x12, 0x78, 0x56]
        );
    }

    #[test]
    fn test_ordered_roundtrip() {
        for order in ALL_ORDERS {
            let bytes = u32_to_bytes(0xC016147B, order);
            assert_eq!(bytes_to_u32(&bytes, order), 0xC016147B, "{}", order);
        }
    }

    #[test]
    fn test_little_endian_matches_le_helpers() {
        let bytes = u32_to_bytes(0xC016147B, ByteOrder::LittleEndian);
        assert_eq!(bytes, encode_le_u32(0xC016147B));
        assert_eq!(
            bytes_to_f32(&bytes, ByteOrder::LittleEndian).to_bits(),
            decode_le_f32(&bytes).unwrap().to_bits()
        );
    }

    #[test]
    fn test_bytes_to_f32_big_endian() {
        // 25.0 in IEEE 754: 0x41C80000
        let value = bytes_to_f32(&[0x41, 0xC8, 0x00, 0x00], ByteOrder::BigEndian);
        assert!((value - 25.0).abs() < f32::EPSILON);
        assert_eq!(
            f32_to_bytes(25.0, ByteOrder::BigEndianSwap),
            [0x00, 0x00, 0x41, 0xC8]
        );
    }
}
