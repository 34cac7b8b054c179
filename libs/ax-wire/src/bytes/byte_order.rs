//! Byte order representation for 32-bit reinterpretation
//!
//! Provides a type-safe enum for the byte/word orderings a 32-bit value can
//! take on the wire. The robot link itself is little-endian throughout; the
//! other orders exist for inspecting dumps from devices that are not.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WireError;

/// Byte/word order of a 32-bit value
///
/// # Naming Convention
/// Uses ABCD notation where:
/// - A = Most significant byte (MSB)
/// - B = Second byte
/// - C = Third byte
/// - D = Least significant byte (LSB)
///
/// For 32-bit value `0x12345678`:
/// - `BigEndian (ABCD)`: [0x12, 0x34, 0x56, 0x78]
/// - `LittleEndian (DCBA)`: [0x78, 0x56, 0x34, 0x12]
/// - `BigEndianSwap (CDAB)`: [0x56, 0x78, 0x12, 0x34]
/// - `LittleEndianSwap (BADC)`: [0x34, 0x12, 0x78, 0x56]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ByteOrder {
    /// Big-endian: ABCD (most significant byte first)
    BigEndian,

    /// Little-endian: DCBA (least significant byte first)
    ///
    /// Wire order of every frame on the robot link.
    #[default]
    LittleEndian,

    /// Big-endian with swapped words: CDAB
    BigEndianSwap,

    /// Little-endian with swapped words: BADC
    LittleEndianSwap,
}

impl ByteOrder {
    /// Get descriptive name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BigEndian => "ABCD (Big-Endian)",
            Self::LittleEndian => "DCBA (Little-Endian)",
            Self::BigEndianSwap => "CDAB (Big-Endian Swap)",
            Self::LittleEndianSwap => "BADC (Little-Endian Swap)",
        }
    }

    /// Short ABCD code, as accepted by `from_str`
    pub fn code(&self) -> &'static str {
        match self {
            Self::BigEndian => "ABCD",
            Self::LittleEndian => "DCBA",
            Self::BigEndianSwap => "CDAB",
            Self::LittleEndianSwap => "BADC",
        }
    }
}

impl FromStr for ByteOrder {
    type Err = WireError;

    /// Supported spellings:
    /// - "ABCD", "AB-CD", "BE", "BIG_ENDIAN" → BigEndian
    /// - "DCBA", "DC-BA", "LE", "LITTLE_ENDIAN" → LittleEndian
    /// - "CDAB", "BIG_ENDIAN_SWAP" → BigEndianSwap
    /// - "BADC", "LITTLE_ENDIAN_SWAP" → LittleEndianSwap
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "");
        match normalized.as_str() {
            "ABCD" | "BE" | "BIG_ENDIAN" | "BIGENDIAN" => Ok(Self::BigEndian),
            "DCBA" | "LE" | "LITTLE_ENDIAN" | "LITTLEENDIAN" => Ok(Self::LittleEndian),
            "CDAB" | "BIG_ENDIAN_SWAP" | "BIGENDIANSWAP" => Ok(Self::BigEndianSwap),
            "BADC" | "LITTLE_ENDIAN_SWAP" | "LITTLEENDIANSWAP" => Ok(Self::LittleEndianSwap),
            _ => Err(WireError::invalid_data(format!("unknown byte order '{}'", s))),
        }
    }
}

impl TryFrom<String> for ByteOrder {
    type Error = WireError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ByteOrder> for String {
    fn from(order: ByteOrder) -> Self {
        order.code().to_string()
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
