//! Wire Codec Error Types
//!
//! Core error types for byte reinterpretation, serialization and framing.

use thiserror::Error;

/// Result type for ax-wire operations
pub type Result<T> = std::result::Result<T, WireError>;

/// Wire codec errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WireError {
    /// Integer outside the range of the target width
    #[error("Range error: {value} does not fit in {target}")]
    Range { value: String, target: &'static str },

    /// Byte sequence of the wrong width
    #[error("Length error: expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },

    /// Serialization stream ran past its buffer
    #[error("Stream overrun: requested {requested} bytes, {remaining} remaining")]
    StreamOverrun { requested: usize, remaining: usize },

    /// Buffer too short to hold a complete frame
    #[error("Truncated frame: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    /// Frame magic does not match the expected message type
    #[error("Magic mismatch: expected {expected:02x?}, found {found:02x?}")]
    MagicMismatch { expected: [u8; 2], found: [u8; 2] },

    /// Checksum failure
    #[error("CRC mismatch: expected 0x{expected:04X}, got 0x{actual:04X}")]
    CrcMismatch { expected: u16, actual: u16 },

    /// Frame header announces a payload above the configured limit
    #[error("Frame too large: {length} bytes exceeds limit of {limit}")]
    FrameTooLarge { length: usize, limit: usize },

    /// Invalid data
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

// Helper methods for creating errors
impl WireError {
    pub fn range(value: impl ToString, target: &'static str) -> Self {
        WireError::Range {
            value: value.to_string(),
            target,
        }
    }

    pub fn length(expected: usize, actual: usize) -> Self {
        WireError::Length { expected, actual }
    }

    pub fn invalid_data(msg: impl Into<String>) -> Self {
        WireError::InvalidData(msg.into())
    }

    /// Check if the error came from a corrupted or misrouted frame
    ///
    /// Stream consumers skip such frames and keep reading.
    pub fn is_frame_corruption(&self) -> bool {
        matches!(
            self,
            WireError::CrcMismatch { .. } | WireError::MagicMismatch { .. }
        )
    }
}
