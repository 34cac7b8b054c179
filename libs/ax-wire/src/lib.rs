//! Axlink Wire Codec Library
//!
//! Binary encoding for the robot TCP link.
//!
//! # Architecture
//!
//! This library provides:
//! - **Bytes Utilities**: Byte order handling, `u32` ↔ IEEE-754 binary32 bit-casts, hex dumps
//! - **CRC**: CRC-16/Modbus checksum carried by every frame
//! - **Serialization**: `WireFormat` trait with little-endian, length-prefixed encoding
//! - **Framing**: Magic + length + CRC wrapper, and an incremental stream parser
//! - **Messages**: Typed robot messages (odometry, wheel state, device telemetry, ...)
//! - **Twist**: The fixed-layout wheel velocity command

pub mod bytes;
pub mod crc;
pub mod error;
pub mod frame;
pub mod messages;
pub mod serialization;
pub mod time;
pub mod twist;

// Re-export core types
pub use crate::bytes::{
    decode_le_f32, decode_le_u32, encode_le_f32, encode_le_u32, format_bytes, try_encode_le_u32,
    ByteOrder,
};
pub use error::{Result, WireError};
pub use frame::{from_buffer, to_buffer, FrameParser, Message, RawFrame};
pub use serialization::{deserialize, serialize, WireFormat};
pub use time::{Duration, Time};
pub use twist::WheelControlTwist;
