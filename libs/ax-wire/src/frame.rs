//! Wrapper frame for messages on the robot TCP link
//!
//! ```text
//! +--------+-----------------+------------+-------------------+
//! | magic  | payload length  | CRC-16     | payload           |
//! | 2 B    | u32 LE          | u16 LE     | `length` bytes    |
//! +--------+-----------------+------------+-------------------+
//! ```
//!
//! The magic identifies the message type; the CRC covers the payload only.

mod parser;

pub use parser::{FrameParser, DEFAULT_MAX_PAYLOAD};

use tracing::debug;

use crate::crc::crc16;
use crate::error::{Result, WireError};
use crate::serialization::{self, IStream, OStream, WireFormat};

/// Size of the frame header in bytes
pub const HEADER_LEN: usize = 8;

/// A message type with its own frame magic
pub trait Message: WireFormat {
    const MAGIC: [u8; 2];
    const NAME: &'static str;
}

/// Decoded frame header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub magic: [u8; 2],
    pub data_length: u32,
    pub crc16: u16,
}

impl FrameHeader {
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0..2].copy_from_slice(&self.magic);
        out[2..6].copy_from_slice(&self.data_length.to_le_bytes());
        out[6..8].copy_from_slice(&self.crc16.to_le_bytes());
        out
    }

    /// Parse the header from the front of `data`
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(WireError::Truncated {
                needed: HEADER_LEN,
                available: data.len(),
            });
        }
        let mut input = IStream::new(&data[..HEADER_LEN]);
        Ok(Self {
            magic: input.read_array()?,
            data_length: u32::read(&mut input)?,
            crc16: u16::read(&mut input)?,
        })
    }

    /// Header plus payload length
    pub fn frame_length(&self) -> usize {
        HEADER_LEN + self.data_length as usize
    }
}

/// A CRC-checked frame whose payload has not been decoded yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    pub magic: [u8; 2],
    pub payload: Vec<u8>,
}

impl RawFrame {
    /// Check whether this frame carries message type `M`
    pub fn is<M: Message>(&self) -> bool {
        self.magic == M::MAGIC
    }

    /// Decode the payload as message type `M`
    pub fn decode<M: Message>(&self) -> Result<M> {
        if !self.is::<M>() {
            return Err(WireError::MagicMismatch {
                expected: M::MAGIC,
                found: self.magic,
            });
        }
        serialization::deserialize(&self.payload)
    }
}

/// Build a complete frame around an already serialized payload
pub fn encode_frame(magic: [u8; 2], payload: &[u8]) -> Result<Vec<u8>> {
    let data_length =
        u32::try_from(payload.len()).map_err(|_| WireError::range(payload.len(), "u32"))?;
    let header = FrameHeader {
        magic,
        data_length,
        crc16: crc16(payload),
    };

    let mut frame = Vec::with_capacity(HEADER_LEN + payload.len());
    frame.extend_from_slice(&header.encode());
    frame.extend_from_slice(payload);
    Ok(frame)
}

/// Serialize `msg` and append it to `buffer` as a complete frame
pub fn to_buffer<M: Message>(msg: &M, buffer: &mut Vec<u8>) -> Result<()> {
    let msg_length = msg.serialized_length();
    let start = buffer.len();
    buffer.resize(start + HEADER_LEN + msg_length as usize, 0);

    let payload = &mut buffer[start + HEADER_LEN..];
    let mut out = OStream::new(payload);
    if let Err(e) = msg.write(&mut out) {
        buffer.truncate(start);
        return Err(e);
    }

    let header = FrameHeader {
        magic: M::MAGIC,
        data_length: msg_length,
        crc16: crc16(&buffer[start + HEADER_LEN..]),
    };
    buffer[start..start + HEADER_LEN].copy_from_slice(&header.encode());

    debug!(
        "Encoded {} frame: payload_len={}, CRC={:04X}",
        M::NAME,
        msg_length,
        header.crc16
    );
    Ok(())
}

/// Decode a message of type `M` from the front of `buffer`
///
/// Checks, in order: header present, magic, payload present, CRC.
pub fn from_buffer<M: Message>(buffer: &[u8]) -> Result<M> {
    let header = FrameHeader::parse(buffer)?;

    if header.magic != M::MAGIC {
        return Err(WireError::MagicMismatch {
            expected: M::MAGIC,
            found: header.magic,
        });
    }

    if buffer.len() < header.frame_length() {
        return Err(WireError::Truncated {
            needed: header.frame_length(),
            available: buffer.len(),
        });
    }

    let payload = &buffer[HEADER_LEN..header.frame_length()];
    let calculated = crc16(payload);
    if calculated != header.crc16 {
        return Err(WireError::CrcMismatch {
            expected: calculated,
            actual: header.crc16,
        });
    }

    debug!(
        "Decoding {} frame: payload_len={}",
        M::NAME,
        header.data_length
    );
    serialization::deserialize(payload)
}
