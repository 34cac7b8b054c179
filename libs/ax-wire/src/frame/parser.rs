//! Incremental frame parser for stream transports
//!
//! TCP delivers frames split and coalesced arbitrarily; the parser buffers
//! whatever arrives and hands out complete, CRC-checked frames.

use ::bytes::{Buf, BytesMut};
use tracing::{debug, warn};

use super::{FrameHeader, RawFrame, HEADER_LEN};
use crate::crc::crc16;
use crate::error::{Result, WireError};

/// Default upper bound on a single frame payload (1 MiB)
pub const DEFAULT_MAX_PAYLOAD: usize = 1024 * 1024;

/// Stream frame parser
#[derive(Debug)]
pub struct FrameParser {
    buffer: BytesMut,
    max_payload: usize,
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    pub fn new() -> Self {
        Self::with_max_payload(DEFAULT_MAX_PAYLOAD)
    }

    pub fn with_max_payload(max_payload: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(HEADER_LEN * 8),
            max_payload,
        }
    }

    /// Append received bytes
    pub fn feed(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Bytes received but not yet returned as a frame
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Take the next complete frame
    ///
    /// Returns `Ok(None)` while the buffered data is incomplete. A frame
    /// failing its CRC is consumed before the error is returned, so the
    /// caller can keep calling to reach the frames behind it. An oversized
    /// length field leaves no way to find the next frame boundary; the
    /// buffer is discarded.
    pub fn next_frame(&mut self) -> Result<Option<RawFrame>> {
        if self.buffer.len() < HEADER_LEN {
            return Ok(None);
        }

        let header = FrameHeader::parse(&self.buffer)?;
        let payload_len = header.data_length as usize;
        if payload_len > self.max_payload {
            warn!(
                "Frame payload {} exceeds limit {}, dropping {} buffered bytes",
                payload_len,
                self.max_payload,
                self.buffer.len()
            );
            self.buffer.clear();
            return Err(WireError::FrameTooLarge {
                length: payload_len,
                limit: self.max_payload,
            });
        }

        if self.buffer.len() < header.frame_length() {
            return Ok(None);
        }

        self.buffer.advance(HEADER_LEN);
        let payload = self.buffer.split_to(payload_len);

        let calculated = crc16(&payload);
        if calculated != header.crc16 {
            warn!(
                "check sum failed: magic={:02x?}, expected 0x{:04X}, got 0x{:04X}",
                header.magic, calculated, header.crc16
            );
            return Err(WireError::CrcMismatch {
                expected: calculated,
                actual: header.crc16,
            });
        }

        debug!(
            "Frame complete: magic={:02x?}, payload_len={}",
            header.magic, payload_len
        );
        Ok(Some(RawFrame {
            magic: header.magic,
            payload: payload.to_vec(),
        }))
    }
}
