//! Fixed-layout wheel velocity command
//!
//! Unlike the wrapper frames, the twist command has its own 14-byte packed
//! layout (little-endian):
//!
//! ```text
//! "WTST" | length: u16 = 6 | crc: u16 | vx*1000: i16 | vy*1000: i16 | w*100: i16
//! ```

use tracing::debug;

use crate::crc::crc16;
use crate::error::{Result, WireError};

pub const TWIST_HEADER: [u8; 4] = *b"WTST";
pub const TWIST_FRAME_LEN: usize = 14;
const DATA_LEN: u16 = 6;

const LINEAR_SCALE: i16 = 1000;
const ANGULAR_SCALE: i16 = 100;

/// Wheel control twist command with velocities in device units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelControlTwist {
    /// Linear x velocity, scaled by 1000
    pub linear_velocity_x: i16,
    /// Linear y velocity, scaled by 1000
    pub linear_velocity_y: i16,
    /// Angular velocity, scaled by 100
    pub angular_velocity: i16,
}

impl WheelControlTwist {
    /// Build a command from unscaled velocities
    ///
    /// Fails with `WireError::Range` when a scaled value leaves `i16`.
    pub fn new(linear_velocity_x: i16, linear_velocity_y: i16, angular_velocity: i16) -> Result<Self> {
        Ok(Self {
            linear_velocity_x: scale(linear_velocity_x, LINEAR_SCALE)?,
            linear_velocity_y: scale(linear_velocity_y, LINEAR_SCALE)?,
            angular_velocity: scale(angular_velocity, ANGULAR_SCALE)?,
        })
    }

    fn data(&self) -> [u8; DATA_LEN as usize] {
        let mut data = [0u8; DATA_LEN as usize];
        data[0..2].copy_from_slice(&self.linear_velocity_x.to_le_bytes());
        data[2..4].copy_from_slice(&self.linear_velocity_y.to_le_bytes());
        data[4..6].copy_from_slice(&self.angular_velocity.to_le_bytes());
        data
    }

    /// Encode the complete 14-byte frame
    pub fn to_bytes(&self) -> [u8; TWIST_FRAME_LEN] {
        let data = self.data();
        let crc = crc16(&data);

        let mut frame = [0u8; TWIST_FRAME_LEN];
        frame[0..4].copy_from_slice(&TWIST_HEADER);
        frame[4..6].copy_from_slice(&DATA_LEN.to_le_bytes());
        frame[6..8].copy_from_slice(&crc.to_le_bytes());
        frame[8..].copy_from_slice(&data);

        debug!(
            "Building twist frame: vx={}, vy={}, w={}, CRC={:04X}",
            self.linear_velocity_x, self.linear_velocity_y, self.angular_velocity, crc
        );
        frame
    }

    /// Parse and verify a twist frame
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() != TWIST_FRAME_LEN {
            return Err(WireError::length(TWIST_FRAME_LEN, data.len()));
        }
        if data[0..4] != TWIST_HEADER {
            return Err(WireError::invalid_data(format!(
                "bad twist header {:02x?}",
                &data[0..4]
            )));
        }

        let length = u16::from_le_bytes([data[4], data[5]]);
        if length != DATA_LEN {
            return Err(WireError::length(DATA_LEN as usize, length as usize));
        }

        let received_crc = u16::from_le_bytes([data[6], data[7]]);
        let calculated_crc = crc16(&data[8..]);
        if received_crc != calculated_crc {
            return Err(WireError::CrcMismatch {
                expected: calculated_crc,
                actual: received_crc,
            });
        }

        Ok(Self {
            linear_velocity_x: i16::from_le_bytes([data[8], data[9]]),
            linear_velocity_y: i16::from_le_bytes([data[10], data[11]]),
            angular_velocity: i16::from_le_bytes([data[12], data[13]]),
        })
    }
}

fn scale(value: i16, factor: i16) -> Result<i16> {
    value
        .checked_mul(factor)
        .ok_or_else(|| WireError::range(i32::from(value) * i32::from(factor), "i16"))
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_reference_frame() {
        let twist = WheelControlTwist::new(-1, 2, -3).unwrap();
        assert_eq!(
            twist.to_bytes(),
            [0x57, 0x54, 0x53, 0x54, 0x06, 0x00, 0x04, 0x56, 0x18, 0xfc, 0xd0, 0x07, 0xd4, 0xfe]
        );
    }

    #[test]
    fn test_scaling() {
        let twist = WheelControlTwist::new(1, -2, 3).unwrap();
        assert_eq!(twist.linear_velocity_x, 1000);
        assert_eq!(twist.linear_velocity_y, -2000);
        assert_eq!(twist.angular_velocity, 300);
    }

    #[test]
    fn test_scaled_overflow() {
        assert!(matches!(
            WheelControlTwist::new(33, 0, 0),
            Err(WireError::Range { target: "i16", .. })
        ));
        assert!(WheelControlTwist::new(0, 0, 327).unwrap().angular_velocity == 32700);
        assert!(WheelControlTwist::new(0, 0, 328).is_err());
    }

    #[test]
    fn test_parse_roundtrip() {
        let twist = WheelControlTwist::new(-1, 2, -3).unwrap();
        assert_eq!(WheelControlTwist::parse(&twist.to_bytes()).unwrap(), twist);
    }

    #[test]
    fn test_parse_rejects_corruption() {
        let mut frame = WheelControlTwist::new(1, 1, 1).unwrap().to_bytes();
        frame[13] ^= 0x80;
        assert!(matches!(
            WheelControlTwist::parse(&frame),
            Err(WireError::CrcMismatch { .. })
        ));

        let mut frame = WheelControlTwist::new(1, 1, 1).unwrap().to_bytes();
        frame[0] = b'X';
        assert!(matches!(
            WheelControlTwist::parse(&frame),
            Err(WireError::InvalidData(_))
        ));

        assert_eq!(
            WheelControlTwist::parse(&frame[..13]).unwrap_err(),
            WireError::length(14, 13)
        );
    }
}
