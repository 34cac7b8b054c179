//! Robot link message types
//!
//! Fields serialize in declaration order. Types with a frame magic implement
//! [`Message`] and can travel on their own; the rest only appear nested.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WireError};
use crate::frame::Message;
use crate::serialization::{IStream, OStream, WireFormat};
use crate::time::Time;

/// Implements `WireFormat` by visiting the listed fields in order
macro_rules! wire_struct {
    ($name:ident { $($field:ident: $ty:ty),* $(,)? }) => {
        impl WireFormat for $name {
            const FIXED_SIZE: bool = true $( && <$ty as WireFormat>::FIXED_SIZE )*;

            fn write(&self, out: &mut OStream<'_>) -> Result<()> {
                $( self.$field.write(out)?; )*
                Ok(())
            }

            fn read(input: &mut IStream<'_>) -> Result<Self> {
                Ok(Self {
                    $( $field: <$ty as WireFormat>::read(input)?, )*
                })
            }

            fn serialized_length(&self) -> u32 {
                0 $( + self.$field.serialized_length() )*
            }
        }
    };
}

macro_rules! message {
    ($name:ident, $magic:expr) => {
        impl Message for $name {
            const MAGIC: [u8; 2] = $magic;
            const NAME: &'static str = stringify!($name);
        }
    };
}

// ============================================================================
// Nested types
// ============================================================================

/// Standard metadata header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub seq: u32,
    pub stamp: Time,
    pub frame_id: String,
}
wire_struct!(Header {
    seq: u32,
    stamp: Time,
    frame_id: String,
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
wire_struct!(Vector3 { x: f64, y: f64, z: f64 });

/// Named velocity command
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomMsg {
    pub name: String,
    pub linear_velocity_x: f32,
    pub linear_velocity_y: f32,
    pub angular_velocity: f32,
}
wire_struct!(CustomMsg {
    name: String,
    linear_velocity_x: f32,
    linear_velocity_y: f32,
    angular_velocity: f32,
});

impl CustomMsg {
    pub fn new(
        name: impl Into<String>,
        linear_velocity_x: f32,
        linear_velocity_y: f32,
        angular_velocity: f32,
    ) -> Self {
        Self {
            name: name.into(),
            linear_velocity_x,
            linear_velocity_y,
            angular_velocity,
        }
    }
}

impl fmt::Display for CustomMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name, self.linear_velocity_x, self.linear_velocity_y, self.angular_velocity
        )
    }
}

/// Wheel controller enable state, an `i32` on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum WheelControlEnableState {
    #[default]
    Unknown = 0,
    Enabled = 1,
    Disabled = 2,
}

impl TryFrom<i32> for WheelControlEnableState {
    type Error = WireError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Enabled),
            2 => Ok(Self::Disabled),
            other => Err(WireError::invalid_data(format!(
                "unknown wheel control enable state {}",
                other
            ))),
        }
    }
}

impl WireFormat for WheelControlEnableState {
    const FIXED_SIZE: bool = true;

    fn write(&self, out: &mut OStream<'_>) -> Result<()> {
        (*self as i32).write(out)
    }

    fn read(input: &mut IStream<'_>) -> Result<Self> {
        Self::try_from(i32::read(input)?)
    }

    fn serialized_length(&self) -> u32 {
        4
    }
}

// ============================================================================
// Framed messages
// ============================================================================

/// Odometry report
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Odom {
    pub stamp: Time,
    pub twist_linear_x: f32,
    pub twist_linear_y: f32,
    pub twist_angular: f32,
}
wire_struct!(Odom {
    stamp: Time,
    twist_linear_x: f32,
    twist_linear_y: f32,
    twist_angular: f32,
});
message!(Odom, *b"AB");

/// Two fixed commands followed by a variable list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomMsgArray {
    pub msgs: [CustomMsg; 2],
    pub msgs_vector: Vec<CustomMsg>,
}
wire_struct!(CustomMsgArray {
    msgs: [CustomMsg; 2],
    msgs_vector: Vec<CustomMsg>,
});
message!(CustomMsgArray, *b"B2");

/// Motor driver telemetry for both wheels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceState {
    pub left_voltage: u16,
    pub left_current: u16,
    pub left_temperature: u16,
    pub left_code: u16,

    pub right_voltage: u16,
    pub right_current: u16,
    pub right_temperature: u16,
    pub right_code: u16,
}
wire_struct!(DeviceState {
    left_voltage: u16,
    left_current: u16,
    left_temperature: u16,
    left_code: u16,
    right_voltage: u16,
    right_current: u16,
    right_temperature: u16,
    right_code: u16,
});
message!(DeviceState, *b"DS");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpRobotControl {
    pub enable_wheels: bool,
}
wire_struct!(TcpRobotControl { enable_wheels: bool });
message!(TcpRobotControl, [0xba, 0xe1]);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpRobotState {
    pub wheels_enabled: bool,
    pub battery_percent: u8,
    pub is_charge: bool,
}
wire_struct!(TcpRobotState {
    wheels_enabled: bool,
    battery_percent: u8,
    is_charge: bool,
});
message!(TcpRobotState, [0xab, 0xd0]);

/// Shares its magic with `TcpRobotControl`; the layouts are identical
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelEnable {
    pub enable_state: bool,
}
wire_struct!(WheelEnable { enable_state: bool });
message!(WheelEnable, [0xba, 0xe1]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelState {
    pub enable_state: WheelControlEnableState,
    pub wheel_error_msg: String,
}
wire_struct!(WheelState {
    enable_state: WheelControlEnableState,
    wheel_error_msg: String,
});
message!(WheelState, *b"A3");

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::serialization::{deserialize, serialize};

    #[test]
    fn test_fixed_size_flags() {
        assert!(<Odom as WireFormat>::FIXED_SIZE);
        assert!(<DeviceState as WireFormat>::FIXED_SIZE);
        assert!(<Vector3 as WireFormat>::FIXED_SIZE);
        assert!(!<Header as WireFormat>::FIXED_SIZE);
        assert!(!<CustomMsg as WireFormat>::FIXED_SIZE);
        assert!(!<WheelState as WireFormat>::FIXED_SIZE);
    }

    #[test]
    fn test_odom_layout() {
        let odom = Odom {
            stamp: Time::new(1, 2),
            twist_linear_x: 1.5,
            twist_linear_y: -0.25,
            twist_angular: 0.0,
        };
        let bytes = serialize(&odom).unwrap();
        assert_eq!(
            bytes,
            [
                1, 0, 0, 0, 2, 0, 0, 0, // stamp
                0x00, 0x00, 0xc0, 0x3f, // 1.5
                0x00, 0x00, 0x80, 0xbe, // -0.25
                0x00, 0x00, 0x00, 0x00, // 0.0
            ]
        );
        assert_eq!(deserialize::<Odom>(&bytes).unwrap(), odom);
    }

    #[test]
    fn test_custom_msg_display() {
        let msg = CustomMsg::new("left", 1.5, 0.0, -2.25);
        assert_eq!(msg.to_string(), "left 1.5 0 -2.25");
    }

    #[test]
    fn test_custom_msg_array_length() {
        let array = CustomMsgArray {
            msgs: [CustomMsg::new("a", 0.0, 0.0, 0.0), CustomMsg::default()],
            msgs_vector: vec![CustomMsg::new("bc", 1.0, 2.0, 3.0)],
        };
        // (4+1+12) + (4+0+12) + 4 + (4+2+12)
        assert_eq!(array.serialized_length(), 55);
        let bytes = serialize(&array).unwrap();
        assert_eq!(bytes.len(), 55);
        assert_eq!(deserialize::<CustomMsgArray>(&bytes).unwrap(), array);
    }

    #[test]
    fn test_device_state_field_order() {
        let state = DeviceState {
            left_voltage: 0x0102,
            right_code: 0x0304,
            ..Default::default()
        };
        let bytes = serialize(&state).unwrap();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[..2], &[0x02, 0x01]);
        assert_eq!(&bytes[14..], &[0x04, 0x03]);
    }

    #[test]
    fn test_wheel_state_enum() {
        let state = WheelState {
            enable_state: WheelControlEnableState::Disabled,
            wheel_error_msg: "stall".to_string(),
        };
        let bytes = serialize(&state).unwrap();
        assert_eq!(&bytes[..4], &[2, 0, 0, 0]);
        assert_eq!(deserialize::<WheelState>(&bytes).unwrap(), state);
    }

    #[test]
    fn test_wheel_state_unknown_enum_value() {
        let bytes = [7, 0, 0, 0, 0, 0, 0, 0];
        assert!(matches!(
            deserialize::<WheelState>(&bytes),
            Err(WireError::InvalidData(_))
        ));
    }

    #[test]
    fn test_header_roundtrip() {
        let header = Header {
            seq: 9,
            stamp: Time::new(100, 5),
            frame_id: "base_link".to_string(),
        };
        let bytes = serialize(&header).unwrap();
        assert_eq!(bytes.len(), 4 + 8 + 4 + 9);
        assert_eq!(deserialize::<Header>(&bytes).unwrap(), header);
    }

    #[test]
    fn test_magics() {
        assert_eq!(Odom::MAGIC, *b"AB");
        assert_eq!(TcpRobotControl::MAGIC, WheelEnable::MAGIC);
        assert_eq!(TcpRobotState::NAME, "TcpRobotState");
    }
}
