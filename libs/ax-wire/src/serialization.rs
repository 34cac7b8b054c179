//! Little-endian message serialization
//!
//! ROS1-compatible binary layout:
//! - integers and floats: fixed width, little-endian
//! - `bool`: one byte
//! - `String`: `u32` byte length, then UTF-8 bytes
//! - `Vec<T>`: `u32` element count, then elements
//! - `[T; N]`: N elements, no count
//! - `Time` / `Duration`: `sec: u32`, `nsec: u32`
//!
//! Messages implement [`WireFormat`] by writing their fields in declaration
//! order; [`serialize`] sizes the output buffer from `serialized_length`
//! before writing.

mod stream;

pub use stream::{IStream, OStream};

use crate::error::{Result, WireError};
use crate::time::{Duration, Time};

/// Types with a binary wire representation
pub trait WireFormat: Sized {
    /// Whether every value of the type serializes to the same length
    const FIXED_SIZE: bool;

    fn write(&self, out: &mut OStream<'_>) -> Result<()>;

    fn read(input: &mut IStream<'_>) -> Result<Self>;

    fn serialized_length(&self) -> u32;
}

/// Serialize a value into a freshly sized buffer
pub fn serialize<T: WireFormat>(value: &T) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; value.serialized_length() as usize];
    let mut out = OStream::new(&mut buf);
    value.write(&mut out)?;
    Ok(buf)
}

/// Deserialize a value from the front of `bytes`
///
/// Trailing bytes after the value are ignored.
pub fn deserialize<T: WireFormat>(bytes: &[u8]) -> Result<T> {
    let mut input = IStream::new(bytes);
    T::read(&mut input)
}

pub fn serialization_length<T: WireFormat>(value: &T) -> u32 {
    value.serialized_length()
}

// ============================================================================
// Primitive implementations
// ============================================================================

macro_rules! impl_wire_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl WireFormat for $ty {
                const FIXED_SIZE: bool = true;

                fn write(&self, out: &mut OStream<'_>) -> Result<()> {
                    out.write_bytes(&self.to_le_bytes())
                }

                fn read(input: &mut IStream<'_>) -> Result<Self> {
                    Ok(<$ty>::from_le_bytes(input.read_array()?))
                }

                fn serialized_length(&self) -> u32 {
                    std::mem::size_of::<$ty>() as u32
                }
            }
        )*
    };
}

impl_wire_primitive!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl WireFormat for bool {
    const FIXED_SIZE: bool = true;

    fn write(&self, out: &mut OStream<'_>) -> Result<()> {
        u8::from(*self).write(out)
    }

    fn read(input: &mut IStream<'_>) -> Result<Self> {
        Ok(u8::read(input)? != 0)
    }

    fn serialized_length(&self) -> u32 {
        1
    }
}

impl WireFormat for String {
    const FIXED_SIZE: bool = false;

    fn write(&self, out: &mut OStream<'_>) -> Result<()> {
        let len = u32::try_from(self.len()).map_err(|_| WireError::range(self.len(), "u32"))?;
        len.write(out)?;
        out.write_bytes(self.as_bytes())
    }

    fn read(input: &mut IStream<'_>) -> Result<Self> {
        let len = u32::read(input)? as usize;
        let bytes = input.advance(len)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| WireError::invalid_data(format!("string is not UTF-8: {}", e)))
    }

    fn serialized_length(&self) -> u32 {
        4 + self.len() as u32
    }
}

impl WireFormat for Time {
    const FIXED_SIZE: bool = true;

    fn write(&self, out: &mut OStream<'_>) -> Result<()> {
        self.sec.write(out)?;
        self.nsec.write(out)
    }

    fn read(input: &mut IStream<'_>) -> Result<Self> {
        Ok(Time {
            sec: u32::read(input)?,
            nsec: u32::read(input)?,
        })
    }

    fn serialized_length(&self) -> u32 {
        8
    }
}

impl WireFormat for Duration {
    const FIXED_SIZE: bool = true;

    fn write(&self, out: &mut OStream<'_>) -> Result<()> {
        self.sec.write(out)?;
        self.nsec.write(out)
    }

    fn read(input: &mut IStream<'_>) -> Result<Self> {
        Ok(Duration {
            sec: u32::read(input)?,
            nsec: u32::read(input)?,
        })
    }

    fn serialized_length(&self) -> u32 {
        8
    }
}

// ============================================================================
// Containers
// ============================================================================

impl<T: WireFormat> WireFormat for Vec<T> {
    const FIXED_SIZE: bool = false;

    fn write(&self, out: &mut OStream<'_>) -> Result<()> {
        let count = u32::try_from(self.len()).map_err(|_| WireError::range(self.len(), "u32"))?;
        count.write(out)?;
        self.iter().try_for_each(|item| item.write(out))
    }

    fn read(input: &mut IStream<'_>) -> Result<Self> {
        let count = u32::read(input)? as usize;
        // Every element takes at least one byte, so a count beyond the
        // remaining input can only come from a corrupt length field.
        if count > input.remaining() {
            return Err(WireError::StreamOverrun {
                requested: count,
                remaining: input.remaining(),
            });
        }
        (0..count).map(|_| T::read(input)).collect()
    }

    fn serialized_length(&self) -> u32 {
        4 + self.iter().map(WireFormat::serialized_length).sum::<u32>()
    }
}

impl<T: WireFormat, const N: usize> WireFormat for [T; N] {
    const FIXED_SIZE: bool = T::FIXED_SIZE;

    fn write(&self, out: &mut OStream<'_>) -> Result<()> {
        self.iter().try_for_each(|item| item.write(out))
    }

    fn read(input: &mut IStream<'_>) -> Result<Self> {
        let items = (0..N).map(|_| T::read(input)).collect::<Result<Vec<T>>>()?;
        items
            .try_into()
            .map_err(|_| WireError::invalid_data("array length mismatch"))
    }

    fn serialized_length(&self) -> u32 {
        self.iter().map(WireFormat::serialized_length).sum()
    }
}
