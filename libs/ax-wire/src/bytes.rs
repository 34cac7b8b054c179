//! Binary data processing utilities
//!
//! Byte order handling, bit-cast reinterpretation between `u32` and IEEE-754
//! binary32, and hex rendering of byte sequences.
//!
//! # Design Principles
//!
//! - **Explicit byte order**: nothing depends on host endianness
//! - **Bit-cast only**: floats are never produced by numeric conversion
//! - **Fixed width**: wrong-width input is a `WireError::Length`, never a panic

pub mod byte_order;
pub mod conversions;
pub mod format;

pub use byte_order::ByteOrder;
pub use conversions::*;
pub use format::*;
