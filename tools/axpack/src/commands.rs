//! Subcommand implementations
//!
//! Every command writes to a caller-supplied writer so output can be
//! asserted byte for byte.

use std::io::Write;

use anyhow::{bail, Context, Result};
use ax_wire::bytes::{bytes_to_f32, format_bytes_spaced, parse_hex_bytes, u32_to_bytes};
use ax_wire::crc::crc16;
use ax_wire::messages::{
    CustomMsgArray, DeviceState, Odom, TcpRobotControl, TcpRobotState, WheelState,
};
use ax_wire::{
    decode_le_f32, encode_le_u32, format_bytes, ByteOrder, FrameParser, Message, RawFrame,
    WheelControlTwist, WireError,
};
use colored::*;
use serde::Serialize;
use tracing::{debug, warn};

/// Fixed input of the demo run
pub const DEMO_VALUE: u32 = 0xC016147B;

/// Print the demo value's little-endian bytes and their binary32 reading
///
/// ```text
/// 0x7b, 0x14, 0x16, 0xc0,
/// -2.345
/// ```
pub fn demo(out: &mut impl Write) -> Result<()> {
    let packed = encode_le_u32(DEMO_VALUE);
    writeln!(out, "{}", format_bytes(&packed))?;

    let value = decode_le_f32(&packed)?;
    writeln!(out, "{}", value)?;
    Ok(())
}

/// Parse a decimal or `0x` hex integer, keeping the sign so range errors
/// can be reported against the input as given
///
/// One leading `-` is allowed; digits may be grouped with `_`.
pub fn parse_integer(input: &str) -> Result<i128> {
    let trimmed = input.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };

    let digits = digits.replace('_', "");
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        bail!("invalid integer '{}'", input);
    }

    let magnitude = i128::from_str_radix(&digits, radix)
        .with_context(|| format!("integer '{}' is too large", input))?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Reinterpret an integer's bytes as binary32
pub fn reinterpret(out: &mut impl Write, value: &str, order: ByteOrder) -> Result<()> {
    let wide = parse_integer(value)?;
    let raw = u32::try_from(wide).map_err(|_| WireError::range(wide, "u32"))?;

    let bytes = u32_to_bytes(raw, order);
    let float = bytes_to_f32(&bytes, order);
    debug!("Reinterpreted 0x{:08X} as {} ({})", raw, float, order);

    writeln!(out, "{} {}", "order:".bright_cyan(), order)?;
    writeln!(out, "{} {}", "bytes:".bright_cyan(), format_bytes(&bytes))?;
    writeln!(out, "{} {}", "f32:".bright_cyan(), float)?;
    Ok(())
}

/// Reinterpret exactly 4 bytes as binary32
pub fn decode_float(out: &mut impl Write, hex: &str, order: ByteOrder) -> Result<()> {
    let bytes = parse_hex_bytes(hex)?;
    let array: [u8; 4] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| WireError::length(4, bytes.len()))?;

    let float = bytes_to_f32(&array, order);
    writeln!(out, "{} 0x{:08X}", "bits:".bright_cyan(), float.to_bits())?;
    writeln!(out, "{} {}", "f32:".bright_cyan(), float)?;
    Ok(())
}

pub fn crc(out: &mut impl Write, hex: &str) -> Result<()> {
    let bytes = parse_hex_bytes(hex)?;
    writeln!(out, "0x{:04X}", crc16(&bytes))?;
    Ok(())
}

/// Print the wheel twist command frame
pub fn twist(out: &mut impl Write, vx: i16, vy: i16, w: i16) -> Result<()> {
    let frame = WheelControlTwist::new(vx, vy, w)
        .with_context(|| format!("cannot build twist command ({}, {}, {})", vx, vy, w))?;
    writeln!(out, "{}", format_bytes_spaced(&frame.to_bytes()))?;
    Ok(())
}

/// Split a hex dump into frames and print what each one carries
pub fn decode(out: &mut impl Write, hex: &str, max_payload: usize) -> Result<()> {
    let bytes = parse_hex_bytes(hex)?;
    let mut parser = FrameParser::with_max_payload(max_payload);
    parser.feed(&bytes);

    let mut count = 0usize;
    loop {
        match parser.next_frame() {
            Ok(Some(frame)) => {
                count += 1;
                let (name, body) = describe(&frame)?;
                writeln!(
                    out,
                    "{} {} [{:02x} {:02x}] {} bytes: {}",
                    format!("#{}", count).bright_yellow(),
                    name.bright_green(),
                    frame.magic[0],
                    frame.magic[1],
                    frame.payload.len(),
                    body
                )?;
            },
            Ok(None) => break,
            Err(e) if e.is_frame_corruption() => {
                count += 1;
                writeln!(out, "{} {}", format!("#{}", count).bright_yellow(), e.to_string().red())?;
            },
            Err(e) => return Err(e).context("frame stream is unrecoverable"),
        }
    }

    if parser.buffered() > 0 {
        warn!("{} trailing bytes do not form a complete frame", parser.buffered());
        writeln!(
            out,
            "{} {} bytes",
            "incomplete:".yellow(),
            parser.buffered()
        )?;
    }
    Ok(())
}

fn describe(frame: &RawFrame) -> Result<(&'static str, String)> {
    match frame.magic {
        m if m == Odom::MAGIC => to_json::<Odom>(frame),
        m if m == CustomMsgArray::MAGIC => to_json::<CustomMsgArray>(frame),
        m if m == DeviceState::MAGIC => to_json::<DeviceState>(frame),
        // WheelEnable shares this magic and layout
        m if m == TcpRobotControl::MAGIC => to_json::<TcpRobotControl>(frame),
        m if m == TcpRobotState::MAGIC => to_json::<TcpRobotState>(frame),
        m if m == WheelState::MAGIC => to_json::<WheelState>(frame),
        _ => Ok(("unknown", format_bytes_spaced(&frame.payload))),
    }
}

fn to_json<M: Message + Serialize>(frame: &RawFrame) -> Result<(&'static str, String)> {
    let msg = frame
        .decode::<M>()
        .with_context(|| format!("malformed {} payload", M::NAME))?;
    Ok((M::NAME, serde_json::to_string(&msg)?))
}
