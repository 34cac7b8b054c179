//! Hex rendering and parsing of byte sequences

use std::fmt::Write;

use crate::error::{Result, WireError};

/// Render bytes as `0x7b, 0x14, ` (lowercase, trailing separator kept)
///
/// Example: [0x7b, 0x14, 0x16, 0xc0] -> "0x7b, 0x14, 0x16, 0xc0, "
pub fn format_bytes(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(bytes.len() * 6);
    for byte in bytes {
        // Writing to String buffer is infallible
        let _ = write!(&mut result, "0x{:02x}, ", byte);
    }
    result
}

/// Render bytes as a frame dump: `57 54 53 54 ` (trailing space kept)
pub fn format_bytes_spaced(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(bytes.len() * 3);
    for byte in bytes {
        let _ = write!(&mut result, "{:02x} ", byte);
    }
    result
}

/// Parse a loose hex dump back into bytes
///
/// Accepts whitespace- or comma-separated digit pairs, optional `0x`
/// prefixes, or one contiguous digit string:
/// `"0x7b, 0x14"`, `"7b 14"` and `"7b14"` all yield `[0x7b, 0x14]`.
pub fn parse_hex_bytes(input: &str) -> Result<Vec<u8>> {
    let mut digits = Vec::with_capacity(input.len());

    for token in input.split(|c: char| c.is_whitespace() || c == ',') {
        let token = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        if token.len() % 2 != 0 {
            return Err(WireError::invalid_data(format!(
                "odd number of hex digits in '{}'",
                token
            )));
        }
        for c in token.chars() {
            let nibble = c.to_digit(16).ok_or_else(|| {
                WireError::invalid_data(format!("invalid hex character '{}'", c))
            })?;
            digits.push(nibble as u8);
        }
    }

    Ok(digits
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}
