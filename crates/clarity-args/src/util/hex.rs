//! Hex string helpers.
//!
//! Canonical output is lowercase without a prefix; input accepts an
//! optional `0x`/`0X` prefix. Malformed input is always rejected —
//! odd-length strings in particular are an error, never truncated.

use std::fmt::Write;

use crate::error::HexError;

/// Formats bytes as lowercase hex (no `0x` prefix).
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        // infallible for String
        let _ = write!(s, "{:02x}", byte);
    }
    s
}

/// Parses a hex string into bytes, stripping an optional `0x` prefix.
pub fn hex_to_bytes(s: &str) -> Result<Vec<u8>, HexError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength { len: digits.len() });
    }

    let bytes = digits.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() / 2);
    for (i, pair) in bytes.chunks_exact(2).enumerate() {
        let hi = digit_value(pair[0]).ok_or(HexError::InvalidDigit {
            byte: pair[0],
            offset: i * 2,
        })?;
        let lo = digit_value(pair[1]).ok_or(HexError::InvalidDigit {
            byte: pair[1],
            offset: i * 2 + 1,
        })?;
        out.push((hi << 4) | lo);
    }
    Ok(out)
}

fn digit_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
