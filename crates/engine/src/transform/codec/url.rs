//! URL percent-encoding codec.
//!
//! Unreserved characters (RFC 3986: ASCII alphanumerics and `-_.~`) pass
//! through; every other byte becomes `%` followed by two uppercase hex
//! digits. Decoding is strict: a `%` must be followed by exactly two hex
//! digits.

use common::{ErrorKind, TransformError};

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Percent-encode text for use in URLs.
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for &byte in text.as_bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push(HEX_UPPER[(byte >> 4) as usize] as char);
            out.push(HEX_UPPER[(byte & 0x0F) as usize] as char);
        }
    }
    out
}

/// Reverse percent-encoding.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidEncoding`] on a trailing incomplete `%`
/// escape, non-hex digits after `%`, or decoded bytes that are not valid
/// UTF-8.
pub fn decode(text: &str) -> Result<String, TransformError> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len() {
                return Err(TransformError::new(
                    ErrorKind::InvalidEncoding,
                    "url decoding failed: incomplete percent escape",
                ));
            }
            let hi = hex_value(bytes[i + 1]);
            let lo = hex_value(bytes[i + 2]);
            match (hi, lo) {
                (Some(hi), Some(lo)) => out.push((hi << 4) | lo),
                _ => {
                    return Err(TransformError::new(
                        ErrorKind::InvalidEncoding,
                        "url decoding failed: percent escape is not two hex digits",
                    ))
                }
            }
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).map_err(|_| {
        TransformError::new(
            ErrorKind::InvalidEncoding,
            "url decoding failed: decoded bytes are not valid UTF-8",
        )
    })
}
