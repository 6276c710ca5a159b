//! Binary-digit codec: each byte as 8 ASCII `0`/`1` characters,
//! space-separated per byte.

use common::{ErrorKind, TransformError};

/// Encode text as space-separated 8-bit binary groups.
pub fn encode(text: &str) -> String {
    text.as_bytes()
        .iter()
        .map(|byte| format!("{byte:08b}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode space-separated 8-bit binary groups back to text.
///
/// Groups may be separated by any ASCII whitespace. Every group must be
/// exactly 8 binary digits.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidEncoding`] if any group is not exactly 8
/// binary digits, or the decoded bytes are not valid UTF-8.
pub fn decode(text: &str) -> Result<String, TransformError> {
    let mut bytes = Vec::new();
    for group in text.split_whitespace() {
        if group.len() != 8 || !group.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(TransformError::new(
                ErrorKind::InvalidEncoding,
                format!("binary decoding failed: '{group}' is not an 8-digit binary group"),
            ));
        }
        let byte = group.bytes().fold(0u8, |acc, b| (acc << 1) | (b - b'0'));
        bytes.push(byte);
    }
    String::from_utf8(bytes).map_err(|_| {
        TransformError::new(
            ErrorKind::InvalidEncoding,
            "binary decoding failed: decoded bytes are not valid UTF-8",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_vector() {
        assert_eq!(encode("A"), "01000001");
    }

    #[test]
    fn encodes_bytes_space_separated() {
        assert_eq!(encode("AB"), "01000001 01000010");
    }

    #[test]
    fn round_trip() {
        let text = "binary répresentation ☃";
        assert_eq!(decode(&encode(text)).unwrap(), text);
    }

    #[test]
    fn decode_tolerates_extra_whitespace() {
        assert_eq!(decode("  01000001\n01000010\t").unwrap(), "AB");
    }

    #[test]
    fn rejects_short_group() {
        let e = decode("0100001").unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidEncoding);
    }

    #[test]
    fn rejects_non_binary_digits() {
        let e = decode("0100000#").unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidEncoding);
    }

    #[test]
    fn rejects_signed_group() {
        // A leading sign would slip through a plain integer parse.
        let e = decode("+1000001").unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidEncoding);
    }

    #[test]
    fn rejects_non_utf8_payload() {
        let e = decode("11111111 11111110").unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidEncoding);
    }
}
