//! Hexadecimal codec: two lowercase digits per byte.

use common::{ErrorKind, TransformError};

/// Encode text as lowercase hexadecimal.
pub fn encode(text: &str) -> String {
    hex::encode(text.as_bytes())
}

/// Decode hexadecimal text (either case) back to text.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidEncoding`] on odd input length, non-hex
/// characters, or decoded bytes that are not valid UTF-8.
pub fn decode(text: &str) -> Result<String, TransformError> {
    let bytes = hex::decode(text).map_err(|e| {
        TransformError::new(
            ErrorKind::InvalidEncoding,
            format!("hex decoding failed: {e}"),
        )
    })?;
    String::from_utf8(bytes).map_err(|_| {
        TransformError::new(
            ErrorKind::InvalidEncoding,
            "hex decoding failed: decoded bytes are not valid UTF-8",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_vector() {
        assert_eq!(encode("Hello"), "48656c6c6f");
    }

    #[test]
    fn decode_accepts_either_case() {
        assert_eq!(decode("48656C6C6F").unwrap(), "Hello");
        assert_eq!(decode("48656c6c6f").unwrap(), "Hello");
    }

    #[test]
    fn round_trip() {
        let text = "multibyte: ü ☃ 漢";
        assert_eq!(decode(&encode(text)).unwrap(), text);
    }

    #[test]
    fn rejects_odd_length() {
        let e = decode("48656").unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidEncoding);
    }

    #[test]
    fn rejects_non_hex_characters() {
        let e = decode("48zz").unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidEncoding);
    }

    #[test]
    fn rejects_non_utf8_payload() {
        let e = decode("fffe").unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidEncoding);
    }
}
