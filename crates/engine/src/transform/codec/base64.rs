//! Base64 codec using the standard alphabet with `=` padding.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use common::{ErrorKind, TransformError};

/// Encode text as standard-alphabet Base64.
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode standard-alphabet Base64 back to text.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidEncoding`] if the input length is not a
/// multiple of four, contains characters outside the alphabet/padding, or the
/// decoded bytes are not valid UTF-8.
pub fn decode(text: &str) -> Result<String, TransformError> {
    let bytes = STANDARD.decode(text).map_err(|e| {
        TransformError::new(
            ErrorKind::InvalidEncoding,
            format!("base64 decoding failed: {e}"),
        )
    })?;
    String::from_utf8(bytes).map_err(|_| {
        TransformError::new(
            ErrorKind::InvalidEncoding,
            "base64 decoding failed: decoded bytes are not valid UTF-8",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_vector() {
        assert_eq!(encode("Hello"), "SGVsbG8=");
    }

    #[test]
    fn round_trip() {
        let text = "The quick brown fox — naïve résumé ☃";
        assert_eq!(decode(&encode(text)).unwrap(), text);
    }

    #[test]
    fn rejects_bad_length() {
        let e = decode("SGVsbG8").unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidEncoding);
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        let e = decode("SGV$bG8=").unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidEncoding);
    }

    #[test]
    fn rejects_non_utf8_payload() {
        // 0xFF 0xFE is not valid UTF-8.
        let input = STANDARD.encode([0xFF, 0xFE]);
        let e = decode(&input).unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidEncoding);
        assert!(e.message.contains("UTF-8"));
    }
}
