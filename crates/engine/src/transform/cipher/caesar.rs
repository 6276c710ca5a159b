//! Caesar shift cipher over the ASCII alphabets.

use common::{ErrorKind, TransformError};

/// Parse the wire key as an integer shift, normalised into `0..26`.
///
/// Any integer is accepted, including negatives and values outside ±25.
fn parse_shift(key: &str) -> Result<u8, TransformError> {
    let shift: i64 = key.trim().parse().map_err(|_| {
        TransformError::new(
            ErrorKind::InvalidKey,
            "invalid shift value for caesar cipher: expected an integer",
        )
    })?;
    Ok(shift.rem_euclid(26) as u8)
}

/// Shift one character within its case's alphabet; pass everything else through.
fn shift_char(c: char, shift: u8) -> char {
    let base = if c.is_ascii_lowercase() {
        b'a'
    } else if c.is_ascii_uppercase() {
        b'A'
    } else {
        return c;
    };
    let rotated = (c as u8 - base + shift) % 26;
    (base + rotated) as char
}

/// Encrypt by shifting alphabetic characters forward.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidKey`] if the key does not parse as an integer.
pub fn encrypt(text: &str, key: &str) -> Result<String, TransformError> {
    let shift = parse_shift(key)?;
    Ok(text.chars().map(|c| shift_char(c, shift)).collect())
}

/// Decrypt by applying the negated shift.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidKey`] if the key does not parse as an integer.
pub fn decrypt(text: &str, key: &str) -> Result<String, TransformError> {
    let shift = parse_shift(key)?;
    let inverse = (26 - shift) % 26;
    Ok(text.chars().map(|c| shift_char(c, inverse)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypts_known_vector() {
        assert_eq!(encrypt("ABC", "3").unwrap(), "DEF");
    }

    #[test]
    fn decrypts_known_vector() {
        assert_eq!(decrypt("DEF", "3").unwrap(), "ABC");
    }

    #[test]
    fn wraps_around_alphabet_end() {
        assert_eq!(encrypt("xyz", "3").unwrap(), "abc");
        assert_eq!(encrypt("XYZ", "3").unwrap(), "ABC");
    }

    #[test]
    fn negative_shift_is_accepted() {
        assert_eq!(encrypt("DEF", "-3").unwrap(), "ABC");
    }

    #[test]
    fn large_shift_is_normalised() {
        // 29 ≡ 3 (mod 26)
        assert_eq!(encrypt("ABC", "29").unwrap(), "DEF");
        assert_eq!(encrypt("ABC", "-49").unwrap(), encrypt("ABC", "3").unwrap());
    }

    #[test]
    fn non_letters_pass_through() {
        assert_eq!(
            encrypt("attack at dawn: 06:00!", "5").unwrap(),
            "fyyfhp fy ifbs: 06:00!"
        );
    }

    #[test]
    fn round_trip_across_shifts() {
        let text = "Mixed CASE with 123 & punctuation.";
        for key in ["0", "1", "13", "25", "26", "-7", "999"] {
            let ciphertext = encrypt(text, key).unwrap();
            assert_eq!(decrypt(&ciphertext, key).unwrap(), text, "key {key}");
        }
    }

    #[test]
    fn rejects_non_integer_key() {
        let e = encrypt("abc", "three").unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidKey);
    }
}
