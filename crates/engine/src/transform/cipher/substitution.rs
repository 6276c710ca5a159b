//! Alphabet substitution cipher keyed by a 52-character permutation.
//!
//! Key layout: positions 0–25 give the substitute for `a..z`, positions
//! 26–51 the substitute for `A..Z`. Each half must be a permutation of its
//! own alphabet — a duplicate would make decryption ambiguous, so it is
//! rejected rather than tolerated.

use common::{ErrorKind, TransformError};

const KEY_LEN: usize = 52;
const HALF: usize = 26;

/// Validated substitution tables, forward and inverse, for both cases.
struct Tables {
    enc_lower: [u8; HALF],
    enc_upper: [u8; HALF],
    dec_lower: [u8; HALF],
    dec_upper: [u8; HALF],
}

fn invalid_key(message: impl Into<String>) -> TransformError {
    TransformError::new(ErrorKind::InvalidKey, message)
}

/// Validate one 26-character half as a permutation of `base..base+26`.
fn parse_half(half: &[u8], base: u8) -> Result<([u8; HALF], [u8; HALF]), TransformError> {
    let mut forward = [0u8; HALF];
    let mut inverse = [0u8; HALF];
    let mut seen = [false; HALF];

    for (offset, &byte) in half.iter().enumerate() {
        let range = if base == b'a' { "a-z" } else { "A-Z" };
        if !(base..base + HALF as u8).contains(&byte) {
            return Err(invalid_key(format!(
                "substitution key half for {range} contains '{}'",
                byte as char
            )));
        }
        let slot = (byte - base) as usize;
        if seen[slot] {
            return Err(invalid_key(format!(
                "substitution key half for {range} repeats '{}'",
                byte as char
            )));
        }
        seen[slot] = true;
        forward[offset] = byte;
        inverse[slot] = base + offset as u8;
    }
    Ok((forward, inverse))
}

/// Parse and validate the full 52-character key.
fn parse_key(key: &str) -> Result<Tables, TransformError> {
    let bytes = key.as_bytes();
    if key.chars().count() != KEY_LEN || bytes.len() != KEY_LEN {
        return Err(invalid_key(
            "substitution key must be 52 characters (a-zA-Z)",
        ));
    }
    let (enc_lower, dec_lower) = parse_half(&bytes[..HALF], b'a')?;
    let (enc_upper, dec_upper) = parse_half(&bytes[HALF..], b'A')?;
    Ok(Tables {
        enc_lower,
        enc_upper,
        dec_lower,
        dec_upper,
    })
}

/// Substitute each letter through the given tables; pass non-letters through.
fn substitute(text: &str, lower: &[u8; HALF], upper: &[u8; HALF]) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                lower[(c as u8 - b'a') as usize] as char
            } else if c.is_ascii_uppercase() {
                upper[(c as u8 - b'A') as usize] as char
            } else {
                c
            }
        })
        .collect()
}

/// Encrypt by mapping each letter through the key's permutation.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidKey`] if the key is not 52 characters or
/// either half is not a permutation of its alphabet.
pub fn encrypt(text: &str, key: &str) -> Result<String, TransformError> {
    let tables = parse_key(key)?;
    Ok(substitute(text, &tables.enc_lower, &tables.enc_upper))
}

/// Decrypt by mapping each letter through the inverse permutation.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidKey`] if the key is not 52 characters or
/// either half is not a permutation of its alphabet.
pub fn decrypt(text: &str, key: &str) -> Result<String, TransformError> {
    let tables = parse_key(key)?;
    Ok(substitute(text, &tables.dec_lower, &tables.dec_upper))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Rot13 expressed as a substitution key.
    const ROT13: &str = "nopqrstuvwxyzabcdefghijklmNOPQRSTUVWXYZABCDEFGHIJKLM";
    // A scrambled (non-rotational) permutation.
    const SCRAMBLED: &str = "qwertyuiopasdfghjklzxcvbnmQWERTYUIOPASDFGHJKLZXCVBNM";

    #[test]
    fn encrypts_through_the_permutation() {
        assert_eq!(encrypt("abc", ROT13).unwrap(), "nop");
        assert_eq!(encrypt("ABC", ROT13).unwrap(), "NOP");
    }

    #[test]
    fn non_letters_pass_through() {
        assert_eq!(encrypt("a b, c! 7", ROT13).unwrap(), "n o, p! 7");
    }

    #[test]
    fn round_trip() {
        let text = "Attack At Dawn — 06:00 sharp!";
        for key in [ROT13, SCRAMBLED] {
            let ciphertext = encrypt(text, key).unwrap();
            assert_eq!(decrypt(&ciphertext, key).unwrap(), text);
        }
    }

    #[test]
    fn decrypt_uses_the_inverse_permutation() {
        assert_eq!(decrypt("qwe", SCRAMBLED).unwrap(), "abc");
    }

    #[test]
    fn rejects_wrong_length() {
        let e = encrypt("abc", "abc").unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidKey);
        assert!(e.message.contains("52"));
    }

    #[test]
    fn rejects_duplicate_in_lower_half() {
        // 'q' appears twice; 'w' is missing.
        let key = "qqertyuiopasdfghjklzxcvbnmQWERTYUIOPASDFGHJKLZXCVBNM";
        let e = encrypt("abc", key).unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidKey);
    }

    #[test]
    fn rejects_duplicate_in_upper_half() {
        let key = "qwertyuiopasdfghjklzxcvbnmQQERTYUIOPASDFGHJKLZXCVBNM";
        let e = encrypt("abc", key).unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidKey);
    }

    #[test]
    fn rejects_character_outside_alphabet_half() {
        // Uppercase letter in the lowercase half.
        let key = "QwertyuiopasdfghjklzxcvbnmQWERTYUIOPASDFGHJKLZXCVBNM";
        let e = encrypt("abc", key).unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidKey);
    }

    #[test]
    fn rejects_multibyte_key_of_right_char_count() {
        let key = "éwertyuiopasdfghjklzxcvbnmQWERTYUIOPASDFGHJKLZXCVBNM";
        let e = encrypt("abc", key).unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidKey);
    }
}
