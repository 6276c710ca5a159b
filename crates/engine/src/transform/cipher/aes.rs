//! AES-128-GCM-SIV encryption with a fresh key minted per call.
//!
//! The service holds no key material: `encrypt` generates a random 128-bit
//! key, uses it once, and hands it back to the caller alongside the
//! ciphertext. Decryption only succeeds when the caller replays that exact
//! key.
//!
//! # Ciphertext format
//!
//! ```text
//! v1.<base64url-no-pad(nonce)>.<base64url-no-pad(ciphertext+tag)>
//! ```
//!
//! The `v1` prefix enables future algorithm migration without breaking
//! existing ciphertext. The key travels as a separate base64url string.

use aes_gcm_siv::{
    aead::{rand_core::RngCore, Aead, KeyInit, OsRng},
    Aes128GcmSiv, Nonce,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use common::{ErrorKind, TransformError};

/// Byte length of an AES-128 key.
pub const KEY_LEN: usize = 16;

/// Byte length of an AES-GCM-SIV nonce (96 bits).
pub const NONCE_LEN: usize = 12;

/// Prefix that appears at the start of every ciphertext token.
pub const VERSION_PREFIX: &str = "v1";

/// Ciphertext token plus the key minted for it, both wire-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedText {
    /// `v1.<nonce>.<ciphertext>` token.
    pub token: String,
    /// Base64url-encoded key the caller needs to decrypt the token.
    pub key: String,
}

/// One message for every decrypt failure mode, so the response leaks nothing
/// about which check rejected the input.
fn decrypt_failed() -> TransformError {
    TransformError::new(
        ErrorKind::InvalidKey,
        "aes decryption failed: invalid key or malformed ciphertext",
    )
}

/// Encrypt text under a freshly generated random key.
///
/// # Errors
///
/// Returns [`ErrorKind::EntropyFailure`] if the OS random source cannot
/// produce key or nonce material.
pub fn encrypt(text: &str) -> Result<SealedText, TransformError> {
    let mut key_bytes = [0u8; KEY_LEN];
    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.try_fill_bytes(&mut key_bytes).map_err(|e| {
        TransformError::new(
            ErrorKind::EntropyFailure,
            format!("os random source failed: {e}"),
        )
    })?;
    OsRng.try_fill_bytes(&mut nonce_bytes).map_err(|e| {
        TransformError::new(
            ErrorKind::EntropyFailure,
            format!("os random source failed: {e}"),
        )
    })?;

    let cipher = Aes128GcmSiv::new_from_slice(&key_bytes)
        .map_err(|_| TransformError::new(ErrorKind::Internal, "aes cipher construction failed"))?;
    let nonce = Nonce::from_slice(&nonce_bytes);
    let ciphertext = cipher
        .encrypt(nonce, text.as_bytes())
        .map_err(|_| TransformError::new(ErrorKind::Internal, "aes encryption failed"))?;

    Ok(SealedText {
        token: format!(
            "{}.{}.{}",
            VERSION_PREFIX,
            URL_SAFE_NO_PAD.encode(nonce_bytes),
            URL_SAFE_NO_PAD.encode(&ciphertext),
        ),
        key: URL_SAFE_NO_PAD.encode(key_bytes),
    })
}

/// Decrypt a `v1.<nonce>.<ciphertext>` token with the caller-supplied key.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidKey`] — uniformly, regardless of which check
/// failed — when the key is absent, not valid base64url, the wrong length,
/// when the token is malformed, or when authentication fails (wrong key or
/// tampered ciphertext).
pub fn decrypt(text: &str, key: Option<&str>) -> Result<String, TransformError> {
    let key = key.ok_or_else(|| {
        TransformError::new(
            ErrorKind::InvalidKey,
            "aes decryption requires the key returned by the encrypt call",
        )
    })?;

    let key_bytes = URL_SAFE_NO_PAD.decode(key).map_err(|_| decrypt_failed())?;
    if key_bytes.len() != KEY_LEN {
        return Err(decrypt_failed());
    }
    let cipher = Aes128GcmSiv::new_from_slice(&key_bytes).map_err(|_| decrypt_failed())?;

    let (nonce_bytes, ciphertext) = parse_token(text)?;
    let plaintext = cipher
        .decrypt(Nonce::from_slice(&nonce_bytes), ciphertext.as_ref())
        .map_err(|_| decrypt_failed())?;

    String::from_utf8(plaintext).map_err(|_| decrypt_failed())
}

/// Split a `v1.<nonce>.<ciphertext>` token into its raw parts.
fn parse_token(token: &str) -> Result<([u8; NONCE_LEN], Vec<u8>), TransformError> {
    let parts: Vec<&str> = token.splitn(3, '.').collect();
    if parts.len() != 3 || parts[0] != VERSION_PREFIX {
        return Err(decrypt_failed());
    }

    let nonce_vec = URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|_| decrypt_failed())?;
    if nonce_vec.len() != NONCE_LEN {
        return Err(decrypt_failed());
    }
    let mut nonce = [0u8; NONCE_LEN];
    nonce.copy_from_slice(&nonce_vec);

    let ciphertext = URL_SAFE_NO_PAD
        .decode(parts[2])
        .map_err(|_| decrypt_failed())?;

    Ok((nonce, ciphertext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_decrypt_round_trip() {
        let sealed = encrypt("attack at dawn").unwrap();
        assert!(sealed.token.starts_with("v1."));
        let plaintext = decrypt(&sealed.token, Some(&sealed.key)).unwrap();
        assert_eq!(plaintext, "attack at dawn");
    }

    #[test]
    fn round_trip_preserves_unicode() {
        let text = "crème brûlée ☃";
        let sealed = encrypt(text).unwrap();
        assert_eq!(decrypt(&sealed.token, Some(&sealed.key)).unwrap(), text);
    }

    #[test]
    fn each_call_mints_a_fresh_key() {
        let a = encrypt("same input").unwrap();
        let b = encrypt("same input").unwrap();
        assert_ne!(a.key, b.key);
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn key_is_sixteen_bytes_on_the_wire() {
        let sealed = encrypt("x").unwrap();
        let raw = URL_SAFE_NO_PAD.decode(&sealed.key).unwrap();
        assert_eq!(raw.len(), KEY_LEN);
    }

    #[test]
    fn wrong_key_fails_decryption() {
        let sealed = encrypt("secret").unwrap();
        let other = encrypt("other").unwrap();
        let e = decrypt(&sealed.token, Some(&other.key)).unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidKey);
    }

    #[test]
    fn absent_key_is_invalid_key() {
        let sealed = encrypt("secret").unwrap();
        let e = decrypt(&sealed.token, None).unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidKey);
    }

    #[test]
    fn malformed_key_is_invalid_key() {
        let sealed = encrypt("secret").unwrap();
        for key in ["!!!", "dG9vc2hvcnQ", ""] {
            let e = decrypt(&sealed.token, Some(key)).unwrap_err();
            assert_eq!(e.kind, ErrorKind::InvalidKey, "key: {key:?}");
        }
    }

    #[test]
    fn tampered_ciphertext_fails_auth() {
        let sealed = encrypt("tamper me").unwrap();
        // Flip the final ciphertext character.
        let mut token = sealed.token.clone();
        let last = if token.ends_with('A') { 'B' } else { 'A' };
        token.pop();
        token.push(last);
        let e = decrypt(&token, Some(&sealed.key)).unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidKey);
    }

    #[test]
    fn rejects_bad_token_shape() {
        let sealed = encrypt("x").unwrap();
        for token in ["v2.abc.def", "v1.abc", "v1.!!!.abc", "not a token"] {
            let e = decrypt(token, Some(&sealed.key)).unwrap_err();
            assert_eq!(e.kind, ErrorKind::InvalidKey, "token: {token:?}");
        }
    }

    #[test]
    fn decrypt_failures_share_one_message() {
        let sealed = encrypt("secret").unwrap();
        let wrong_key = decrypt(&sealed.token, Some("AAAAAAAAAAAAAAAAAAAAAA")).unwrap_err();
        let bad_token = decrypt("v1.garbage.garbage", Some(&sealed.key)).unwrap_err();
        assert_eq!(wrong_key.message, bad_token.message);
    }
}
