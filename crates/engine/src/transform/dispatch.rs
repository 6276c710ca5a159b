//! Transform Dispatcher: resolves identifiers, validates inputs, and invokes
//! the matching cipher or codec.
//!
//! Every operation either fully succeeds or fully fails; the dispatcher never
//! retries, auto-corrects input, or changes the [`ErrorKind`] a cipher or
//! codec reports — it only adds context on its own checks.

use common::{ErrorKind, TransformError};

use super::cipher::{aes, caesar, substitution};
use super::codec::{base64, binary, hex, url};
use super::registry::{self, Algorithm, AlgorithmDescriptor, Encoding, EncodingDescriptor};

/// Successful cipher outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    /// Transformed text.
    pub text: String,
    /// Key material minted during encryption, when the algorithm invents its
    /// own key (AES). The caller owns it; the engine keeps no copy.
    pub key: Option<String>,
}

impl Transformed {
    fn plain(text: String) -> Self {
        Self { text, key: None }
    }
}

fn ensure_non_empty(text: &str) -> Result<(), TransformError> {
    if text.trim().is_empty() {
        return Err(TransformError::new(ErrorKind::EmptyInput, "no text provided"));
    }
    Ok(())
}

/// Normalise the wire key: absent or blank both count as "no key".
fn present_key(key: Option<&str>) -> Option<&str> {
    key.map(str::trim).filter(|k| !k.is_empty())
}

fn resolve_algorithm(id: &str) -> Result<&'static AlgorithmDescriptor, TransformError> {
    registry::find_algorithm(id).ok_or_else(|| {
        TransformError::new(ErrorKind::UnknownAlgorithm, format!("unknown algorithm: {id}"))
    })
}

fn resolve_encoding(id: &str) -> Result<&'static EncodingDescriptor, TransformError> {
    registry::find_encoding(id).ok_or_else(|| {
        TransformError::new(
            ErrorKind::UnknownAlgorithm,
            format!("unknown encoding type: {id}"),
        )
    })
}

/// Enforce the descriptor's key requirement before invoking its cipher.
fn demand_key<'a>(
    descriptor: &AlgorithmDescriptor,
    key: Option<&'a str>,
) -> Result<&'a str, TransformError> {
    key.ok_or_else(|| {
        TransformError::new(
            ErrorKind::MissingKey,
            format!(
                "algorithm '{}' requires a key: {}",
                descriptor.id, descriptor.key_hint
            ),
        )
    })
}

/// Encrypt `text` with the algorithm named by `algorithm_id`.
///
/// # Errors
///
/// [`ErrorKind::EmptyInput`] for blank text, [`ErrorKind::UnknownAlgorithm`]
/// for an unresolvable id, [`ErrorKind::MissingKey`] when a required key is
/// absent, and whatever the selected cipher reports, unchanged.
pub fn encrypt(
    text: &str,
    algorithm_id: &str,
    key: Option<&str>,
) -> Result<Transformed, TransformError> {
    ensure_non_empty(text)?;
    let descriptor = resolve_algorithm(algorithm_id)?;
    let key = present_key(key);

    match descriptor.algorithm {
        Algorithm::Caesar => caesar::encrypt(text, demand_key(descriptor, key)?).map(Transformed::plain),
        Algorithm::Substitution => {
            substitution::encrypt(text, demand_key(descriptor, key)?).map(Transformed::plain)
        }
        Algorithm::Aes => aes::encrypt(text).map(|sealed| Transformed {
            text: sealed.token,
            key: Some(sealed.key),
        }),
    }
}

/// Decrypt `text` with the algorithm named by `algorithm_id`.
///
/// # Errors
///
/// Same taxonomy as [`encrypt`]. An absent key on an AES decrypt is an
/// [`ErrorKind::InvalidKey`] surfaced by the cipher: the descriptor says AES
/// needs no key, which is only true for encryption.
pub fn decrypt(
    text: &str,
    algorithm_id: &str,
    key: Option<&str>,
) -> Result<Transformed, TransformError> {
    ensure_non_empty(text)?;
    let descriptor = resolve_algorithm(algorithm_id)?;
    let key = present_key(key);

    match descriptor.algorithm {
        Algorithm::Caesar => caesar::decrypt(text, demand_key(descriptor, key)?).map(Transformed::plain),
        Algorithm::Substitution => {
            substitution::decrypt(text, demand_key(descriptor, key)?).map(Transformed::plain)
        }
        Algorithm::Aes => aes::decrypt(text, key).map(Transformed::plain),
    }
}

/// Encode `text` with the encoding named by `encoding_id`.
///
/// # Errors
///
/// [`ErrorKind::EmptyInput`] for blank text, [`ErrorKind::UnknownAlgorithm`]
/// for an unresolvable id. Encoding itself cannot fail.
pub fn encode(text: &str, encoding_id: &str) -> Result<String, TransformError> {
    ensure_non_empty(text)?;
    let descriptor = resolve_encoding(encoding_id)?;
    Ok(match descriptor.encoding {
        Encoding::Base64 => base64::encode(text),
        Encoding::Hex => hex::encode(text),
        Encoding::Url => url::encode(text),
        Encoding::Binary => binary::encode(text),
    })
}

/// Decode `text` with the encoding named by `encoding_id`.
///
/// # Errors
///
/// [`ErrorKind::EmptyInput`] for blank text, [`ErrorKind::UnknownAlgorithm`]
/// for an unresolvable id, and [`ErrorKind::InvalidEncoding`] from the codec,
/// unchanged.
pub fn decode(text: &str, encoding_id: &str) -> Result<String, TransformError> {
    ensure_non_empty(text)?;
    let descriptor = resolve_encoding(encoding_id)?;
    match descriptor.encoding {
        Encoding::Base64 => base64::decode(text),
        Encoding::Hex => hex::decode(text),
        Encoding::Url => url::decode(text),
        Encoding::Binary => binary::decode(text),
    }
}
