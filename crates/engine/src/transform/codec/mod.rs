//! Codec Set: keyless, reversible representation changes.
//!
//! Each codec exposes an infallible `encode(&str) -> String` and a strict
//! `decode(&str) -> Result<String, TransformError>`. All codecs operate on
//! the UTF-8 byte representation of the input, and for every codec
//! `decode(encode(x)) == x`.

pub mod base64;
pub mod binary;
pub mod hex;
pub mod url;
