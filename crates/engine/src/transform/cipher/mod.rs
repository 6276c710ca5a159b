//! Cipher Set: keyed, reversible text transforms.
//!
//! Caesar and substitution validate a caller-supplied key; AES mints its own
//! key per encryption call and returns it with the ciphertext. Each cipher
//! surfaces the precise [`common::ErrorKind`] for its failure modes.

pub mod aes;
pub mod caesar;
pub mod substitution;
