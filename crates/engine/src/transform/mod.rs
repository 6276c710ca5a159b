//! The Transform Engine: ciphers, codecs, capability registry, and dispatcher.
//!
//! # Responsibilities
//! - Validate requested algorithm/encoding identifiers and keys.
//! - Perform the forward or inverse transform as a pure function of the inputs.
//! - Normalise success and failure into the shared outcome types.
//!
//! # Module invariants
//!
//! - **Stateless.** Nothing survives a call; the AES key minted in `encrypt`
//!   is returned to the caller and forgotten.
//! - **No HTTP dependencies.** This module must not import from `crate::server`.

pub mod cipher;
pub mod codec;
pub mod dispatch;
pub mod registry;
