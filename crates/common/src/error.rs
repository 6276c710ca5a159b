//! Common error types shared across crates.

use thiserror::Error;

/// Machine-checkable category of a transform failure.
///
/// Every kind except [`ErrorKind::EntropyFailure`] and [`ErrorKind::Internal`]
/// is an input-validation error: deterministic, caller-correctable, and mapped
/// to HTTP 400. `EntropyFailure` means the OS CSPRNG could not produce key
/// material; `Internal` covers unexpected crypto-layer faults. Both are
/// non-retryable service errors, mapped to HTTP 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input text was empty or contained only whitespace.
    EmptyInput,
    /// The algorithm or encoding identifier matched no known descriptor.
    UnknownAlgorithm,
    /// The selected algorithm requires a key and none was supplied.
    MissingKey,
    /// The supplied key was malformed, or decryption with it failed.
    InvalidKey,
    /// The input could not be decoded as the claimed encoding.
    InvalidEncoding,
    /// The OS random source failed while generating key material.
    EntropyFailure,
    /// An internal cryptographic operation failed unexpectedly.
    Internal,
}

impl ErrorKind {
    /// Stable machine-readable code carried on the wire (e.g. `"invalid_key"`).
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "empty_input",
            ErrorKind::UnknownAlgorithm => "unknown_algorithm",
            ErrorKind::MissingKey => "missing_key",
            ErrorKind::InvalidKey => "invalid_key",
            ErrorKind::InvalidEncoding => "invalid_encoding",
            ErrorKind::EntropyFailure => "entropy_failure",
            ErrorKind::Internal => "internal_error",
        }
    }

    /// Returns the HTTP status code that should be sent for this kind.
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorKind::EntropyFailure | ErrorKind::Internal => 500,
            _ => 400,
        }
    }
}

/// Failure outcome shared by every cipher, codec, and dispatcher operation.
///
/// The `kind` stays machine-checkable end-to-end; the `message` is
/// human-facing only and safe to expose to callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct TransformError {
    /// Category of the failure.
    pub kind: ErrorKind,
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl TransformError {
    /// Construct a [`TransformError`] from a kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        self.kind.http_status()
    }
}
