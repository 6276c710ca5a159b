//! Capability Registry: static descriptor tables for the supported
//! algorithms and encodings.
//!
//! The tables are `const`, built once at compile time, and never mutated.
//! Listing endpoints render them in the order they appear here.

use common::protocol::{AlgorithmInfo, EncodingTypeInfo};

/// Closed set of supported cipher algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Caesar,
    Aes,
    Substitution,
}

/// Closed set of supported encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Base64,
    Hex,
    Url,
    Binary,
}

/// Static metadata describing one cipher algorithm.
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmDescriptor {
    /// Resolved engine variant.
    pub algorithm: Algorithm,
    /// Wire identifier.
    pub id: &'static str,
    /// Human-readable display name.
    pub display_name: &'static str,
    /// Whether the caller must supply a key.
    pub requires_key: bool,
    /// Hint describing the expected key format.
    pub key_hint: &'static str,
}

/// Static metadata describing one encoding.
#[derive(Debug, Clone, Copy)]
pub struct EncodingDescriptor {
    /// Resolved engine variant.
    pub encoding: Encoding,
    /// Wire identifier.
    pub id: &'static str,
    /// Human-readable display name.
    pub display_name: &'static str,
    /// Short description of the encoding.
    pub description: &'static str,
}

/// Supported algorithms, in display order.
pub const ALGORITHMS: &[AlgorithmDescriptor] = &[
    AlgorithmDescriptor {
        algorithm: Algorithm::Caesar,
        id: "caesar",
        display_name: "Caesar Cipher",
        requires_key: true,
        key_hint: "Shift amount (integer)",
    },
    AlgorithmDescriptor {
        algorithm: Algorithm::Aes,
        id: "aes",
        display_name: "AES Encryption",
        requires_key: false,
        key_hint: "Not required (uses secure key)",
    },
    AlgorithmDescriptor {
        algorithm: Algorithm::Substitution,
        id: "substitution",
        display_name: "Substitution Cipher",
        requires_key: true,
        key_hint: "52-character substitution key (a-zA-Z)",
    },
];

/// Supported encodings, in display order.
pub const ENCODINGS: &[EncodingDescriptor] = &[
    EncodingDescriptor {
        encoding: Encoding::Base64,
        id: "base64",
        display_name: "Base64",
        description: "Base64 encoding for binary data",
    },
    EncodingDescriptor {
        encoding: Encoding::Hex,
        id: "hex",
        display_name: "Hexadecimal",
        description: "Hexadecimal representation of bytes",
    },
    EncodingDescriptor {
        encoding: Encoding::Url,
        id: "url",
        display_name: "URL Encoding",
        description: "Percent-encoding for URLs",
    },
    EncodingDescriptor {
        encoding: Encoding::Binary,
        id: "binary",
        display_name: "Binary",
        description: "Binary representation (8-bit chunks)",
    },
];

/// Resolve an algorithm wire identifier to its descriptor.
pub fn find_algorithm(id: &str) -> Option<&'static AlgorithmDescriptor> {
    ALGORITHMS.iter().find(|descriptor| descriptor.id == id)
}

/// Resolve an encoding wire identifier to its descriptor.
pub fn find_encoding(id: &str) -> Option<&'static EncodingDescriptor> {
    ENCODINGS.iter().find(|descriptor| descriptor.id == id)
}

/// Render the algorithm table for the listing endpoint.
pub fn list_algorithms() -> Vec<AlgorithmInfo> {
    ALGORITHMS
        .iter()
        .map(|descriptor| AlgorithmInfo {
            value: descriptor.id.into(),
            name: descriptor.display_name.into(),
            requires_key: descriptor.requires_key,
            key_description: descriptor.key_hint.into(),
        })
        .collect()
}

/// Render the encoding table for the listing endpoint.
pub fn list_encodings() -> Vec<EncodingTypeInfo> {
    ENCODINGS
        .iter()
        .map(|descriptor| EncodingTypeInfo {
            value: descriptor.id.into(),
            name: descriptor.display_name.into(),
            description: descriptor.description.into(),
        })
        .collect()
}
