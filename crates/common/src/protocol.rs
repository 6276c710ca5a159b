//! Request and response types exchanged with API callers.
//!
//! These types are serialised as JSON over the public HTTP API. Field names
//! mirror the wire contract exactly (`encrypted_text`, `encoding_type`, ...),
//! so renaming a field here is a breaking API change.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Encrypt / decrypt endpoints
// ---------------------------------------------------------------------------

/// Request body for `POST /api/encrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptRequest {
    /// Plaintext to encrypt.
    pub text: String,
    /// Algorithm identifier, e.g. `"caesar"`, `"aes"`, `"substitution"`.
    pub algorithm: String,
    /// Cipher key. Required for key-taking algorithms; ignored by AES,
    /// which mints its own key per call.
    #[serde(default)]
    pub key: Option<String>,
}

/// Successful response body for `POST /api/encrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptResponse {
    /// Ciphertext produced by the selected algorithm.
    pub encrypted_text: String,
    /// Key material minted during encryption (AES only). The caller must
    /// replay this value on the decrypt call; the service keeps no copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Request body for `POST /api/decrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptRequest {
    /// Ciphertext to decrypt.
    pub text: String,
    /// Algorithm identifier the ciphertext was produced with.
    pub algorithm: String,
    /// Cipher key. For AES this is the `key` value returned by the
    /// corresponding encrypt call.
    #[serde(default)]
    pub key: Option<String>,
}

/// Successful response body for `POST /api/decrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptResponse {
    /// Recovered plaintext.
    pub decrypted_text: String,
}

// ---------------------------------------------------------------------------
// Encode / decode endpoints
// ---------------------------------------------------------------------------

/// Request body for `POST /api/encode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeRequest {
    /// Text to encode.
    pub text: String,
    /// Encoding identifier, e.g. `"base64"`, `"hex"`, `"url"`, `"binary"`.
    pub encoding_type: String,
}

/// Successful response body for `POST /api/encode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeResponse {
    /// Encoded representation of the input text.
    pub encoded_text: String,
}

/// Request body for `POST /api/decode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeRequest {
    /// Encoded text to decode.
    pub text: String,
    /// Encoding identifier the text was produced with.
    pub encoding_type: String,
}

/// Successful response body for `POST /api/decode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeResponse {
    /// Decoded text.
    pub decoded_text: String,
}

// ---------------------------------------------------------------------------
// Capability listing endpoints
// ---------------------------------------------------------------------------

/// One algorithm entry in the `GET /api/algorithms` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmInfo {
    /// Wire identifier accepted by the encrypt/decrypt endpoints.
    pub value: String,
    /// Human-readable display name.
    pub name: String,
    /// Whether the caller must supply a key.
    pub requires_key: bool,
    /// Hint describing the expected key format.
    pub key_description: String,
}

/// Response body for `GET /api/algorithms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmsResponse {
    /// Supported algorithms in fixed display order.
    pub algorithms: Vec<AlgorithmInfo>,
}

/// One encoding entry in the `GET /api/encoding_types` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodingTypeInfo {
    /// Wire identifier accepted by the encode/decode endpoints.
    pub value: String,
    /// Human-readable display name.
    pub name: String,
    /// Short description of the encoding.
    pub description: String,
}

/// Response body for `GET /api/encoding_types`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodingTypesResponse {
    /// Supported encodings in fixed display order.
    pub encoding_types: Vec<EncodingTypeInfo>,
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"invalid_key"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub error: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            error: error.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status; always `"healthy"` while the process serves.
    pub status: String,
    /// Human-readable status line.
    pub message: String,
}
