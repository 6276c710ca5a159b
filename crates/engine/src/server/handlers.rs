//! Axum request handlers for all service endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::protocol::{
    AlgorithmsResponse, DecodeRequest, DecodeResponse, DecryptRequest, DecryptResponse,
    EncodeRequest, EncodeResponse, EncodingTypesResponse, EncryptRequest, EncryptResponse,
    ErrorResponse, HealthResponse,
};
use common::TransformError;
use tracing::warn;

use crate::transform::{dispatch, registry};

/// `POST /api/encrypt` — encrypt text with the requested algorithm.
///
/// For AES the response additionally carries the key minted for this call;
/// the service keeps no copy, so losing it makes the ciphertext unrecoverable.
pub async fn encrypt(Json(req): Json<EncryptRequest>) -> Response {
    match dispatch::encrypt(&req.text, &req.algorithm, req.key.as_deref()) {
        Ok(out) => (
            StatusCode::OK,
            Json(EncryptResponse {
                encrypted_text: out.text,
                key: out.key,
            }),
        )
            .into_response(),
        Err(e) => failure(e),
    }
}

/// `POST /api/decrypt` — decrypt text with the requested algorithm and key.
pub async fn decrypt(Json(req): Json<DecryptRequest>) -> Response {
    match dispatch::decrypt(&req.text, &req.algorithm, req.key.as_deref()) {
        Ok(out) => (
            StatusCode::OK,
            Json(DecryptResponse {
                decrypted_text: out.text,
            }),
        )
            .into_response(),
        Err(e) => failure(e),
    }
}

/// `POST /api/encode` — encode text with the requested encoding.
pub async fn encode(Json(req): Json<EncodeRequest>) -> Response {
    match dispatch::encode(&req.text, &req.encoding_type) {
        Ok(encoded_text) => (StatusCode::OK, Json(EncodeResponse { encoded_text })).into_response(),
        Err(e) => failure(e),
    }
}

/// `POST /api/decode` — decode text with the requested encoding.
pub async fn decode(Json(req): Json<DecodeRequest>) -> Response {
    match dispatch::decode(&req.text, &req.encoding_type) {
        Ok(decoded_text) => (StatusCode::OK, Json(DecodeResponse { decoded_text })).into_response(),
        Err(e) => failure(e),
    }
}

/// `GET /api/algorithms` — list supported cipher algorithms.
pub async fn algorithms() -> impl IntoResponse {
    Json(AlgorithmsResponse {
        algorithms: registry::list_algorithms(),
    })
}

/// `GET /api/encoding_types` — list supported encodings.
pub async fn encoding_types() -> impl IntoResponse {
    Json(EncodingTypesResponse {
        encoding_types: registry::list_encodings(),
    })
}

/// `GET /health` — liveness check.
///
/// The engine holds no state that could degrade, so a serving process is a
/// healthy process.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".into(),
        message: "Encryption API is running".into(),
    })
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ErrorResponse::new("not_found", "the requested resource does not exist");
    (StatusCode::NOT_FOUND, Json(err))
}

/// Render a [`TransformError`] as the standard error response, preserving the
/// machine-readable kind end-to-end.
fn failure(e: TransformError) -> Response {
    let status =
        StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        warn!(code = e.kind.code(), error = %e, "transform failed");
    }
    (status, Json(ErrorResponse::new(e.kind.code(), e.message))).into_response()
}
