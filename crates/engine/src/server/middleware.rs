//! Axum middleware layers applied to the router.
//!
//! Includes request tracing, timeout enforcement, response compression, and a
//! request body cap. Every transform is in-memory and proportional to input
//! length, so the body cap is the only resource bound the service needs.

use std::time::Duration;

/// Default per-request timeout applied to all routes.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum accepted request body size (1 MiB).
pub const MAX_BODY_BYTES: usize = 1024 * 1024;
