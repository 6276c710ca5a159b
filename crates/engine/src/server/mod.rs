//! Axum HTTP server, routing, and middleware.
//!
//! # Responsibilities
//! - Define the Axum router with all routes and shared middleware.
//! - Translate engine outcomes into HTTP status codes and JSON bodies,
//!   preserving the machine-readable error kind end-to-end.

pub mod handlers;
pub mod middleware;
pub mod router;
