//! Common types, protocol definitions, and errors shared across `text-transform-svc` crates.

pub mod error;
pub mod protocol;

pub use error::{ErrorKind, TransformError};
