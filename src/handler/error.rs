//! Error type returned by command handlers, query handlers and listeners.

use std::error::Error;

use thiserror::Error;

/// Failure raised by handler or listener logic.
///
/// The bus never inspects or retries these; they are wrapped in a
/// [`BusError`](crate::BusError) and surfaced to the caller as-is.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Business logic rejected the message (validation, invariant violation).
    #[error("rejected: {0}")]
    Rejected(String),
    /// Something the message refers to does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// Payload decode / deserialization failed.
    #[error("decode failed: {0}")]
    DecodeFailed(String),
    /// Other error.
    #[error("handler error: {0}")]
    Other(Box<dyn Error + Send + Sync>),
}

impl HandlerError {
    /// Wrap any error as `HandlerError::Other`.
    pub fn other(err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        HandlerError::Other(err.into())
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::DecodeFailed(err.to_string())
    }
}
