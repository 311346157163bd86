//! Error types for the bot API client.
//!
//! # Design
//! `Api` is the platform's own rejection (`ok: false`) and displays as the
//! bare `description` so callers can show it directly. `HttpError` covers an
//! error status whose body is not a rejecting envelope, and `Transport` covers
//! a round trip that never produced a response at all.

use thiserror::Error;

use crate::envelope::ResponseParameters;

/// Boxed error produced by a `Transport` implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by `BotClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The platform answered with `ok: false`.
    #[error("{description}")]
    Api {
        description: String,
        error_code: Option<i64>,
        parameters: Option<ResponseParameters>,
    },

    /// Error status without a rejecting envelope in the body.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request could not be delivered or the response could not be read.
    #[error("transport failure: {0}")]
    Transport(#[source] BoxError),

    /// A success response whose body is not an envelope.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// Typed call options did not serialize to a JSON object.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Seconds to wait before retrying, when the platform supplied one.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            ApiError::Api {
                parameters: Some(params),
                ..
            } => params.retry_after,
            _ => None,
        }
    }
}
