//! Error types for request search.

use axum::http::StatusCode;
use thiserror::Error;

use super::types::{RequestId, SearchSpec};

/// Errors that can occur while searching for requests.
///
/// "Not found" is deliberately absent: it is reported through
/// [`ResultEnvelope`](super::types::ResultEnvelope) rather than as an error.
#[derive(Debug, Error)]
pub enum RequestSearchError {
    /// The remote query failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// A response payload did not have the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// The chain answered a record query with a non-OK status.
    #[error("request {id} unavailable: {status}")]
    RecordUnavailable { id: RequestId, status: String },

    /// The index broke one of its own guarantees.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// Search parameters failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RequestSearchError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Transport(_) | Self::Decode(_) | Self::RecordUnavailable { .. } => {
                StatusCode::BAD_GATEWAY
            }
            Self::InvariantViolation(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::RecordUnavailable { .. } => "RECORD_UNAVAILABLE",
            Self::InvariantViolation(_) => "INVARIANT_VIOLATION",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<serde_json::Error> for RequestSearchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for request search operations.
pub type SearchResult<T> = Result<T, RequestSearchError>;

/// Validation helper for search requests.
pub struct RequestValidator;

impl RequestValidator {
    /// Validate every field of a search specification.
    ///
    /// Fields are spliced into a `/`-separated query path, so they must be
    /// non-empty and must not contain a separator.
    pub fn validate_spec(spec: &SearchSpec) -> SearchResult<()> {
        for (name, value) in spec.fields() {
            if value.is_empty() {
                return Err(RequestSearchError::validation(format!(
                    "{} cannot be empty",
                    name
                )));
            }
            if value.contains('/') {
                return Err(RequestSearchError::validation(format!(
                    "{} cannot contain '/'",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Validate a result limit against the configured maximum.
    pub fn validate_limit(limit: u32, max_limit: u32) -> SearchResult<()> {
        if limit == 0 {
            return Err(RequestSearchError::validation(
                "Limit must be greater than 0",
            ));
        }

        if limit > max_limit {
            return Err(RequestSearchError::validation(format!(
                "Limit too high: {} (max {})",
                limit, max_limit
            )));
        }

        Ok(())
    }
}
