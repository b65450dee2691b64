//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache and its HTTP surface.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key not found and no read-through path applies
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Single item exceeds the global per-item ceiling
    #[error("Item of {size} bytes exceeds the {limit} byte per-item limit")]
    MaxValueSize { size: usize, limit: usize },

    /// Item can never be admitted, even with every other entry evicted
    #[error("Item of {size} bytes can never fit within the {capacity} byte capacity")]
    NoMoreCap { size: usize, capacity: usize },

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid configuration, reported at startup
    #[error("Invalid configuration: {0}")]
    Config(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::MaxValueSize { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            CacheError::NoMoreCap { .. } => StatusCode::SERVICE_UNAVAILABLE,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
