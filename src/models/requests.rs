//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for the SET operation (PUT /set)
///
/// # Fields
/// - `key`: The key to persist the value under
/// - `value`: The value to store
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    pub key: String,
    pub value: String,
}

impl SetRequest {
    /// Validates the request, returning an error message if invalid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key must not be empty".to_string());
        }
        None
    }
}
