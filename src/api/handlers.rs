//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::BoundedCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{GetResponse, HealthResponse, SetRequest, SetResponse};
use crate::store::{MemoryBackend, ShardedStore};

/// Application state shared across all handlers.
///
/// The sharded store synchronizes itself, so handlers share it through a
/// plain `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Cache-fronted store
    pub store: Arc<ShardedStore<MemoryBackend>>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: ShardedStore<MemoryBackend>) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates a new AppState from configuration, with an in-process
    /// backing store.
    pub fn from_config(config: &Config) -> Self {
        let cache = BoundedCache::new(config.capacity, config.strategy);
        Self::new(ShardedStore::new(cache, MemoryBackend::new()))
    }
}

/// Handler for PUT /set
///
/// Write-through: persists the pair to the backend, then updates the
/// cache. A value too large to cache is still persisted; the error the
/// caller sees reports the failed cache admission, not a failed write.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    state.store.set(&req.key, req.value.into_bytes())?;

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Read-through: a cache miss falls back to the backend. Because the
/// backend contract represents absence as the empty value, a never-set
/// key answers 200 with an empty value rather than 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state.store.get(&key)?;

    Ok(Json(GetResponse::new(
        key,
        String::from_utf8_lossy(&value).into_owned(),
    )))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
