//! Shardcache - a size-bounded, concurrency-safe in-memory cache
//!
//! Sits in front of a backing key-value store with read-through and
//! write-through semantics, FIFO eviction, and sharded locking for
//! single-flight backend fetches.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use cache::{BoundedCache, StrategyKind, MAX_ITEM_SIZE};
pub use config::Config;
pub use error::CacheError;
pub use store::{Backend, MemoryBackend, ShardedStore};
