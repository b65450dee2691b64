//! Store Module
//!
//! Read-through/write-through orchestration in front of a backing store.
//! Callers go through [`ShardedStore`]; the backing store is any
//! [`Backend`] implementation.

mod backend;
mod sharded;

// Re-export public types
pub use backend::{Backend, MemoryBackend};
pub use sharded::ShardedStore;

// == Public Constants ==
/// Number of independent shard locks partitioning the keyspace.
pub const SHARD_COUNT: usize = 256;
