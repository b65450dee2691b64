//! Sharded Store Module
//!
//! Coordinates concurrent reads and writes against the cache and the
//! backing store. Each key hashes to one of [`SHARD_COUNT`] locks; all
//! work on that key happens under its shard's exclusive lock.
//!
//! Reads take the exclusive lock too. That is deliberate: it collapses a
//! thundering herd of concurrent misses within a shard into one backend
//! fetch (single-flight) instead of N redundant ones. A future variant
//! that wants concurrent reads must separately suppress duplicate
//! fetches, not simply switch to a shared lock.

use parking_lot::{Mutex, RwLock};
use tracing::{debug, trace};

use crate::cache::BoundedCache;
use crate::error::Result;
use crate::store::{Backend, SHARD_COUNT};

// == Key Hashing ==
const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// FNV-1a 32-bit hash. Stable across runs, so a key maps to the same
/// shard for the lifetime of the store.
fn fnv1a(key: &str) -> u32 {
    let mut hash = FNV_OFFSET;
    for byte in key.as_bytes() {
        hash ^= u32::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

// == Sharded Store ==
/// Read-through/write-through front for a [`Backend`].
///
/// Owns the shard lock array and the shared cache; the cache carries its
/// own reader-writer lock because shard locks do not mutually exclude
/// across shards.
pub struct ShardedStore<B> {
    /// One lock per keyspace partition
    locks: Vec<Mutex<()>>,
    /// Cache shared across all shards
    cache: RwLock<BoundedCache>,
    /// Backing store
    backend: B,
}

impl<B: Backend> ShardedStore<B> {
    // == Constructor ==
    /// Creates a store in front of `backend`, caching into `cache`.
    pub fn new(cache: BoundedCache, backend: B) -> Self {
        Self {
            locks: (0..SHARD_COUNT).map(|_| Mutex::new(())).collect(),
            cache: RwLock::new(cache),
            backend,
        }
    }

    /// Shard index for a key.
    fn shard(key: &str) -> usize {
        fnv1a(key) as usize % SHARD_COUNT
    }

    // == Get ==
    /// Returns the value for a key, reading through to the backend on a
    /// cache miss.
    ///
    /// The fetched value is cached best-effort: a value too large to
    /// admit is still returned to the caller.
    pub fn get(&self, key: &str) -> Result<Vec<u8>> {
        let _shard = self.locks[Self::shard(key)].lock();

        if let Some(value) = self.cache.read().get(key) {
            trace!("cache hit for key '{}'", key);
            return Ok(value);
        }

        trace!("cache miss for key '{}', fetching from backend", key);
        let value = self.backend.fetch(key);
        if let Err(err) = self.cache.write().set(key, value.clone()) {
            debug!("fetched value for key '{}' not cached: {}", key, err);
        }

        Ok(value)
    }

    // == Set ==
    /// Persists a key-value pair to the backend, then updates the cache.
    ///
    /// The backend write always happens first and is never rolled back:
    /// if the cache afterwards rejects the item, the error surfaces to
    /// the caller while the backend keeps the new value. Backend
    /// durability wins over cache/backend consistency here.
    pub fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let _shard = self.locks[Self::shard(key)].lock();

        self.backend.persist(key, &value);
        self.cache.write().set(key, value)
    }

    // == Backend Access ==
    /// The backing store this cache fronts.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
