//! Backend Module
//!
//! The fixed contract of the backing key-value store the cache sits in
//! front of.

use std::collections::HashMap;

use parking_lot::RwLock;

// == Backend Contract ==
/// Synchronous backing store consumed by [`ShardedStore`].
///
/// Both calls may block for the backend's full duration (network, disk);
/// the store holds the key's shard lock across them.
///
/// The contract has no not-found channel: a key the backend does not know
/// is represented by the empty value, so a genuinely missing key and an
/// empty-valued key are indistinguishable downstream.
///
/// [`ShardedStore`]: crate::store::ShardedStore
pub trait Backend: Send + Sync {
    /// Fetches the authoritative value for a key.
    fn fetch(&self, key: &str) -> Vec<u8>;

    /// Persists a key-value pair. No success/failure acknowledgment is
    /// modeled.
    fn persist(&self, key: &str, value: &[u8]);
}

// == Memory Backend ==
/// In-process backing store used by the server binary and tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of persisted keys.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true when nothing has been persisted.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Backend for MemoryBackend {
    fn fetch(&self, key: &str) -> Vec<u8> {
        // Absence is the empty value
        self.entries.read().get(key).cloned().unwrap_or_default()
    }

    fn persist(&self, key: &str, value: &[u8]) {
        self.entries.write().insert(key.to_string(), value.to_vec());
    }
}
