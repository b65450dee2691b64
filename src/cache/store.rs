//! Bounded Cache Module
//!
//! Key→value container with a hard byte-size ceiling. Admission and
//! eviction decisions are delegated to the strategy selected at
//! construction.

use std::collections::HashMap;

use crate::cache::{FifoStrategy, StrategyKind, MAX_ITEM_SIZE};
use crate::error::{CacheError, Result};

// == Strategy Dispatch ==
/// Closed dispatch over the strategies named by [`StrategyKind`].
#[derive(Debug)]
enum Strategy {
    Fifo(FifoStrategy),
}

// == Bounded Cache ==
/// Size-bounded in-memory cache.
///
/// The cache owns the key→value buffer; the strategy owns the admission
/// order and byte accounting. The container itself is not synchronized;
/// callers that share it across threads wrap it in a lock.
#[derive(Debug)]
pub struct BoundedCache {
    /// Key-value storage
    buffer: HashMap<String, Vec<u8>>,
    /// Admission/eviction algorithm
    strategy: Strategy,
}

impl BoundedCache {
    // == Constructor ==
    /// Creates a cache with the given byte capacity and eviction strategy.
    ///
    /// The strategy selector is a closed enum, so construction cannot fail;
    /// unknown strategy names are rejected earlier, when configuration is
    /// parsed.
    pub fn new(capacity: usize, kind: StrategyKind) -> Self {
        let strategy = match kind {
            StrategyKind::Fifo => Strategy::Fifo(FifoStrategy::new(capacity)),
        };

        Self {
            buffer: HashMap::new(),
            strategy,
        }
    }

    // == Get ==
    /// Looks up a key, cloning the value out.
    ///
    /// Pure: no ordering side effect, no bookkeeping mutation.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        match &self.strategy {
            Strategy::Fifo(fifo) => fifo.get(&self.buffer, key).cloned(),
        }
    }

    // == Set ==
    /// Inserts or overwrites an entry, evicting others as needed.
    ///
    /// Fails with [`CacheError::MaxValueSize`] when
    /// `key.len() + value.len()` exceeds [`MAX_ITEM_SIZE`], and with
    /// [`CacheError::NoMoreCap`] when the item exceeds the cache capacity
    /// itself. Either rejection leaves the cache unchanged.
    pub fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        let item_size = key.len() + value.len();
        if item_size > MAX_ITEM_SIZE {
            return Err(CacheError::MaxValueSize {
                size: item_size,
                limit: MAX_ITEM_SIZE,
            });
        }

        match &mut self.strategy {
            Strategy::Fifo(fifo) => fifo.set(&mut self.buffer, key, value),
        }
    }

    // == Contains ==
    /// Checks whether a key is currently cached, without reading it.
    pub fn contains_key(&self, key: &str) -> bool {
        self.buffer.contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    // == Size ==
    /// Current byte size, `key.len() + value.len()` summed over entries.
    pub fn size(&self) -> usize {
        match &self.strategy {
            Strategy::Fifo(fifo) => fifo.size(),
        }
    }

    // == Capacity ==
    /// The byte ceiling set at construction.
    pub fn capacity(&self) -> usize {
        match &self.strategy {
            Strategy::Fifo(fifo) => fifo.capacity(),
        }
    }

    // == Test Accessors ==
    /// Buffered entries, in no particular order.
    #[cfg(test)]
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&String, &Vec<u8>)> {
        self.buffer.iter()
    }

    /// Admission order, oldest first.
    #[cfg(test)]
    pub(crate) fn order(&self) -> Vec<String> {
        match &self.strategy {
            Strategy::Fifo(fifo) => fifo.order(),
        }
    }
}
