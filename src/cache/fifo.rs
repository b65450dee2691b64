//! FIFO Strategy Module
//!
//! Implements byte-budgeted eviction in strict insertion order.
//!
//! The strategy owns the admission queue, the running byte size and the
//! capacity; the key→value buffer itself is owned by [`BoundedCache`] and
//! borrowed for each operation.
//!
//! [`BoundedCache`]: crate::cache::BoundedCache

use std::collections::{HashMap, VecDeque};

use crate::error::{CacheError, Result};

// == FIFO Strategy ==
/// Byte-budgeted FIFO eviction.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest surviving insertion (next eviction candidate)
/// - Back = Newest insertion
///
/// Reads never touch the queue; a FIFO cache does not promote on read.
#[derive(Debug)]
pub struct FifoStrategy {
    /// Keys in admission order
    queue: VecDeque<String>,
    /// Running total of `key.len() + value.len()` over buffered entries
    size: usize,
    /// Hard ceiling for `size`
    capacity: usize,
}

impl FifoStrategy {
    // == Constructor ==
    /// Creates an empty strategy with the given byte capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            size: 0,
            capacity,
        }
    }

    // == Get ==
    /// Pure buffer lookup. No ordering side effect.
    pub(crate) fn get<'a>(
        &self,
        buffer: &'a HashMap<String, Vec<u8>>,
        key: &str,
    ) -> Option<&'a Vec<u8>> {
        buffer.get(key)
    }

    // == Set ==
    /// Admits `key`/`value`, evicting oldest entries until the item fits.
    ///
    /// An item whose own size exceeds `capacity` can never be admitted,
    /// even with every other entry evicted; it is rejected with
    /// [`CacheError::NoMoreCap`] before any state is touched.
    pub(crate) fn set(
        &mut self,
        buffer: &mut HashMap<String, Vec<u8>>,
        key: &str,
        value: Vec<u8>,
    ) -> Result<()> {
        let item_size = key.len() + value.len();
        if item_size > self.capacity {
            return Err(CacheError::NoMoreCap {
                size: item_size,
                capacity: self.capacity,
            });
        }

        // Vacate the old entry on overwrite. Its slot stays in the queue
        // for now; the eviction scan below treats it as already consumed.
        if let Some(old) = buffer.remove(key) {
            self.size -= key.len() + old.len();
        }

        if item_size + self.size > self.capacity {
            let mut consumed = None;
            for (i, k) in self.queue.iter().enumerate() {
                if let Some(old) = buffer.remove(k) {
                    self.size -= k.len() + old.len();
                }

                // Never stop on the incoming key's own slot: it was vacated
                // above, so stopping there would have freed no room from
                // other entries. An overwrite that triggers eviction must
                // evict at least one other entry.
                if item_size + self.size <= self.capacity && k != key {
                    consumed = Some(i + 1);
                    break;
                }
            }

            match consumed {
                Some(n) => {
                    self.queue.drain(..n);
                }
                // The scan consumed the whole queue without the stop
                // condition firing. Everything scanned is gone from the
                // buffer, so reconcile the queue with it.
                None => self.queue.retain(|k| k == key),
            }
        }

        // Keys appear in the queue exactly once. An overwrite keeps its
        // original slot unless the eviction scan dropped it.
        if !self.queue.iter().any(|k| k == key) {
            self.queue.push_back(key.to_string());
        }

        buffer.insert(key.to_string(), value);
        self.size += item_size;

        Ok(())
    }

    // == Size ==
    /// Current byte size of all buffered entries.
    pub fn size(&self) -> usize {
        self.size
    }

    // == Capacity ==
    /// The byte ceiling this strategy evicts down to.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the number of queued keys.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    // == Oldest ==
    /// Returns the next eviction candidate without removing it.
    pub fn oldest(&self) -> Option<&String> {
        self.queue.front()
    }

    // == Order Snapshot ==
    /// Admission order, oldest first.
    #[cfg(test)]
    pub(crate) fn order(&self) -> Vec<String> {
        self.queue.iter().cloned().collect()
    }
}
