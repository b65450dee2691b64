//! Cache Module
//!
//! Provides a byte-budgeted in-memory cache with pluggable eviction.
//! FIFO is the only strategy currently implemented.

mod fifo;
mod store;


// Re-export public types
pub use fifo::FifoStrategy;
pub use store::BoundedCache;

use std::str::FromStr;

use crate::error::CacheError;

// == Public Constants ==
/// Maximum allowed item size (`key.len() + value.len()`) in bytes.
///
/// This ceiling is global and independent of the configured capacity.
pub const MAX_ITEM_SIZE: usize = 1024 * 1024; // 1 MiB

// == Strategy Selector ==
/// Closed set of eviction strategies a cache can be constructed with.
///
/// Resolved at construction time; an unknown strategy name is a
/// configuration error, not a runtime fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Evict in strict insertion order, oldest surviving insertion first.
    Fifo,
}

impl FromStr for StrategyKind {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(StrategyKind::Fifo),
            other => Err(CacheError::Config(format!(
                "unknown eviction strategy '{}'",
                other
            ))),
        }
    }
}
