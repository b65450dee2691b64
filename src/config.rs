//! Configuration Module
//!
//! Handles loading and managing server configuration from environment
//! variables.

use std::env;

use crate::cache::StrategyKind;
use crate::error::Result;

/// Server configuration parameters.
///
/// Numeric values fall back to defaults when unset or unparsable; an
/// unknown eviction strategy name is a hard error, reported at startup
/// rather than surfacing as a fault on a later call.
#[derive(Debug, Clone)]
pub struct Config {
    /// Total cache capacity in bytes
    pub capacity: usize,
    /// Eviction strategy
    pub strategy: StrategyKind,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Cache capacity in bytes (default: 1 MiB)
    /// - `CACHE_STRATEGY` - Eviction strategy name (default: "fifo")
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Result<Self> {
        let strategy = env::var("CACHE_STRATEGY")
            .unwrap_or_else(|_| "fifo".to_string())
            .parse()?;

        Ok(Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1024 * 1024),
            strategy,
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 1024 * 1024,
            strategy: StrategyKind::Fifo,
            server_port: 3000,
        }
    }
}
