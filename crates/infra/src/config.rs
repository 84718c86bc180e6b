//! Configuration loading and representation.
//!
//! Everything comes from the process environment at startup:
//!
//! | Variable | Default |
//! |---|---|
//! | `USE_PERSISTENT_STORES` | `false` (in-memory store) |
//! | `DB_PATH` | `inventory.db` |
//! | `BIND_ADDR` | `0.0.0.0:5000` |

use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "inventory.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Which item store backend to construct.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    InMemory,
    Sqlite,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// SQLite file location; ignored by the in-memory backend.
    pub db_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::InMemory,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map instead of the real env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let use_persistent = match lookup("USE_PERSISTENT_STORES") {
            None => false,
            Some(raw) => raw.trim().parse::<bool>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "USE_PERSISTENT_STORES is not a boolean; using in-memory store");
                false
            }),
        };

        let db_path = lookup("DB_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        Self {
            backend: if use_persistent {
                StoreBackend::Sqlite
            } else {
                StoreBackend::InMemory
            },
            db_path,
        }
    }
}

/// Process-level configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub store: StoreConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            store: StoreConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = lookup("BIND_ADDR")
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Self {
            bind_addr,
            store: StoreConfig::from_lookup(lookup),
        }
    }
}
