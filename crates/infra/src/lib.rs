//! Infrastructure layer: item storage backends and configuration.

pub mod config;
pub mod item_store;

pub use config::{AppConfig, StoreBackend, StoreConfig};
pub use item_store::{InMemoryItemStore, ItemStore, SqliteItemStore, StoreError, open_store};
