//! Item storage: one contract, two backends.

pub mod in_memory;
pub mod sqlite;
pub mod r#trait;

pub use in_memory::InMemoryItemStore;
pub use sqlite::SqliteItemStore;
pub use r#trait::{ItemStore, StoreError};

use std::sync::Arc;

use crate::config::{StoreBackend, StoreConfig};

/// Construct the backend selected by `config`.
pub async fn open_store(config: &StoreConfig) -> Result<Arc<dyn ItemStore>, StoreError> {
    match config.backend {
        StoreBackend::InMemory => {
            tracing::info!("using in-memory item store");
            Ok(Arc::new(InMemoryItemStore::new()))
        }
        StoreBackend::Sqlite => {
            tracing::info!(db_path = %config.db_path.display(), "using sqlite item store");
            Ok(Arc::new(SqliteItemStore::open(&config.db_path).await?))
        }
    }
}
