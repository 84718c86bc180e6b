use std::sync::Arc;

use anyhow::Context;

use stockroom_infra::{InMemoryItemStore, ItemStore, StoreConfig, open_store};

/// Long-lived collaborators shared by every handler.
///
/// Built once at startup and handed to the router as an `Extension`; tests
/// build their own so no state leaks between them.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn ItemStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Services backed by a fresh in-memory store (dev/test).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryItemStore::new()))
    }

    pub fn store(&self) -> &dyn ItemStore {
        self.store.as_ref()
    }
}

pub async fn build_services(config: &StoreConfig) -> anyhow::Result<AppServices> {
    let store = open_store(config)
        .await
        .with_context(|| format!("failed to open item store ({:?})", config.backend))?;
    Ok(AppServices::new(store))
}
