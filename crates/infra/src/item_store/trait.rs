use std::sync::Arc;

use thiserror::Error;

use stockroom_core::ItemId;
use stockroom_inventory::{Item, ItemDraft};

/// Item store operation error.
///
/// `NotFound` is the only caller-visible failure; everything else is an
/// infrastructure problem the API reports generically.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("item {0} not found")]
    NotFound(ItemId),

    #[error("lock poisoned")]
    Poisoned,

    /// A stored row could not be mapped back to an item.
    #[error("corrupt row: {0}")]
    Corrupt(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Canonical collection of items, keyed by a store-assigned integer id.
///
/// Implementations must:
/// - hand out strictly increasing ids and never reuse one after deletion
/// - list in id (creation) order
/// - apply each operation atomically for its id
///
/// Inputs are validated [`ItemDraft`]s; a store never sees raw client data.
#[async_trait::async_trait]
pub trait ItemStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Item>, StoreError>;

    async fn create(&self, draft: ItemDraft) -> Result<Item, StoreError>;

    async fn get(&self, id: ItemId) -> Result<Item, StoreError>;

    /// Replace every mutable field of `id` with the draft.
    async fn update(&self, id: ItemId, draft: ItemDraft) -> Result<Item, StoreError>;

    /// Remove `id`, returning its last state.
    async fn delete(&self, id: ItemId) -> Result<Item, StoreError>;
}

#[async_trait::async_trait]
impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        (**self).list().await
    }

    async fn create(&self, draft: ItemDraft) -> Result<Item, StoreError> {
        (**self).create(draft).await
    }

    async fn get(&self, id: ItemId) -> Result<Item, StoreError> {
        (**self).get(id).await
    }

    async fn update(&self, id: ItemId, draft: ItemDraft) -> Result<Item, StoreError> {
        (**self).update(id, draft).await
    }

    async fn delete(&self, id: ItemId) -> Result<Item, StoreError> {
        (**self).delete(id).await
    }
}
