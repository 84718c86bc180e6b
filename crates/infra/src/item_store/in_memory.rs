use std::collections::BTreeMap;
use std::sync::RwLock;

use stockroom_core::ItemId;
use stockroom_inventory::{Item, ItemDraft};

use super::r#trait::{ItemStore, StoreError};

#[derive(Debug)]
struct State {
    items: BTreeMap<ItemId, Item>,
    next_id: ItemId,
}

/// In-memory item store.
///
/// Intended for tests/dev. Contents live as long as the store value; build a
/// fresh one per test instead of resetting shared state.
#[derive(Debug)]
pub struct InMemoryItemStore {
    state: RwLock<State>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                items: BTreeMap::new(),
                next_id: ItemId::FIRST,
            }),
        }
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::Poisoned)?;
        Ok(state.items.values().cloned().collect())
    }

    async fn create(&self, draft: ItemDraft) -> Result<Item, StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::Poisoned)?;

        let id = state.next_id;
        state.next_id = id.next();

        let item = draft.into_item(id);
        state.items.insert(id, item.clone());
        tracing::debug!(item_id = %id, "item created");
        Ok(item)
    }

    async fn get(&self, id: ItemId) -> Result<Item, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::Poisoned)?;
        state.items.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: ItemId, draft: ItemDraft) -> Result<Item, StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::Poisoned)?;

        let slot = state.items.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *slot = draft.into_item(id);
        tracing::debug!(item_id = %id, "item updated");
        Ok(slot.clone())
    }

    async fn delete(&self, id: ItemId) -> Result<Item, StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::Poisoned)?;

        let removed = state.items.remove(&id).ok_or(StoreError::NotFound(id))?;
        tracing::debug!(item_id = %id, "item deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item_store::r#trait::contract;
    use proptest::prelude::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn create_then_get_round_trips() {
        contract::create_then_get_round_trips(&InMemoryItemStore::new()).await;
    }

    #[tokio::test]
    async fn ids_increase_and_are_not_reused() {
        contract::ids_increase_and_are_not_reused(&InMemoryItemStore::new()).await;
    }

    #[tokio::test]
    async fn list_is_in_id_order() {
        contract::list_is_in_id_order(&InMemoryItemStore::new()).await;
    }

    #[tokio::test]
    async fn update_replaces_fields_wholesale() {
        contract::update_replaces_fields_wholesale(&InMemoryItemStore::new()).await;
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        contract::missing_ids_are_not_found(&InMemoryItemStore::new()).await;
    }

    #[tokio::test]
    async fn delete_returns_last_state() {
        contract::delete_returns_last_state(&InMemoryItemStore::new()).await;
    }

    #[tokio::test]
    async fn shared_handle_sees_the_same_collection() {
        let store = Arc::new(InMemoryItemStore::new());
        let handle = Arc::clone(&store);
        contract::list_is_in_id_order(&handle).await;
        assert_eq!(store.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn stores_are_independent() {
        let a = InMemoryItemStore::new();
        let b = InMemoryItemStore::new();
        a.create(contract::draft("apple", None, None)).await.unwrap();

        assert!(b.list().await.unwrap().is_empty());
        let first = b.create(contract::draft("pear", None, None)).await.unwrap();
        assert_eq!(first.id, ItemId::FIRST);
    }

    proptest! {
        /// Property: any interleaving of creates and deletes yields strictly increasing ids.
        #[test]
        fn ids_strictly_increase(ops in proptest::collection::vec(any::<bool>(), 1..60)) {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            rt.block_on(async {
                let store = InMemoryItemStore::new();
                let mut last: Option<ItemId> = None;

                for delete_last in ops {
                    let item = store.create(contract::draft("x", None, None)).await.unwrap();
                    if let Some(prev) = last {
                        assert!(item.id > prev);
                    }
                    last = Some(item.id);
                    if delete_last {
                        store.delete(item.id).await.unwrap();
                    }
                }
            });
        }
    }
}
