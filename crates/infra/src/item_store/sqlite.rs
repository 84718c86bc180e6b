//! SQLite-backed item store.
//!
//! One table, one statement per operation. Ids come from `AUTOINCREMENT`, which
//! guarantees they are never reused even after the highest row is deleted.

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

use stockroom_core::ItemId;
use stockroom_inventory::{Item, ItemDraft};

use super::r#trait::{ItemStore, StoreError};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        name     TEXT    NOT NULL,
        quantity INTEGER NULL,
        price    REAL    NULL
    )
"#;

/// SQLite item store.
#[derive(Debug, Clone)]
pub struct SqliteItemStore {
    pool: SqlitePool,
}

impl SqliteItemStore {
    /// Open (creating if missing) the database file at `path` and ensure the
    /// `items` table exists.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::init(pool).await
    }

    /// Private in-memory database (tests/dev).
    ///
    /// Every pooled connection to `:memory:` would get its own database, so the
    /// pool is pinned to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::init(pool).await
    }

    async fn init(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(CREATE_TABLE).execute(&pool).await?;
        Ok(Self { pool })
    }
}

fn row_to_item(row: &SqliteRow) -> Result<Item, StoreError> {
    let raw_id: i64 = row.try_get("id")?;
    let id = ItemId::new(raw_id)
        .ok_or_else(|| StoreError::Corrupt(format!("non-positive id {raw_id}")))?;

    Ok(Item {
        id,
        name: row.try_get("name")?,
        quantity: row.try_get("quantity")?,
        price: row.try_get("price")?,
    })
}

#[async_trait::async_trait]
impl ItemStore for SqliteItemStore {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let rows = sqlx::query("SELECT id, name, quantity, price FROM items ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_item).collect()
    }

    async fn create(&self, draft: ItemDraft) -> Result<Item, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO items (name, quantity, price)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, quantity, price
            "#,
        )
        .bind(draft.name())
        .bind(draft.quantity())
        .bind(draft.price())
        .fetch_one(&self.pool)
        .await?;

        let item = row_to_item(&row)?;
        tracing::debug!(item_id = %item.id, "item created");
        Ok(item)
    }

    async fn get(&self, id: ItemId) -> Result<Item, StoreError> {
        let row = sqlx::query("SELECT id, name, quantity, price FROM items WHERE id = ?1")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => row_to_item(&row),
            None => Err(StoreError::NotFound(id)),
        }
    }

    async fn update(&self, id: ItemId, draft: ItemDraft) -> Result<Item, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE items
            SET name = ?1, quantity = ?2, price = ?3
            WHERE id = ?4
            RETURNING id, name, quantity, price
            "#,
        )
        .bind(draft.name())
        .bind(draft.quantity())
        .bind(draft.price())
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        let row = row.ok_or(StoreError::NotFound(id))?;
        tracing::debug!(item_id = %id, "item updated");
        row_to_item(&row)
    }

    async fn delete(&self, id: ItemId) -> Result<Item, StoreError> {
        let row = sqlx::query(
            "DELETE FROM items WHERE id = ?1 RETURNING id, name, quantity, price",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        let row = row.ok_or(StoreError::NotFound(id))?;
        tracing::debug!(item_id = %id, "item deleted");
        row_to_item(&row)
    }
}
