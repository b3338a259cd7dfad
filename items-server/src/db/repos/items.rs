//! PostgreSQL item store
//!
//! - list: single SELECT ordered by primary key
//! - create: INSERT ... RETURNING id inside a transaction, committed before returning

use async_trait::async_trait;
use sqlx::{FromRow, Row};

use super::ItemStore;
use crate::db::{schema, ConnectionProvider, DbError};
use crate::models::{Item, ItemName};

/// Row shape of the `items` table
#[derive(Debug, FromRow)]
struct ItemRow {
    id: i32,
    name: String,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

/// Item store backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgItemStore {
    provider: ConnectionProvider,
}

impl PgItemStore {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn init_schema(&self) -> Result<(), DbError> {
        schema::init(&self.provider).await
    }

    async fn list(&self) -> Result<Vec<Item>, DbError> {
        let mut conn = self.provider.acquire().await?;

        let rows: Vec<ItemRow> = sqlx::query_as("SELECT id, name FROM items ORDER BY id ASC")
            .fetch_all(&mut *conn)
            .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn create(&self, name: ItemName) -> Result<Item, DbError> {
        let mut tx = self.provider.begin().await?;

        let row = sqlx::query("INSERT INTO items (name) VALUES ($1) RETURNING id")
            .bind(name.as_str())
            .fetch_one(&mut *tx)
            .await?;
        let id: i32 = row.try_get("id")?;

        tx.commit().await?;
        tracing::debug!(id, "item inserted");

        Ok(Item {
            id,
            name: name.into_string(),
        })
    }
}
