//! In-process item store
//!
//! Same contract as the PostgreSQL store, without persistence across
//! restarts. Used by tests and `items serve --memory`.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ItemStore;
use crate::db::DbError;
use crate::models::{Item, ItemName};

#[derive(Debug)]
struct Inner {
    next_id: i32,
    items: Vec<Item>,
}

/// Item store held in memory
#[derive(Debug)]
pub struct MemoryItemStore {
    inner: RwLock<Inner>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Store whose next assigned id is `next_id`.
    pub fn starting_at(next_id: i32) -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id,
                items: Vec::new(),
            }),
        }
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn init_schema(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Item>, DbError> {
        // Ids are pushed in increasing order, so insertion order is id order
        Ok(self.inner.read().await.items.clone())
    }

    async fn create(&self, name: ItemName) -> Result<Item, DbError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id = id.checked_add(1).ok_or(DbError::IdsExhausted)?;
        let item = Item {
            id,
            name: name.into_string(),
        };
        inner.items.push(item.clone());
        Ok(item)
    }
}
