//! Item store implementations
//!
//! Each store follows the same contract:
//! - ids are assigned by the store, strictly increasing
//! - list returns every item ordered by id ascending
//! - create is durable before it returns

pub mod items;
pub mod memory;

use async_trait::async_trait;

use crate::db::DbError;
use crate::models::{Item, ItemName};

pub use items::PgItemStore;
pub use memory::MemoryItemStore;

/// Persistence seam used by the HTTP handlers.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Ensure backing storage exists. Safe to call repeatedly.
    async fn init_schema(&self) -> Result<(), DbError>;

    /// All items, ascending by id.
    async fn list(&self) -> Result<Vec<Item>, DbError>;

    /// Insert one item and return it with its assigned id.
    async fn create(&self, name: ItemName) -> Result<Item, DbError>;
}
