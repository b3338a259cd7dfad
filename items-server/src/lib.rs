//! items-server: HTTP service over a single `items` table
//!
//! Exposes create/list operations on items plus a health check.
//! Persistence goes through the [`db::ItemStore`] trait so handlers
//! never hold ambient connection state.

pub mod db;
pub mod http;
pub mod models;

pub use db::{ConnectionProvider, DbConfig, DbError, ItemStore, MemoryItemStore, PgItemStore};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use models::{Item, ItemName, ValidationError};
