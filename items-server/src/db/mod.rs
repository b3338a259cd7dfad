//! Database layer - connection provider, schema, and item stores
//!
//! - Connections are checked out per operation and returned on drop
//! - Writes run in a transaction and commit before the caller sees the result
//! - Handlers only see the `ItemStore` trait

pub mod config;
pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;

pub use config::DbConfig;
pub use error::DbError;
pub use pool::ConnectionProvider;
pub use repos::{ItemStore, MemoryItemStore, PgItemStore};
