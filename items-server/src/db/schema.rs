//! Schema initialization for the items table

use super::{ConnectionProvider, DbError};

/// DDL for the items table. `IF NOT EXISTS` keeps re-runs harmless.
pub const CREATE_ITEMS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL
    )
"#;

/// Ensure the `items` table exists. Leaves existing rows untouched.
pub async fn init(provider: &ConnectionProvider) -> Result<(), DbError> {
    tracing::info!("Ensuring items table exists...");

    let mut tx = provider.begin().await?;
    sqlx::query(CREATE_ITEMS_TABLE).execute(&mut *tx).await?;
    tx.commit().await?;

    Ok(())
}
