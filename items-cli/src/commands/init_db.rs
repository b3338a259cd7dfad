//! Create the items table and exit

use anyhow::{Context, Result};
use clap::Parser;

use items_server::db::schema;
use items_server::{ConnectionProvider, DbConfig};

use super::DbArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let config = DbConfig::from(args.db);
    tracing::info!("Connecting to {}", config.display_target());

    let provider = ConnectionProvider::connect(&config)
        .await
        .context("Failed to connect to database")?;

    schema::init(&provider)
        .await
        .context("Failed to initialize schema")?;

    provider.close().await;
    tracing::info!("Schema ready");
    Ok(())
}
