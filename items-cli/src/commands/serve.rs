//! HTTP server command
//!
//! Connects to the store, ensures the schema, then serves until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use items_server::http::{run_server, AppState, ServerConfig};
use items_server::{ConnectionProvider, DbConfig, ItemStore, MemoryItemStore, PgItemStore};

use super::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "ITEMS_BIND", default_value = "0.0.0.0:5000")]
    pub bind: SocketAddr,

    /// Keep items in memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub memory: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn ItemStore> = if args.memory {
        tracing::warn!("Using in-memory store - items will not persist");
        Arc::new(MemoryItemStore::new())
    } else {
        let config = DbConfig::from(args.db);
        tracing::info!("Connecting to {}", config.display_target());

        let provider = ConnectionProvider::connect(&config)
            .await
            .context("Failed to connect to database")?;
        Arc::new(PgItemStore::new(provider))
    };

    // Schema must exist before the listener accepts traffic
    store
        .init_schema()
        .await
        .context("Failed to initialize schema")?;

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown)
    run_server(AppState::new(store), config)
        .await
        .context("Server error")?;

    Ok(())
}
