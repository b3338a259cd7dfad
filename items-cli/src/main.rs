//! items CLI - runs the items HTTP service
//!
//! - `serve`: initialize the schema, then serve `/health` and `/items`
//! - `init-db`: initialize the schema only

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::init_db::{run_init_db, InitDbArgs};
use commands::serve::{run_serve, ServeArgs};
use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "items",
    author,
    version,
    about = "Minimal HTTP service for creating and listing items"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Create the items table if it does not exist
    InitDb(InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present; missing file is not an error
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => run_serve(args).await,
        Commands::InitDb(args) => run_init_db(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["items", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.bind.port(), 5000);
        assert!(!args.memory);
    }

    #[test]
    fn db_flags_map_to_config() {
        let cli = Cli::try_parse_from([
            "items",
            "init-db",
            "--database-url",
            "postgres://u:p@h:1/d",
            "--db-host",
            "pg",
            "--db-port",
            "6000",
        ])
        .unwrap();
        let Commands::InitDb(args) = cli.command else {
            panic!("expected init-db");
        };
        let config = items_server::DbConfig::from(args.db);
        assert_eq!(config.url.as_deref(), Some("postgres://u:p@h:1/d"));
        assert_eq!(config.host, "pg");
        assert_eq!(config.port, 6000);
    }
}
