//! HTTP server command
//!
//! Loads configuration, prepares the schema and serves the song info API.

use anyhow::{Context, Result};
use clap::Parser;

use music_info_server::db::{create_pool_with_options, migrations, PgPool};
use music_info_server::http::{run_server, ServerConfig};
use music_info_server::Config;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on (overrides PORT)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Skip schema migrations on startup
    #[arg(long)]
    pub skip_migrations: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = super::load_config()?;
    if let Some(port) = args.port {
        config = config.with_port(port);
    }

    let pool = connect(&config).await?;

    if !args.skip_migrations {
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    tracing::info!("Starting music-info server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(
        pool,
        ServerConfig {
            bind_addr: config.bind_addr,
        },
    )
    .await
    .context("Server error")?;

    Ok(())
}

pub(crate) async fn connect(config: &Config) -> Result<PgPool> {
    let db = &config.database;
    tracing::info!(
        host = %db.host,
        port = db.port,
        database = %db.name,
        "Connecting to database"
    );

    create_pool_with_options(db.connect_options(), db.max_connections)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {} at {}:{}",
                db.name, db.host, db.port
            )
        })
}
