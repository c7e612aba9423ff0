//! music-info CLI - song info record service
//!
//! Entry point for the `music-info` binary:
//! - `serve`: run the HTTP API (create, read, update, delete, list song info)
//! - `migrate`: create the database schema and exit
//!
//! Configuration comes from environment variables (or a `.env` file);
//! see `music_info_server::config`.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "music-info",
    author,
    version,
    about = "HTTP service for song info records (group, song, release date, lyrics, link)"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the database schema and exit
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate => commands::run_migrate().await?,
    }
    Ok(())
}
