//! Command implementations for the music-info CLI

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use anyhow::{Context, Result};
use music_info_server::Config;

/// Load `.env` (if present) and the environment configuration.
///
/// Missing database variables are fatal for every command.
pub(crate) fn load_config() -> Result<Config> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => return Err(e).context("Failed to read .env file"),
    }

    let config = Config::from_env().context("Invalid configuration")?;
    tracing::debug!(?config, "Configuration loaded");
    Ok(config)
}
