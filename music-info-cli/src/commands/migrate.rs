//! Schema migration command

use anyhow::{Context, Result};

use music_info_server::db::migrations;

/// Create the song info table and indexes, then exit.
pub async fn run_migrate() -> Result<()> {
    let config = super::load_config()?;
    let pool = super::serve::connect(&config).await?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    pool.close().await;
    Ok(())
}
