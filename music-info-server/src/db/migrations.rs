//! Schema migrations for the song info table

use sqlx::PgPool;

/// Create the `music_infos` table and its indexes if missing.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS music_infos (
            id BIGSERIAL PRIMARY KEY,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            deleted_at TIMESTAMPTZ,
            "group" TEXT NOT NULL,
            song TEXT NOT NULL,
            release_date TEXT NOT NULL DEFAULT '',
            text TEXT NOT NULL,
            link TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_music_infos_deleted_at ON music_infos(deleted_at)",
    )
    .execute(pool)
    .await?;

    // Point lookups. Not UNIQUE: duplicate keys are allowed.
    sqlx::query(
        r#"CREATE INDEX IF NOT EXISTS idx_music_infos_group_song ON music_infos("group", song) WHERE deleted_at IS NULL"#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
