//! Song info repository
//!
//! One statement per operation against `music_infos`:
//! - reads and writes only see live rows (`deleted_at IS NULL`)
//! - delete is a soft delete
//! - `(group, song)` is not unique, so update/delete touch every match

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::{NewSong, Pagination, SongKey, SongPatch};

/// Song info record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Song {
    pub id: i64,
    pub group: String,
    pub song: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Song info repository
pub struct SongRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SongRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new record. Call `NewSong::validate` first.
    pub async fn create(&self, new: &NewSong) -> Result<Song, DbError> {
        let song: Song = sqlx::query_as(
            r#"
            INSERT INTO music_infos ("group", song, release_date, text, link)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, "group", song, release_date, text, link, created_at, updated_at
            "#,
        )
        .bind(&new.group)
        .bind(&new.song)
        .bind(&new.release_date)
        .bind(&new.text)
        .bind(&new.link)
        .fetch_one(self.pool)
        .await?;

        Ok(song)
    }

    /// Get the first record (lowest id) matching the key.
    pub async fn get(&self, key: &SongKey) -> Result<Song, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, "group", song, release_date, text, link, created_at, updated_at
            FROM music_infos
            WHERE "group" = $1 AND song = $2 AND deleted_at IS NULL
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(key.group())
        .bind(key.song())
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(key))
    }

    /// Overwrite the provided fields of every record matching the key.
    ///
    /// Returns the updated record with the lowest id, or NotFound when
    /// nothing matched.
    pub async fn update(&self, key: &SongKey, patch: &SongPatch) -> Result<Song, DbError> {
        let rows: Vec<Song> = sqlx::query_as(
            r#"
            UPDATE music_infos
            SET "group" = COALESCE($3, "group"),
                song = COALESCE($4, song),
                release_date = COALESCE($5, release_date),
                text = COALESCE($6, text),
                link = COALESCE($7, link),
                updated_at = NOW()
            WHERE "group" = $1 AND song = $2 AND deleted_at IS NULL
            RETURNING id, "group", song, release_date, text, link, created_at, updated_at
            "#,
        )
        .bind(key.group())
        .bind(key.song())
        .bind(patch.group())
        .bind(patch.song())
        .bind(patch.release_date())
        .bind(patch.text())
        .bind(patch.link())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter()
            .min_by_key(|s| s.id)
            .ok_or_else(|| DbError::not_found(key))
    }

    /// Soft delete every record matching the key.
    ///
    /// Returns the number of records removed; zero is reported as NotFound.
    pub async fn delete(&self, key: &SongKey) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE music_infos
            SET deleted_at = NOW()
            WHERE "group" = $1 AND song = $2 AND deleted_at IS NULL
            "#,
        )
        .bind(key.group())
        .bind(key.song())
        .execute(self.pool)
        .await?;

        match result.rows_affected() {
            0 => Err(DbError::not_found(key)),
            n => Ok(n),
        }
    }

    /// List records whose group contains `group_filter`, one page at a time.
    pub async fn list(&self, group_filter: &str, page: Pagination) -> Result<Vec<Song>, DbError> {
        let pattern = format!("%{}%", escape_like(group_filter));

        let songs: Vec<Song> = sqlx::query_as(
            r#"
            SELECT id, "group", song, release_date, text, link, created_at, updated_at
            FROM music_infos
            WHERE "group" LIKE $1 ESCAPE '\' AND deleted_at IS NULL
            ORDER BY "group", song, release_date, text, link
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(pattern)
        .bind(i64::from(page.limit()))
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(self.pool)
        .await?;

        Ok(songs)
    }
}

/// Escape LIKE wildcards so the filter matches literally.
fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
