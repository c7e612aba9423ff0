//! Song info endpoints
//!
//! | Method | Path               | Success            |
//! |--------|--------------------|--------------------|
//! | POST   | /songs/add         | 201 + full record  |
//! | GET    | /songs/info        | 200 + public info  |
//! | PUT    | /songs/info/update | 200 + public info  |
//! | GET    | /songs             | 200 + array        |
//! | DELETE | /songs/info/delete | 204                |

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::{Song, SongRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidListParams, ValidSongKey};
use crate::http::server::AppState;
use crate::models::{NewSong, SongPatch};

/// Full record, returned on create
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongResponse {
    pub id: i64,
    pub group: String,
    pub song: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Song> for SongResponse {
    fn from(s: Song) -> Self {
        Self {
            id: s.id,
            group: s.group,
            song: s.song,
            release_date: s.release_date,
            text: s.text,
            link: s.link,
            created_at: s.created_at.to_rfc3339(),
            updated_at: s.updated_at.to_rfc3339(),
        }
    }
}

/// Public fields of a record
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongInfoResponse {
    pub group: String,
    pub song: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
}

impl From<Song> for SongInfoResponse {
    fn from(s: Song) -> Self {
        Self {
            group: s.group,
            song: s.song,
            release_date: s.release_date,
            text: s.text,
            link: s.link,
        }
    }
}

/// POST /songs/add - create a record
async fn create_song(
    State(state): State<Arc<AppState>>,
    ValidJson(new): ValidJson<NewSong>,
) -> Result<(StatusCode, Json<SongResponse>), ApiError> {
    new.validate()?;

    let song = SongRepo::new(&state.pool).create(&new).await?;
    tracing::info!(id = song.id, group = %song.group, song = %song.song, "Song created");

    Ok((StatusCode::CREATED, Json(SongResponse::from(song))))
}

/// GET /songs/info?group=&song= - get a single record
async fn get_song(
    State(state): State<Arc<AppState>>,
    ValidSongKey(key): ValidSongKey,
) -> Result<Json<SongInfoResponse>, ApiError> {
    let song = SongRepo::new(&state.pool).get(&key).await?;
    tracing::debug!(group = %key.group(), song = %key.song(), "Song found");

    Ok(Json(SongInfoResponse::from(song)))
}

/// PUT /songs/info/update?group=&song= - overwrite provided fields
async fn update_song(
    State(state): State<Arc<AppState>>,
    ValidSongKey(key): ValidSongKey,
    ValidJson(patch): ValidJson<SongPatch>,
) -> Result<Json<SongInfoResponse>, ApiError> {
    if patch.is_empty() {
        tracing::debug!(group = %key.group(), song = %key.song(), "Empty patch, touching updated_at only");
    }

    let song = SongRepo::new(&state.pool).update(&key, &patch).await?;
    tracing::info!(group = %key.group(), song = %key.song(), "Song updated");

    Ok(Json(SongInfoResponse::from(song)))
}

/// GET /songs?group=&page=&limit= - list with substring filter
///
/// `limit` is capped at 100; junk or non-positive `page`/`limit` fall back
/// to 1 and 10.
async fn list_songs(
    State(state): State<Arc<AppState>>,
    ValidListParams(params): ValidListParams,
) -> Result<Json<Vec<SongInfoResponse>>, ApiError> {
    let page = params.pagination();
    let songs = SongRepo::new(&state.pool)
        .list(params.group_filter(), page)
        .await?;
    tracing::debug!(count = songs.len(), page = page.page, limit = page.limit, "Songs listed");

    Ok(Json(songs.into_iter().map(SongInfoResponse::from).collect()))
}

/// DELETE /songs/info/delete?group=&song= - soft delete
async fn delete_song(
    State(state): State<Arc<AppState>>,
    ValidSongKey(key): ValidSongKey,
) -> Result<StatusCode, ApiError> {
    let removed = SongRepo::new(&state.pool).delete(&key).await?;
    tracing::info!(group = %key.group(), song = %key.song(), count = removed, "Song deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Song routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/songs", get(list_songs))
        .route("/songs/add", post(create_song))
        .route("/songs/info", get(get_song))
        .route("/songs/info/update", put(update_song))
        .route("/songs/info/delete", delete(delete_song))
}
