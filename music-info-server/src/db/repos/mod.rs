//! Repository implementations for database access

pub mod songs;

pub use songs::{Song, SongRepo};

use crate::models::SongKey;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("song info not found: group={group}, song={song}")]
    NotFound { group: String, song: String },
}

impl DbError {
    pub(crate) fn not_found(key: &SongKey) -> Self {
        Self::NotFound {
            group: key.group().to_owned(),
            song: key.song().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_key() {
        let key = SongKey::new("Muse", "Uprising").unwrap();
        assert_eq!(
            DbError::not_found(&key).to_string(),
            "song info not found: group=Muse, song=Uprising"
        );
    }
}
