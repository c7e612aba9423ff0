//! Song info input types
//!
//! Request bodies deserialize into these types; `NewSong::validate` is the
//! single check applied before anything is written.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Create request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSong {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub song: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub link: String,
}

impl NewSong {
    /// Check that group, song and text are present.
    ///
    /// Whitespace-only values count as blank. Fields are checked in that
    /// order and the first blank one is reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("group", &self.group),
            ("song", &self.song),
            ("text", &self.text),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::Empty { field });
            }
        }
        Ok(())
    }
}

/// Update request body
///
/// Only fields with a non-blank value overwrite the stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongPatch {
    pub group: Option<String>,
    pub song: Option<String>,
    pub release_date: Option<String>,
    pub text: Option<String>,
    pub link: Option<String>,
}

impl SongPatch {
    pub fn group(&self) -> Option<&str> {
        non_blank(&self.group)
    }

    pub fn song(&self) -> Option<&str> {
        non_blank(&self.song)
    }

    pub fn release_date(&self) -> Option<&str> {
        non_blank(&self.release_date)
    }

    pub fn text(&self) -> Option<&str> {
        non_blank(&self.text)
    }

    pub fn link(&self) -> Option<&str> {
        non_blank(&self.link)
    }

    /// True when applying the patch would not overwrite any field.
    ///
    /// An empty patch is still applied: it only bumps `updated_at`.
    pub fn is_empty(&self) -> bool {
        self.group().is_none()
            && self.song().is_none()
            && self.release_date().is_none()
            && self.text().is_none()
            && self.link().is_none()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Lookup key for point operations.
///
/// `(group, song)` is not unique in storage; reads take the first match and
/// writes touch every match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SongKey {
    group: String,
    song: String,
}

impl SongKey {
    pub fn new(group: &str, song: &str) -> Result<Self, ValidationError> {
        if group.trim().is_empty() {
            return Err(ValidationError::Empty { field: "group" });
        }
        if song.trim().is_empty() {
            return Err(ValidationError::Empty { field: "song" });
        }
        Ok(Self {
            group: group.to_owned(),
            song: song.to_owned(),
        })
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn song(&self) -> &str {
        &self.song
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn muse() -> NewSong {
        NewSong {
            group: "Muse".into(),
            song: "Supermassive Black Hole".into(),
            release_date: "16.07.2006".into(),
            text: "Ooh baby, don't you know I suffer?\nOoh baby, can you hear me moan?".into(),
            link: "https://www.youtube.com/watch?v=Xsp3_a-PMTw".into(),
        }
    }

    #[test]
    fn complete_song_is_valid() {
        assert!(muse().validate().is_ok());
    }

    #[test]
    fn optional_fields_may_be_blank() {
        let song = NewSong {
            release_date: String::new(),
            link: String::new(),
            ..muse()
        };
        assert!(song.validate().is_ok());
    }

    #[test]
    fn rejects_blank_required_fields() {
        let err = NewSong { group: String::new(), ..muse() }.validate().unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "group" });

        let err = NewSong { song: "   ".into(), ..muse() }.validate().unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "song" });

        let err = NewSong { text: "\n\t".into(), ..muse() }.validate().unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "text" });
    }

    #[test]
    fn reports_first_blank_field() {
        let err = NewSong::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "group cannot be empty");
    }

    #[test]
    fn deserializes_camel_case_with_missing_optionals() {
        let song: NewSong =
            serde_json::from_str(r#"{"group":"Muse","song":"Uprising","text":"la"}"#).unwrap();
        assert_eq!(song.group, "Muse");
        assert_eq!(song.release_date, "");
        assert_eq!(song.link, "");

        let song: NewSong = serde_json::from_str(r#"{"releaseDate":"2009"}"#).unwrap();
        assert_eq!(song.release_date, "2009");
    }

    #[test]
    fn patch_ignores_blank_fields() {
        let patch: SongPatch =
            serde_json::from_str(r#"{"text":"new words","link":"  ","group":""}"#).unwrap();
        assert_eq!(patch.text(), Some("new words"));
        assert_eq!(patch.link(), None);
        assert_eq!(patch.group(), None);
        assert!(!patch.is_empty());
    }

    #[test]
    fn blank_only_patch_is_empty() {
        let patch: SongPatch = serde_json::from_str(r#"{"song":" "}"#).unwrap();
        assert!(patch.is_empty());
        assert_eq!(patch.song(), None);
        assert!(SongPatch::default().is_empty());
    }

    #[test]
    fn key_requires_both_parts() {
        assert!(SongKey::new("Muse", "Uprising").is_ok());
        assert_eq!(
            SongKey::new("", "Uprising").unwrap_err(),
            ValidationError::Empty { field: "group" }
        );
        assert_eq!(
            SongKey::new("Muse", " ").unwrap_err(),
            ValidationError::Empty { field: "song" }
        );
    }
}
