//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::ApiError;
use crate::models::{ListParams, SongKey};

/// JSON body whose rejections render as `400 {"error": "invalid JSON: ..."}`
///
/// The body is decoded whatever the `Content-Type` header says.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidJson {
                reason: rejection.body_text(),
            })?;
        let value = serde_json::from_slice(&bytes).map_err(|e| ApiError::InvalidJson {
            reason: e.to_string(),
        })?;
        Ok(Self(value))
    }
}

#[derive(Deserialize)]
struct KeyParams {
    #[serde(default)]
    group: String,
    #[serde(default)]
    song: String,
}

/// Extract and validate `?group=...&song=...`
pub struct ValidSongKey(pub SongKey);

impl<S> FromRequestParts<S> for ValidSongKey
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<KeyParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::InvalidQuery {
                reason: rejection.body_text(),
            })?;

        let key = SongKey::new(&params.group, &params.song)?;
        Ok(Self(key))
    }
}

/// Lenient `GET /songs` query: repeated keys keep the first value and an
/// unparseable query string falls back to the defaults.
pub struct ValidListParams(pub ListParams);

impl<S> FromRequestParts<S> for ValidListParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => ListParams::from_pairs(pairs),
            Err(rejection) => {
                tracing::warn!("Ignoring list query: {}", rejection.body_text());
                ListParams::default()
            }
        };
        Ok(Self(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http;
    use axum::http::header::CONTENT_TYPE;
    use serde_json::Value;

    fn parts(uri: &str) -> Parts {
        let (parts, _) = http::Request::builder().uri(uri).body(()).unwrap().into_parts();
        parts
    }

    #[tokio::test]
    async fn json_body_without_content_type() {
        let req = http::Request::builder()
            .method("POST")
            .uri("/songs/add")
            .body(Body::from(r#"{"group":"Muse"}"#))
            .unwrap();
        let ValidJson(value) = ValidJson::<Value>::from_request(req, &()).await.unwrap();
        assert_eq!(value["group"], "Muse");
    }

    #[tokio::test]
    async fn malformed_body_is_invalid_json() {
        let req = http::Request::builder()
            .method("POST")
            .uri("/songs/add")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let err = ValidJson::<Value>::from_request(req, &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ApiError::InvalidJson { .. }));
    }

    #[tokio::test]
    async fn duplicate_key_field_is_invalid_query() {
        let mut parts = parts("/songs/info?group=Muse&group=Queen&song=X");
        let err = ValidSongKey::from_request_parts(&mut parts, &())
            .await
            .err()
            .unwrap();
        match err {
            ApiError::InvalidQuery { reason } => assert!(reason.contains("duplicate field")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn blank_key_is_validation_error() {
        let mut parts = parts("/songs/info?group=Muse");
        let err = ValidSongKey::from_request_parts(&mut parts, &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn list_params_keep_first_repeated_value() {
        let mut parts = parts("/songs?page=2&page=5&limit=3&group=Mu");
        let ValidListParams(params) = ValidListParams::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        let page = params.pagination();
        assert_eq!(page.page, 2);
        assert_eq!(page.limit(), 3);
        assert_eq!(params.group_filter(), "Mu");
    }
}
