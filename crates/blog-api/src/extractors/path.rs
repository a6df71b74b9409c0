//! Path parameter extractors
//!
//! Ids in paths are UUIDs; anything else is rejected with 400 before a
//! handler runs.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::response::ApiError;

fn parse_id(raw: &str, name: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {name} format")))
}

/// Single `:id` segment
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(IdPath(parse_id(&raw, "id")?))
    }
}

/// `/posts/:id/tags/:tag_id`
#[derive(Debug, Clone, Copy)]
pub struct PostTagPath {
    pub post_id: Uuid,
    pub tag_id: Uuid,
}

#[async_trait]
impl<S> FromRequestParts<S> for PostTagPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((post_id, tag_id)) = Path::<(String, String)>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(PostTagPath {
            post_id: parse_id(&post_id, "id")?,
            tag_id: parse_id(&tag_id, "tag_id")?,
        })
    }
}
