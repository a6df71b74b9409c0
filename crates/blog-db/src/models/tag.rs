//! Tag and post_tags database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for tags table
#[derive(Debug, Clone, FromRow)]
pub struct TagModel {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// Tag row with the number of linked posts
#[derive(Debug, Clone, FromRow)]
pub struct TagWithCountModel {
    #[sqlx(flatten)]
    pub tag: TagModel,
    pub post_count: i64,
}

/// Tag row joined through post_tags, keyed by the linked post
#[derive(Debug, Clone, FromRow)]
pub struct TaggedPostModel {
    pub post_id: Uuid,
    #[sqlx(flatten)]
    pub tag: TagModel,
}
