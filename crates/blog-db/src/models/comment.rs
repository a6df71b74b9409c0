//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: Uuid,
    pub content: String,
    pub author_id: Uuid,
    pub post_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment row joined with author columns
#[derive(Debug, Clone, FromRow)]
pub struct CommentWithAuthorModel {
    #[sqlx(flatten)]
    pub comment: CommentModel,
    pub author_username: String,
    pub author_first_name: Option<String>,
    pub author_last_name: Option<String>,
}
