//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    /// Post status: 'DRAFT', 'PUBLISHED', 'ARCHIVED' (stored as PostgreSQL enum)
    pub status: String,
    pub author_id: Uuid,
    pub view_count: i32,
    pub like_count: i32,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post joined with author columns and comment count
#[derive(Debug, Clone, FromRow)]
pub struct PostListingModel {
    #[sqlx(flatten)]
    pub post: PostModel,
    pub author_username: String,
    pub author_first_name: Option<String>,
    pub author_last_name: Option<String>,
    pub comment_count: i64,
}

/// Reduced post projection for a user's post list
#[derive(Debug, Clone, FromRow)]
pub struct PostSummaryModel {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
