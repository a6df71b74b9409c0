//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User row with aggregate post and comment counts
#[derive(Debug, Clone, FromRow)]
pub struct UserWithActivityModel {
    #[sqlx(flatten)]
    pub user: UserModel,
    pub post_count: i64,
    pub comment_count: i64,
}
