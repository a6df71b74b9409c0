//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` with camelCase field names.
//! Relation counts are nested under `_count`.

use blog_core::entities::PostStatus;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// User Responses
// ============================================================================

/// Full user record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
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

/// Posts and comments owned by a user
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UserActivityCount {
    pub posts: i64,
    pub comments: i64,
}

/// User in a listing, with activity counts
#[derive(Debug, Clone, Serialize)]
pub struct UserListItemResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    #[serde(rename = "_count")]
    pub count: UserActivityCount,
}

/// Post fields shown in a user's post list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummaryResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
}

/// Single user with their posts and activity counts
#[derive(Debug, Clone, Serialize)]
pub struct UserDetailResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub posts: Vec<PostSummaryResponse>,
    #[serde(rename = "_count")]
    pub count: UserActivityCount,
}

/// Author fields embedded in posts and comments
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: Uuid,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Author fields embedded in a single post view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

// ============================================================================
// Post Responses
// ============================================================================

/// Full post record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub status: PostStatus,
    pub author_id: Uuid,
    pub view_count: i32,
    pub like_count: i32,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CommentCount {
    pub comments: i64,
}

/// Post in a listing, with author, tags and comment count
#[derive(Debug, Clone, Serialize)]
pub struct PostListItemResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub author: AuthorResponse,
    pub tags: Vec<TagResponse>,
    #[serde(rename = "_count")]
    pub count: CommentCount,
}

/// Single post with author profile, tags and the comment thread
#[derive(Debug, Clone, Serialize)]
pub struct PostDetailResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub author: AuthorProfileResponse,
    pub tags: Vec<TagResponse>,
    pub comments: Vec<CommentThreadResponse>,
}

// ============================================================================
// Tag Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PostCount {
    pub posts: i64,
}

/// Tag in a listing, with the number of posts it labels
#[derive(Debug, Clone, Serialize)]
pub struct TagListItemResponse {
    #[serde(flatten)]
    pub tag: TagResponse,
    #[serde(rename = "_count")]
    pub count: PostCount,
}

/// Outcome of linking or unlinking a tag
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkTagResponse {
    pub post_id: Uuid,
    pub tag_id: Uuid,
    /// Whether a row was inserted (link) or removed (unlink)
    pub changed: bool,
}

// ============================================================================
// Comment Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub content: String,
    pub author_id: Uuid,
    pub post_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment with its author and nested replies
#[derive(Debug, Clone, Serialize)]
pub struct CommentThreadResponse {
    #[serde(flatten)]
    pub comment: CommentResponse,
    pub author: AuthorResponse,
    pub replies: Vec<CommentThreadResponse>,
}

// ============================================================================
// Stats
// ============================================================================

/// Aggregate row counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub users: i64,
    pub posts: i64,
    pub published_posts: i64,
    pub draft_posts: i64,
    pub comments: i64,
    pub tags: i64,
}
