//! Post entity - represents a blog article

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::AuthorSummary;

/// Publication status of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    /// All statuses, in lifecycle order
    pub const ALL: [PostStatus; 3] = [Self::Draft, Self::Published, Self::Archived];

    /// Database and wire representation
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Archived => "ARCHIVED",
        }
    }

    #[inline]
    #[must_use]
    pub fn is_published(self) -> bool {
        matches!(self, Self::Published)
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown post status: {0}")]
pub struct PostStatusParseError(pub String);

impl FromStr for PostStatus {
    type Err = PostStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DRAFT" => Ok(Self::Draft),
            "PUBLISHED" => Ok(Self::Published),
            "ARCHIVED" => Ok(Self::Archived),
            _ => Err(PostStatusParseError(s.to_string())),
        }
    }
}

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
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

impl Post {
    /// Create a new Post.
    ///
    /// `published_at` is stamped with the creation time when the post
    /// starts out PUBLISHED and left empty otherwise.
    pub fn new(title: String, slug: String, author_id: Uuid, status: PostStatus) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            slug,
            content: None,
            excerpt: None,
            status,
            author_id,
            view_count: 0,
            like_count: 0,
            published_at: status.is_published().then_some(now),
            created_at: now,
            updated_at: now,
        }
    }

    /// Change the status, stamping `published_at` on the first publish.
    ///
    /// Returns true if the status actually changed.
    pub fn set_status(&mut self, status: PostStatus) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        if status.is_published() && self.published_at.is_none() {
            self.published_at = Some(Utc::now());
        }
        self.updated_at = Utc::now();
        true
    }
}

/// Projection of a post used in a user's post list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            status: post.status,
            created_at: post.created_at,
        }
    }
}

/// Post joined with its author and comment count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostListing {
    pub post: Post,
    pub author: AuthorSummary,
    pub comment_count: i64,
}
