//! Comment entity - threaded discussion attached to a post

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::user::AuthorSummary;

/// Comment entity
///
/// Top-level comments have no parent. A reply points at another comment
/// on the same post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub author_id: Uuid,
    pub post_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new top-level comment
    pub fn new(content: String, author_id: Uuid, post_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            content,
            author_id,
            post_id,
            parent_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a reply to `parent`, inheriting its post
    pub fn reply_to(parent: &Comment, content: String, author_id: Uuid) -> Self {
        let mut reply = Self::new(content, author_id, parent.post_id);
        reply.parent_id = Some(parent.id);
        reply
    }
}

/// Comment joined with its author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: AuthorSummary,
}
