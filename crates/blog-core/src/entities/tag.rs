//! Tag entity and the post/tag join row

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Default display color for tags created without one
pub const DEFAULT_TAG_COLOR: &str = "#6B7280";

/// Tag entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl Tag {
    /// Create a new Tag
    pub fn new(name: String, slug: String, color: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            slug,
            description: None,
            color: color.unwrap_or_else(|| DEFAULT_TAG_COLOR.to_string()),
            created_at: Utc::now(),
        }
    }
}

/// Check a `#RRGGBB` display color
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Tag annotated with the number of posts it labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagWithCount {
    pub tag: Tag,
    pub post_count: i64,
}

/// Join row linking a post to a tag; a pair appears at most once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostTag {
    pub post_id: Uuid,
    pub tag_id: Uuid,
}

impl PostTag {
    pub fn new(post_id: Uuid, tag_id: Uuid) -> Self {
        Self { post_id, tag_id }
    }
}
