//! Test fixtures and data generators
//!
//! Provides reusable request bodies and typed views of API responses.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Response envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub count: Option<usize>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap `data` of a successful envelope
    pub fn into_data(self) -> T {
        assert!(self.success, "envelope reported failure: {:?}", self.error);
        self.data.expect("successful envelope without data")
    }
}

/// Create user request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub email: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl CreateUser {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("user{suffix}@example.com"),
            username: format!("user{suffix}"),
            first_name: Some("Test".to_string()),
            bio: None,
        }
    }
}

/// Create post request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub author_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CreatePost {
    pub fn unique(author_id: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Post {suffix}"),
            slug: format!("post-{suffix}"),
            content: "Body".to_string(),
            author_id: author_id.to_string(),
            status: None,
        }
    }

    #[must_use]
    pub fn published(mut self) -> Self {
        self.status = Some("PUBLISHED".to_string());
        self
    }
}

/// Create tag request
#[derive(Debug, Clone, Serialize)]
pub struct CreateTag {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CreateTag {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Tag {suffix}"),
            slug: format!("tag-{suffix}"),
            color: Some("#3B82F6".to_string()),
        }
    }
}

/// Create comment request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    pub content: String,
    pub author_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// User as returned by the API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub is_admin: bool,
}

/// Post as returned by the API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub slug: String,
    pub status: String,
    pub view_count: i32,
    pub like_count: i32,
    pub published_at: Option<String>,
}

/// Tag as returned by the API
#[derive(Debug, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// Link/unlink result
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResult {
    pub changed: bool,
}
