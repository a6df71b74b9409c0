//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field names are camelCase on the wire.

use blog_core::entities::{is_hex_color, PostStatus};
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    if is_hex_color(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("hex_color");
        err.message = Some("Color must be a #RRGGBB hex value".into());
        Err(err)
    }
}

// ============================================================================
// User Requests
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    #[validate(length(max = 1000, message = "Bio must be at most 1000 characters"))]
    pub bio: Option<String>,

    #[validate(url(message = "Invalid avatar URL"))]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub is_admin: bool,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 200, message = "Slug must be 1-200 characters"))]
    pub slug: String,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: Option<String>,

    pub excerpt: Option<String>,

    /// Defaults to DRAFT
    pub status: Option<PostStatus>,

    pub author_id: Uuid,

    #[validate(range(min = 0, message = "View count must not be negative"))]
    pub view_count: Option<i32>,

    #[validate(range(min = 0, message = "Like count must not be negative"))]
    pub like_count: Option<i32>,
}

/// Change post status request
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct UpdatePostStatusRequest {
    pub status: PostStatus,
}

// ============================================================================
// Tag Requests
// ============================================================================

/// Create tag request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTagRequest {
    #[validate(length(min = 1, max = 50, message = "Tag name must be 1-50 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Tag slug must be 1-50 characters"))]
    pub slug: String,

    pub description: Option<String>,

    /// `#RRGGBB`; a neutral grey is used when omitted
    #[validate(custom(function = "validate_hex_color"))]
    pub color: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request; the post comes from the route
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 5000, message = "Comment must be 1-5000 characters"))]
    pub content: String,

    pub author_id: Uuid,

    /// Comment being replied to, on the same post
    pub parent_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_request(email: &str, username: &str) -> CreateUserRequest {
        serde_json::from_value(json!({ "email": email, "username": username })).unwrap()
    }

    #[test]
    fn test_user_request_defaults() {
        let request = user_request("a@example.com", "alice");
        assert!(!request.is_admin);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_user_request_rejects_short_username() {
        assert!(user_request("a@example.com", "al").validate().is_err());
    }

    #[test]
    fn test_user_request_rejects_bad_email() {
        assert!(user_request("not-an-email", "alice").validate().is_err());
    }

    #[test]
    fn test_user_request_rejects_bad_avatar() {
        let request: CreateUserRequest = serde_json::from_value(json!({
            "email": "a@example.com",
            "username": "alice",
            "avatarUrl": "not a url",
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_post_request_camel_case() {
        let author = Uuid::new_v4();
        let request: CreatePostRequest = serde_json::from_value(json!({
            "title": "Hello",
            "slug": "hello",
            "authorId": author,
            "status": "PUBLISHED",
            "viewCount": 3,
        }))
        .unwrap();
        assert_eq!(request.author_id, author);
        assert_eq!(request.status, Some(PostStatus::Published));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_post_request_rejects_negative_counter() {
        let request: CreatePostRequest = serde_json::from_value(json!({
            "title": "Hello",
            "slug": "hello",
            "authorId": Uuid::new_v4(),
            "likeCount": -1,
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_tag_color_validation() {
        let ok = CreateTagRequest {
            name: "Rust".to_string(),
            slug: "rust".to_string(),
            description: None,
            color: Some("#B7410E".to_string()),
        };
        assert!(ok.validate().is_ok());

        let bad = CreateTagRequest {
            color: Some("rust-orange".to_string()),
            ..ok.clone()
        };
        assert!(bad.validate().is_err());

        let none = CreateTagRequest { color: None, ..ok };
        assert!(none.validate().is_ok());
    }

    #[test]
    fn test_comment_request_rejects_empty_content() {
        let request = CreateCommentRequest {
            content: String::new(),
            author_id: Uuid::new_v4(),
            parent_id: None,
        };
        assert!(request.validate().is_err());
    }
}
