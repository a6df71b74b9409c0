//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Post not found: {0}")]
    PostNotFound(Uuid),

    #[error("Tag not found: {0}")]
    TagNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Parent comment belongs to a different post")]
    ParentPostMismatch,

    /// Carries the violated constraint name, which is never shown to clients
    #[error("Referenced row does not exist: {0}")]
    InvalidReference(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email or username already exists")]
    UserAlreadyExists,

    #[error("Post slug already exists")]
    PostSlugAlreadyExists,

    #[error("Tag slug already exists")]
    TagSlugAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::TagNotFound(_) => "UNKNOWN_TAG",

            // Validation
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::ParentPostMismatch => "PARENT_POST_MISMATCH",
            Self::InvalidReference(_) => "INVALID_REFERENCE",

            // Conflict
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::PostSlugAlreadyExists => "POST_SLUG_ALREADY_EXISTS",
            Self::TagSlugAlreadyExists => "TAG_SLUG_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::PostNotFound(_) | Self::TagNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidEmail
                | Self::InvalidUsername(_)
                | Self::ParentPostMismatch
                | Self::InvalidReference(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UserAlreadyExists | Self::PostSlugAlreadyExists | Self::TagSlugAlreadyExists
        )
    }

    /// Name of the missing resource, for not-found errors
    pub fn resource(&self) -> Option<&'static str> {
        match self {
            Self::UserNotFound(_) => Some("User"),
            Self::PostNotFound(_) => Some("Post"),
            Self::TagNotFound(_) => Some("Tag"),
            _ => None,
        }
    }

    /// Name of the missing referenced resource, for `InvalidReference`
    ///
    /// Derived from the constraint name (`<table>_<column>_fkey`).
    pub fn referenced_resource(&self) -> Option<&'static str> {
        let Self::InvalidReference(constraint) = self else {
            return None;
        };
        let column = constraint.strip_suffix("_fkey").unwrap_or(constraint);
        if column.ends_with("author_id") {
            Some("Author")
        } else if column.ends_with("parent_id") {
            Some("Parent comment")
        } else if column.ends_with("post_id") {
            Some("Post")
        } else if column.ends_with("tag_id") {
            Some("Tag")
        } else {
            None
        }
    }
}
