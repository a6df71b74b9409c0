//! User entity - represents a blog account

use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::ValidateEmail;

use crate::error::DomainError;

/// User entity representing a blog author or commenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
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

impl User {
    /// Create a new User with required fields
    pub fn new(email: String, username: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            username,
            first_name: None,
            last_name: None,
            bio: None,
            avatar_url: None,
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check the identity fields every stored user must satisfy.
    ///
    /// Only emptiness is checked for the username; the minimum length
    /// is enforced by the HTTP request validator.
    pub fn validate_identity(email: &str, username: &str) -> Result<(), DomainError> {
        if !email.validate_email() {
            return Err(DomainError::InvalidEmail);
        }
        if username.trim().is_empty() {
            return Err(DomainError::InvalidUsername(
                "Username must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Aggregate counts of rows a user owns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserActivity {
    pub posts: i64,
    pub comments: i64,
}

/// User row annotated with its activity counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithActivity {
    pub user: User,
    pub activity: UserActivity,
}

/// Author fields embedded in post and comment listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSummary {
    pub id: Uuid,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<&User> for AuthorSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}
