//! Error handling utilities for repositories

use blog_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_write_error(e)
}

/// Map a failed write, turning foreign key violations into `InvalidReference`
pub fn map_write_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            let constraint = db_err.constraint().unwrap_or("foreign key");
            return DomainError::InvalidReference(constraint.to_string());
        }
    }
    map_db_error(e)
}
