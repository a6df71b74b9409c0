//! # blog-core
//!
//! Domain layer containing entities, domain errors, and storage traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    AuthorSummary, Comment, CommentWithAuthor, Post, PostListing, PostStatus, PostSummary,
    PostTag, Tag, TagWithCount, User, UserActivity, UserWithActivity,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, PostRepository, RepoResult, Store, TagRepository, UserRepository,
    WipeSummary,
};
