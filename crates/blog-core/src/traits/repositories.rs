//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Absent rows are reported as `Ok(None)`,
//! never as an error.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    Comment, CommentWithAuthor, Post, PostListing, PostStatus, PostSummary, PostTag, Tag,
    TagWithCount, User, UserActivity, UserWithActivity,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// List every user, newest first, with activity counts
    async fn find_all_with_activity(&self) -> RepoResult<Vec<UserWithActivity>>;

    /// Count posts and comments owned by a user
    async fn activity(&self, id: Uuid) -> RepoResult<UserActivity>;

    /// Create a new user
    ///
    /// Fails with `UserAlreadyExists` when the email or username is taken.
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Total number of users
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID without side effects
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>>;

    /// List every post, newest first, with author and comment count
    async fn find_all_listings(&self) -> RepoResult<Vec<PostListing>>;

    /// List summaries of a user's posts, newest first
    async fn find_summaries_by_author(&self, author_id: Uuid) -> RepoResult<Vec<PostSummary>>;

    /// Create a new post
    ///
    /// Fails with `PostSlugAlreadyExists` on a duplicate slug and
    /// `InvalidReference` when the author does not exist.
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Atomically increment the view count and return the updated post
    async fn record_view(&self, id: Uuid) -> RepoResult<Option<Post>>;

    /// Atomically increment the like count and return the updated post
    async fn increment_likes(&self, id: Uuid) -> RepoResult<Option<Post>>;

    /// Persist the status and return the stored post
    ///
    /// An existing `published_at` is never overwritten; `post.published_at`
    /// only fills it when it is still empty.
    async fn update_status(&self, post: &Post) -> RepoResult<Post>;

    /// Total number of posts
    async fn count(&self) -> RepoResult<i64>;

    /// Number of posts with the given status
    async fn count_by_status(&self, status: PostStatus) -> RepoResult<i64>;
}

// ============================================================================
// Tag Repository
// ============================================================================

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Find tag by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Tag>>;

    /// Find tag by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Tag>>;

    /// List every tag ordered by name, with post counts
    async fn find_all_with_counts(&self) -> RepoResult<Vec<TagWithCount>>;

    /// Create a new tag
    ///
    /// Fails with `TagSlugAlreadyExists` on a duplicate slug.
    async fn create(&self, tag: &Tag) -> RepoResult<()>;

    /// Total number of tags
    async fn count(&self) -> RepoResult<i64>;

    /// Link a post to a tag. Returns false if the pair already existed.
    async fn link(&self, link: PostTag) -> RepoResult<bool>;

    /// Remove a link. Returns false if the pair did not exist.
    async fn unlink(&self, link: PostTag) -> RepoResult<bool>;

    /// Tags attached to a post, ordered by name
    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Vec<Tag>>;

    /// Tags attached to each of the given posts as `(post_id, tag)` pairs
    async fn find_by_posts(&self, post_ids: &[Uuid]) -> RepoResult<Vec<(Uuid, Tag)>>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>>;

    /// Every comment on a post with its author, oldest first
    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Vec<CommentWithAuthor>>;

    /// Create a new comment
    ///
    /// Fails with `InvalidReference` when the author, post, or parent
    /// does not exist.
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Total number of comments
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Store
// ============================================================================

/// Rows removed by a full wipe, per table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WipeSummary {
    pub post_tags: u64,
    pub comments: u64,
    pub posts: u64,
    pub tags: u64,
    pub users: u64,
}

impl WipeSummary {
    pub fn total(&self) -> u64 {
        self.post_tags + self.comments + self.posts + self.tags + self.users
    }
}

/// Whole-store operations that span every table
#[async_trait]
pub trait Store: Send + Sync {
    /// Connectivity probe for health checks
    async fn ping(&self) -> RepoResult<()>;

    /// Delete every row in foreign-key order (post tags, comments, posts,
    /// tags, users) as one atomic unit.
    async fn wipe_all(&self) -> RepoResult<WipeSummary>;
}
