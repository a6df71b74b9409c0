//! In-memory storage adapter
//!
//! `MemoryStore` implements every repository port over a single
//! `parking_lot::RwLock`. It enforces the same uniqueness and reference rules
//! as the PostgreSQL schema, so services behave identically on either adapter.
//! Cloning shares the underlying state.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;

use blog_core::entities::{
    AuthorSummary, Comment, CommentWithAuthor, Post, PostListing, PostStatus, PostSummary,
    PostTag, Tag, TagWithCount, User, UserActivity, UserWithActivity,
};
use blog_core::error::DomainError;
use blog_core::traits::{
    CommentRepository, PostRepository, RepoResult, Store, TagRepository, UserRepository,
    WipeSummary,
};

#[derive(Debug, Default)]
struct MemoryState {
    users: Vec<User>,
    posts: Vec<Post>,
    tags: Vec<Tag>,
    post_tags: Vec<PostTag>,
    comments: Vec<Comment>,
}

impl MemoryState {
    fn user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn post_mut(&mut self, id: Uuid) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }

    fn author_summary(&self, id: Uuid) -> Option<AuthorSummary> {
        self.user(id).map(AuthorSummary::from)
    }

    fn tags_sorted(&self, mut tags: Vec<Tag>) -> Vec<Tag> {
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        tags
    }
}

/// Newest first; among equal timestamps the most recently inserted wins
fn newest_first<T: Clone>(items: &[T], created_at: impl Fn(&T) -> chrono::DateTime<chrono::Utc>) -> Vec<T> {
    let mut out: Vec<T> = items.iter().rev().cloned().collect();
    out.sort_by_key(|item| std::cmp::Reverse(created_at(item)));
    out
}

/// Shared in-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Users
// ============================================================================

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        Ok(self.state.read().user(id).cloned())
    }

    async fn find_all_with_activity(&self) -> RepoResult<Vec<UserWithActivity>> {
        let state = self.state.read();
        let users = newest_first(&state.users, |u| u.created_at);
        Ok(users
            .into_iter()
            .map(|user| {
                let activity = UserActivity {
                    posts: state.posts.iter().filter(|p| p.author_id == user.id).count() as i64,
                    comments: state
                        .comments
                        .iter()
                        .filter(|c| c.author_id == user.id)
                        .count() as i64,
                };
                UserWithActivity { user, activity }
            })
            .collect())
    }

    async fn activity(&self, id: Uuid) -> RepoResult<UserActivity> {
        let state = self.state.read();
        Ok(UserActivity {
            posts: state.posts.iter().filter(|p| p.author_id == id).count() as i64,
            comments: state.comments.iter().filter(|c| c.author_id == id).count() as i64,
        })
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        let mut state = self.state.write();
        if state
            .users
            .iter()
            .any(|u| u.email == user.email || u.username == user.username)
        {
            return Err(DomainError::UserAlreadyExists);
        }
        state.users.push(user.clone());
        Ok(())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.state.read().users.len() as i64)
    }
}

// ============================================================================
// Posts
// ============================================================================

#[async_trait]
impl PostRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>> {
        Ok(self.state.read().posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all_listings(&self) -> RepoResult<Vec<PostListing>> {
        let state = self.state.read();
        newest_first(&state.posts, |p| p.created_at)
            .into_iter()
            .map(|post| {
                let author = state.author_summary(post.author_id).ok_or_else(|| {
                    DomainError::InternalError(format!("post {} has no author", post.id))
                })?;
                let comment_count =
                    state.comments.iter().filter(|c| c.post_id == post.id).count() as i64;
                Ok(PostListing {
                    post,
                    author,
                    comment_count,
                })
            })
            .collect()
    }

    async fn find_summaries_by_author(&self, author_id: Uuid) -> RepoResult<Vec<PostSummary>> {
        let state = self.state.read();
        let owned: Vec<Post> = state
            .posts
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect();
        Ok(newest_first(&owned, |p| p.created_at)
            .iter()
            .map(PostSummary::from)
            .collect())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        let mut state = self.state.write();
        if state.user(post.author_id).is_none() {
            return Err(DomainError::InvalidReference("posts_author_id_fkey".to_string()));
        }
        if state.posts.iter().any(|p| p.slug == post.slug) {
            return Err(DomainError::PostSlugAlreadyExists);
        }
        state.posts.push(post.clone());
        Ok(())
    }

    async fn record_view(&self, id: Uuid) -> RepoResult<Option<Post>> {
        let mut state = self.state.write();
        Ok(state.post_mut(id).map(|post| {
            post.view_count = post.view_count.saturating_add(1);
            post.clone()
        }))
    }

    async fn increment_likes(&self, id: Uuid) -> RepoResult<Option<Post>> {
        let mut state = self.state.write();
        Ok(state.post_mut(id).map(|post| {
            post.like_count = post.like_count.saturating_add(1);
            post.clone()
        }))
    }

    async fn update_status(&self, post: &Post) -> RepoResult<Post> {
        let mut state = self.state.write();
        let stored = state
            .post_mut(post.id)
            .ok_or(DomainError::PostNotFound(post.id))?;
        stored.status = post.status;
        stored.published_at = stored.published_at.or(post.published_at);
        stored.updated_at = post.updated_at;
        Ok(stored.clone())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.state.read().posts.len() as i64)
    }

    async fn count_by_status(&self, status: PostStatus) -> RepoResult<i64> {
        Ok(self
            .state
            .read()
            .posts
            .iter()
            .filter(|p| p.status == status)
            .count() as i64)
    }
}

// ============================================================================
// Tags
// ============================================================================

#[async_trait]
impl TagRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Tag>> {
        Ok(self.state.read().tags.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Tag>> {
        Ok(self.state.read().tags.iter().find(|t| t.slug == slug).cloned())
    }

    async fn find_all_with_counts(&self) -> RepoResult<Vec<TagWithCount>> {
        let state = self.state.read();
        let tags = state.tags_sorted(state.tags.clone());
        Ok(tags
            .into_iter()
            .map(|tag| {
                let post_count =
                    state.post_tags.iter().filter(|pt| pt.tag_id == tag.id).count() as i64;
                TagWithCount { tag, post_count }
            })
            .collect())
    }

    #[instrument(skip(self, tag), fields(tag_id = %tag.id))]
    async fn create(&self, tag: &Tag) -> RepoResult<()> {
        let mut state = self.state.write();
        if state.tags.iter().any(|t| t.slug == tag.slug) {
            return Err(DomainError::TagSlugAlreadyExists);
        }
        state.tags.push(tag.clone());
        Ok(())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.state.read().tags.len() as i64)
    }

    async fn link(&self, link: PostTag) -> RepoResult<bool> {
        let mut state = self.state.write();
        if !state.posts.iter().any(|p| p.id == link.post_id) {
            return Err(DomainError::InvalidReference("post_tags_post_id_fkey".to_string()));
        }
        if !state.tags.iter().any(|t| t.id == link.tag_id) {
            return Err(DomainError::InvalidReference("post_tags_tag_id_fkey".to_string()));
        }
        if state.post_tags.contains(&link) {
            debug!(post_id = %link.post_id, tag_id = %link.tag_id, "Link already present");
            return Ok(false);
        }
        state.post_tags.push(link);
        Ok(true)
    }

    async fn unlink(&self, link: PostTag) -> RepoResult<bool> {
        let mut state = self.state.write();
        let before = state.post_tags.len();
        state.post_tags.retain(|pt| *pt != link);
        Ok(state.post_tags.len() < before)
    }

    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Vec<Tag>> {
        let state = self.state.read();
        let tag_ids: HashSet<Uuid> = state
            .post_tags
            .iter()
            .filter(|pt| pt.post_id == post_id)
            .map(|pt| pt.tag_id)
            .collect();
        let tags = state
            .tags
            .iter()
            .filter(|t| tag_ids.contains(&t.id))
            .cloned()
            .collect();
        Ok(state.tags_sorted(tags))
    }

    async fn find_by_posts(&self, post_ids: &[Uuid]) -> RepoResult<Vec<(Uuid, Tag)>> {
        let state = self.state.read();
        let mut pairs: Vec<(Uuid, Tag)> = state
            .post_tags
            .iter()
            .filter(|pt| post_ids.contains(&pt.post_id))
            .filter_map(|pt| {
                state
                    .tags
                    .iter()
                    .find(|t| t.id == pt.tag_id)
                    .map(|t| (pt.post_id, t.clone()))
            })
            .collect();
        pairs.sort_by(|a, b| a.1.name.cmp(&b.1.name));
        Ok(pairs)
    }
}

// ============================================================================
// Comments
// ============================================================================

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>> {
        Ok(self.state.read().comments.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Vec<CommentWithAuthor>> {
        let state = self.state.read();
        let mut comments: Vec<Comment> = state
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        // Stable: insertion order breaks timestamp ties
        comments.sort_by_key(|c| c.created_at);
        comments
            .into_iter()
            .map(|comment| {
                let author = state.author_summary(comment.author_id).ok_or_else(|| {
                    DomainError::InternalError(format!("comment {} has no author", comment.id))
                })?;
                Ok(CommentWithAuthor { comment, author })
            })
            .collect()
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id, post_id = %comment.post_id))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        let mut state = self.state.write();
        if state.user(comment.author_id).is_none() {
            return Err(DomainError::InvalidReference("comments_author_id_fkey".to_string()));
        }
        if !state.posts.iter().any(|p| p.id == comment.post_id) {
            return Err(DomainError::InvalidReference("comments_post_id_fkey".to_string()));
        }
        if let Some(parent_id) = comment.parent_id {
            if !state.comments.iter().any(|c| c.id == parent_id) {
                return Err(DomainError::InvalidReference(
                    "comments_parent_id_fkey".to_string(),
                ));
            }
        }
        state.comments.push(comment.clone());
        Ok(())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.state.read().comments.len() as i64)
    }
}

// ============================================================================
// Store
// ============================================================================

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }

    #[instrument(skip(self))]
    async fn wipe_all(&self) -> RepoResult<WipeSummary> {
        let mut state = self.state.write();
        let summary = WipeSummary {
            post_tags: state.post_tags.len() as u64,
            comments: state.comments.len() as u64,
            posts: state.posts.len() as u64,
            tags: state.tags.len() as u64,
            users: state.users.len() as u64,
        };
        *state = MemoryState::default();
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User::new(format!("{name}@example.com"), name.to_string())
    }

    async fn seeded() -> (MemoryStore, User, Post) {
        let store = MemoryStore::new();
        let author = user("author");
        UserRepository::create(&store, &author).await.unwrap();
        let post = Post::new(
            "Hello".to_string(),
            "hello".to_string(),
            author.id,
            PostStatus::Published,
        );
        PostRepository::create(&store, &post).await.unwrap();
        (store, author, post)
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MemoryStore>();
    }

    #[tokio::test]
    async fn test_duplicate_email_or_username_conflicts() {
        let store = MemoryStore::new();
        UserRepository::create(&store, &user("alice")).await.unwrap();

        let same_email = User::new("alice@example.com".to_string(), "other".to_string());
        let err = UserRepository::create(&store, &same_email).await.unwrap_err();
        assert!(matches!(err, DomainError::UserAlreadyExists));

        let same_name = User::new("x@example.com".to_string(), "alice".to_string());
        let err = UserRepository::create(&store, &same_name).await.unwrap_err();
        assert!(matches!(err, DomainError::UserAlreadyExists));

        assert_eq!(UserRepository::count(&store).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_post_requires_existing_author() {
        let store = MemoryStore::new();
        let post = Post::new("t".to_string(), "t".to_string(), Uuid::new_v4(), PostStatus::Draft);
        let err = PostRepository::create(&store, &post).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidReference(_)));
    }

    #[tokio::test]
    async fn test_duplicate_slug_conflicts() {
        let (store, author, _) = seeded().await;
        let dup = Post::new("Other".to_string(), "hello".to_string(), author.id, PostStatus::Draft);
        let err = PostRepository::create(&store, &dup).await.unwrap_err();
        assert!(matches!(err, DomainError::PostSlugAlreadyExists));
    }

    #[tokio::test]
    async fn test_update_status_keeps_first_publication_time() {
        let (store, _, post) = seeded().await;
        let first = post.published_at;

        let mut stale = post.clone();
        stale.status = PostStatus::Archived;
        stale.published_at = Some(chrono::Utc::now() + chrono::Duration::hours(1));
        let stored = PostRepository::update_status(&store, &stale).await.unwrap();
        assert_eq!(stored.status, PostStatus::Archived);
        assert_eq!(stored.published_at, first);

        let missing = Post::new("m".to_string(), "m".to_string(), post.author_id, PostStatus::Draft);
        let err = PostRepository::update_status(&store, &missing).await.unwrap_err();
        assert!(matches!(err, DomainError::PostNotFound(_)));
    }

    #[tokio::test]
    async fn test_record_view_increments() {
        let (store, _, post) = seeded().await;
        let first = store.record_view(post.id).await.unwrap().unwrap();
        let second = store.record_view(post.id).await.unwrap().unwrap();
        assert_eq!(first.view_count, 1);
        assert_eq!(second.view_count, 2);
        assert!(store.record_view(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_link_is_idempotent() {
        let (store, _, post) = seeded().await;
        let tag = Tag::new("Rust".to_string(), "rust".to_string(), None);
        TagRepository::create(&store, &tag).await.unwrap();

        let link = PostTag::new(post.id, tag.id);
        assert!(store.link(link).await.unwrap());
        assert!(!store.link(link).await.unwrap());
        assert_eq!(TagRepository::find_by_post(&store, post.id).await.unwrap().len(), 1);

        assert!(store.unlink(link).await.unwrap());
        assert!(!store.unlink(link).await.unwrap());
    }

    #[tokio::test]
    async fn test_link_unknown_tag_is_invalid_reference() {
        let (store, _, post) = seeded().await;
        let err = store.link(PostTag::new(post.id, Uuid::new_v4())).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidReference(_)));
    }

    #[tokio::test]
    async fn test_comment_references_checked() {
        let (store, author, post) = seeded().await;
        let mut orphan = Comment::new("hi".to_string(), author.id, post.id);
        orphan.parent_id = Some(Uuid::new_v4());
        let err = CommentRepository::create(&store, &orphan).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidReference(_)));

        let ok = Comment::new("hi".to_string(), author.id, post.id);
        CommentRepository::create(&store, &ok).await.unwrap();
        let listed = CommentRepository::find_by_post(&store, post.id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].author.username, "author");
    }

    #[tokio::test]
    async fn test_listing_is_newest_first() {
        let (store, author, first) = seeded().await;
        let second = Post::new("Two".to_string(), "two".to_string(), author.id, PostStatus::Draft);
        PostRepository::create(&store, &second).await.unwrap();

        let listings = store.find_all_listings().await.unwrap();
        assert_eq!(listings[0].post.id, second.id);
        assert_eq!(listings[1].post.id, first.id);
        assert_eq!(listings[0].author.id, author.id);
    }

    #[tokio::test]
    async fn test_wipe_all_clears_everything() {
        let (store, author, post) = seeded().await;
        let comment = Comment::new("hi".to_string(), author.id, post.id);
        CommentRepository::create(&store, &comment).await.unwrap();

        let summary = store.wipe_all().await.unwrap();
        assert_eq!(summary.users, 1);
        assert_eq!(summary.posts, 1);
        assert_eq!(summary.comments, 1);
        assert_eq!(UserRepository::count(&store).await.unwrap(), 0);
        assert_eq!(PostRepository::count(&store).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStore::new();
        let clone = store.clone();
        UserRepository::create(&clone, &user("shared")).await.unwrap();
        assert_eq!(UserRepository::count(&store).await.unwrap(), 1);
    }
}
