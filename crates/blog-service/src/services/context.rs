//! Service context - dependency container for services
//!
//! Holds the repositories and store handle needed by services. The pool or
//! in-memory store is created by the process entry point and passed in.

use std::sync::Arc;

use blog_core::traits::{CommentRepository, PostRepository, Store, TagRepository, UserRepository};
use blog_db::{
    MemoryStore, PgCommentRepository, PgPool, PgPostRepository, PgStore, PgTagRepository,
    PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    post_repo: Arc<dyn PostRepository>,
    tag_repo: Arc<dyn TagRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    store: Arc<dyn Store>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        tag_repo: Arc<dyn TagRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        store: Arc<dyn Store>,
    ) -> Self {
        Self {
            user_repo,
            post_repo,
            tag_repo,
            comment_repo,
            store,
        }
    }

    /// Start a builder for custom wiring
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Wire every repository to PostgreSQL
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgPostRepository::new(pool.clone())),
            Arc::new(PgTagRepository::new(pool.clone())),
            Arc::new(PgCommentRepository::new(pool.clone())),
            Arc::new(PgStore::new(pool)),
        )
    }

    /// Wire every repository to one shared in-memory store
    pub fn in_memory(store: MemoryStore) -> Self {
        Self::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
        )
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the tag repository
    pub fn tag_repo(&self) -> &dyn TagRepository {
        self.tag_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the whole-store handle (health probe, wipe)
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    tag_repo: Option<Arc<dyn TagRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    store: Option<Arc<dyn Store>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn tag_repo(mut self, repo: Arc<dyn TagRepository>) -> Self {
        self.tag_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn store(mut self, store: Arc<dyn Store>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.tag_repo
                .ok_or_else(|| ServiceError::validation("tag_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.store
                .ok_or_else(|| ServiceError::validation("store is required"))?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_every_dependency() {
        let store = Arc::new(MemoryStore::new());
        let err = ServiceContext::builder()
            .user_repo(store.clone())
            .post_repo(store.clone())
            .build()
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("tag_repo"));
    }

    #[test]
    fn test_builder_with_shared_store() {
        let store = Arc::new(MemoryStore::new());
        let ctx = ServiceContext::builder()
            .user_repo(store.clone())
            .post_repo(store.clone())
            .tag_repo(store.clone())
            .comment_repo(store.clone())
            .store(store)
            .build();
        assert!(ctx.is_ok());
    }
}
