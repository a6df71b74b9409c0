//! Post service
//!
//! Handles post creation, listings, the single-post view (which counts a
//! view), likes, status changes, and aggregate statistics.

use std::collections::HashMap;

use blog_core::entities::{Post, PostStatus};
use blog_core::DomainError;
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::dto::{
    AuthorProfileResponse, CommentCount, CreatePostRequest, PostDetailResponse,
    PostListItemResponse, PostResponse, StatsResponse, TagResponse,
};

use super::comment::build_thread;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::logging::LogFailure;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post
    ///
    /// Status defaults to DRAFT. A post created PUBLISHED gets `published_at`
    /// set to the creation time; any other status leaves it empty.
    pub async fn create(&self, request: CreatePostRequest) -> ServiceResult<PostResponse> {
        self.create_with_published_at(request, None).await
    }

    /// Create a post with a backdated publication time, for seeding
    ///
    /// `published_at` only applies when the post is created PUBLISHED.
    #[instrument(skip(self, request), fields(slug = %request.slug, author_id = %request.author_id))]
    pub(crate) async fn create_with_published_at(
        &self,
        request: CreatePostRequest,
        published_at: Option<DateTime<Utc>>,
    ) -> ServiceResult<PostResponse> {
        let status = request.status.unwrap_or_default();
        let mut post = Post::new(request.title, request.slug, request.author_id, status);
        post.content = request.content;
        post.excerpt = request.excerpt;
        post.view_count = request.view_count.unwrap_or(0);
        post.like_count = request.like_count.unwrap_or(0);
        if status.is_published() && published_at.is_some() {
            post.published_at = published_at;
        }

        self.ctx
            .post_repo()
            .create(&post)
            .await
            .log_failure("post", "create")?;

        info!(post_id = %post.id, status = %post.status, "Post created");
        Ok(PostResponse::from(&post))
    }

    /// All posts, newest first, with author summary, tags and comment count
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ServiceResult<Vec<PostListItemResponse>> {
        let listings = self
            .ctx
            .post_repo()
            .find_all_listings()
            .await
            .log_failure("post", "find_all")?;

        let ids: Vec<Uuid> = listings.iter().map(|l| l.post.id).collect();
        let mut tags: HashMap<Uuid, Vec<TagResponse>> = HashMap::new();
        for (post_id, tag) in self
            .ctx
            .tag_repo()
            .find_by_posts(&ids)
            .await
            .log_failure("post", "find_all")?
        {
            tags.entry(post_id).or_default().push(tag.into());
        }

        Ok(listings
            .into_iter()
            .map(|listing| PostListItemResponse {
                tags: tags.remove(&listing.post.id).unwrap_or_default(),
                post: PostResponse::from(&listing.post),
                author: listing.author.into(),
                count: CommentCount {
                    comments: listing.comment_count,
                },
            })
            .collect())
    }

    /// One post with author profile, tags and comment thread, or `None`
    ///
    /// Every successful call counts one view. The increment and the read are
    /// a single atomic storage operation, so the returned post already
    /// carries the new count.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: Uuid) -> ServiceResult<Option<PostDetailResponse>> {
        let Some(post) = self
            .ctx
            .post_repo()
            .record_view(id)
            .await
            .log_failure("post", "find_by_id")?
        else {
            debug!(post_id = %id, "Post not found");
            return Ok(None);
        };

        let author = self
            .ctx
            .user_repo()
            .find_by_id(post.author_id)
            .await
            .log_failure("post", "find_by_id")?
            .ok_or_else(|| {
                ServiceError::internal(format!("author {} of post {id} is missing", post.author_id))
            })
            .log_failure("post", "find_by_id")?;

        let tags = self
            .ctx
            .tag_repo()
            .find_by_post(id)
            .await
            .log_failure("post", "find_by_id")?;
        let comments = self
            .ctx
            .comment_repo()
            .find_by_post(id)
            .await
            .log_failure("post", "find_by_id")?;

        debug!(post_id = %id, view_count = post.view_count, "Post viewed");
        Ok(Some(PostDetailResponse {
            post: PostResponse::from(&post),
            author: AuthorProfileResponse::from(&author),
            tags: tags.into_iter().map(TagResponse::from).collect(),
            comments: build_thread(comments),
        }))
    }

    /// Add one like and return the updated post
    #[instrument(skip(self))]
    pub async fn like(&self, id: Uuid) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .increment_likes(id)
            .await
            .log_failure("post", "like")?
            .ok_or(DomainError::PostNotFound(id))?;

        Ok(PostResponse::from(&post))
    }

    /// Change a post's status
    ///
    /// The first transition to PUBLISHED stamps `published_at`; later
    /// transitions keep the original time.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: Uuid, status: PostStatus) -> ServiceResult<PostResponse> {
        let mut post = self
            .ctx
            .post_repo()
            .find_by_id(id)
            .await
            .log_failure("post", "update_status")?
            .ok_or(DomainError::PostNotFound(id))?;

        if post.set_status(status) {
            post = self
                .ctx
                .post_repo()
                .update_status(&post)
                .await
                .log_failure("post", "update_status")?;
            info!(post_id = %id, status = %status, "Post status changed");
        }

        Ok(PostResponse::from(&post))
    }

    /// Total number of posts
    #[instrument(skip(self))]
    pub async fn count(&self) -> ServiceResult<i64> {
        self.ctx.post_repo().count().await.log_failure("post", "count")
    }

    /// Number of posts with the given status
    #[instrument(skip(self))]
    pub async fn count_by_status(&self, status: PostStatus) -> ServiceResult<i64> {
        self.ctx
            .post_repo()
            .count_by_status(status)
            .await
            .log_failure("post", "count_by_status")
    }

    /// Aggregate counts across every entity
    #[instrument(skip(self))]
    pub async fn stats(&self) -> ServiceResult<StatsResponse> {
        let stats = async {
            Ok::<_, DomainError>(StatsResponse {
                users: self.ctx.user_repo().count().await?,
                posts: self.ctx.post_repo().count().await?,
                published_posts: self
                    .ctx
                    .post_repo()
                    .count_by_status(PostStatus::Published)
                    .await?,
                draft_posts: self.ctx.post_repo().count_by_status(PostStatus::Draft).await?,
                comments: self.ctx.comment_repo().count().await?,
                tags: self.ctx.tag_repo().count().await?,
            })
        }
        .await;

        stats.log_failure("post", "stats")
    }
}
