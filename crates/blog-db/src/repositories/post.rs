//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use blog_core::entities::{Post, PostListing, PostStatus, PostSummary};
use blog_core::error::DomainError;
use blog_core::traits::{PostRepository, RepoResult};

use crate::models::{PostListingModel, PostModel, PostSummaryModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Bump one of the counter columns and return the updated row
    async fn increment(&self, sql: &'static str, id: Uuid) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, title, slug, content, excerpt, status::TEXT AS status, author_id,
                   view_count, like_count, published_at, created_at, updated_at
            FROM posts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_all_listings(&self) -> RepoResult<Vec<PostListing>> {
        let rows = sqlx::query_as::<_, PostListingModel>(
            r"
            SELECT p.id, p.title, p.slug, p.content, p.excerpt, p.status::TEXT AS status,
                   p.author_id, p.view_count, p.like_count, p.published_at, p.created_at,
                   p.updated_at,
                   u.username AS author_username,
                   u.first_name AS author_first_name,
                   u.last_name AS author_last_name,
                   (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comment_count
            FROM posts p
            INNER JOIN users u ON u.id = p.author_id
            ORDER BY p.created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(PostListing::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_summaries_by_author(&self, author_id: Uuid) -> RepoResult<Vec<PostSummary>> {
        let rows = sqlx::query_as::<_, PostSummaryModel>(
            r"
            SELECT id, title, slug, status::TEXT AS status, created_at
            FROM posts
            WHERE author_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(PostSummary::from).collect())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO posts (id, title, slug, content, excerpt, status, author_id,
                               view_count, like_count, published_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6::post_status, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content)
        .bind(&post.excerpt)
        .bind(post.status.as_str())
        .bind(post.author_id)
        .bind(post.view_count)
        .bind(post.like_count)
        .bind(post.published_at)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::PostSlugAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn record_view(&self, id: Uuid) -> RepoResult<Option<Post>> {
        self.increment(
            r"
            UPDATE posts
            SET view_count = view_count + 1
            WHERE id = $1
            RETURNING id, title, slug, content, excerpt, status::TEXT AS status, author_id,
                      view_count, like_count, published_at, created_at, updated_at
            ",
            id,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn increment_likes(&self, id: Uuid) -> RepoResult<Option<Post>> {
        self.increment(
            r"
            UPDATE posts
            SET like_count = like_count + 1
            WHERE id = $1
            RETURNING id, title, slug, content, excerpt, status::TEXT AS status, author_id,
                      view_count, like_count, published_at, created_at, updated_at
            ",
            id,
        )
        .await
    }

    #[instrument(skip(self, post), fields(post_id = %post.id, status = %post.status))]
    async fn update_status(&self, post: &Post) -> RepoResult<Post> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            UPDATE posts
            SET status = $2::post_status,
                published_at = COALESCE(published_at, $3),
                updated_at = $4
            WHERE id = $1
            RETURNING id, title, slug, content, excerpt, status::TEXT AS status, author_id,
                      view_count, like_count, published_at, created_at, updated_at
            ",
        )
        .bind(post.id)
        .bind(post.status.as_str())
        .bind(post.published_at)
        .bind(post.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .map(Post::from)
            .ok_or(DomainError::PostNotFound(post.id))
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_by_status(&self, status: PostStatus) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts WHERE status = $1::post_status")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
