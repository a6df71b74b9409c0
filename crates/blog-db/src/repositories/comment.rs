//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use blog_core::entities::{Comment, CommentWithAuthor};
use blog_core::traits::{CommentRepository, RepoResult};

use crate::models::{CommentModel, CommentWithAuthorModel};

use super::error::{map_db_error, map_write_error};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, content, author_id, post_id, parent_id, created_at, updated_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Vec<CommentWithAuthor>> {
        let rows = sqlx::query_as::<_, CommentWithAuthorModel>(
            r"
            SELECT c.id, c.content, c.author_id, c.post_id, c.parent_id, c.created_at,
                   c.updated_at,
                   u.username AS author_username,
                   u.first_name AS author_first_name,
                   u.last_name AS author_last_name
            FROM comments c
            INNER JOIN users u ON u.id = c.author_id
            WHERE c.post_id = $1
            ORDER BY c.created_at ASC, c.id ASC
            ",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(CommentWithAuthor::from).collect())
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id, post_id = %comment.post_id))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO comments (id, content, author_id, post_id, parent_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(comment.id)
        .bind(&comment.content)
        .bind(comment.author_id)
        .bind(comment.post_id)
        .bind(comment.parent_id)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
