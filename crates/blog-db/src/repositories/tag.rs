//! PostgreSQL implementation of TagRepository (tags and post_tags)

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use blog_core::entities::{PostTag, Tag, TagWithCount};
use blog_core::error::DomainError;
use blog_core::traits::{RepoResult, TagRepository};

use crate::models::{TagModel, TagWithCountModel, TaggedPostModel};

use super::error::{map_db_error, map_unique_violation, map_write_error};

/// PostgreSQL implementation of TagRepository
#[derive(Clone)]
pub struct PgTagRepository {
    pool: PgPool,
}

impl PgTagRepository {
    /// Create a new PgTagRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Tag>> {
        let result = sqlx::query_as::<_, TagModel>(
            r"
            SELECT id, name, slug, description, color, created_at
            FROM tags
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Tag::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Tag>> {
        let result = sqlx::query_as::<_, TagModel>(
            r"
            SELECT id, name, slug, description, color, created_at
            FROM tags
            WHERE slug = $1
            ",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Tag::from))
    }

    #[instrument(skip(self))]
    async fn find_all_with_counts(&self) -> RepoResult<Vec<TagWithCount>> {
        let rows = sqlx::query_as::<_, TagWithCountModel>(
            r"
            SELECT t.id, t.name, t.slug, t.description, t.color, t.created_at,
                   (SELECT COUNT(*) FROM post_tags pt WHERE pt.tag_id = t.id) AS post_count
            FROM tags t
            ORDER BY t.name ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(TagWithCount::from).collect())
    }

    #[instrument(skip(self, tag), fields(tag_id = %tag.id))]
    async fn create(&self, tag: &Tag) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO tags (id, name, slug, description, color, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(tag.id)
        .bind(&tag.name)
        .bind(&tag.slug)
        .bind(&tag.description)
        .bind(&tag.color)
        .bind(tag.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TagSlugAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tags")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn link(&self, link: PostTag) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            INSERT INTO post_tags (post_id, tag_id)
            VALUES ($1, $2)
            ON CONFLICT (post_id, tag_id) DO NOTHING
            ",
        )
        .bind(link.post_id)
        .bind(link.tag_id)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self))]
    async fn unlink(&self, link: PostTag) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM post_tags WHERE post_id = $1 AND tag_id = $2")
            .bind(link.post_id)
            .bind(link.tag_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagModel>(
            r"
            SELECT t.id, t.name, t.slug, t.description, t.color, t.created_at
            FROM tags t
            INNER JOIN post_tags pt ON pt.tag_id = t.id
            WHERE pt.post_id = $1
            ORDER BY t.name ASC
            ",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }

    #[instrument(skip(self, post_ids), fields(posts = post_ids.len()))]
    async fn find_by_posts(&self, post_ids: &[Uuid]) -> RepoResult<Vec<(Uuid, Tag)>> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, TaggedPostModel>(
            r"
            SELECT pt.post_id, t.id, t.name, t.slug, t.description, t.color, t.created_at
            FROM post_tags pt
            INNER JOIN tags t ON t.id = pt.tag_id
            WHERE pt.post_id = ANY($1)
            ORDER BY t.name ASC
            ",
        )
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(<(Uuid, Tag)>::from).collect())
    }
}
