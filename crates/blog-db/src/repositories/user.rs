//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use blog_core::entities::{User, UserActivity, UserWithActivity};
use blog_core::error::DomainError;
use blog_core::traits::{RepoResult, UserRepository};

use crate::models::{UserModel, UserWithActivityModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, username, first_name, last_name, bio, avatar_url, is_admin,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_all_with_activity(&self) -> RepoResult<Vec<UserWithActivity>> {
        let rows = sqlx::query_as::<_, UserWithActivityModel>(
            r"
            SELECT u.id, u.email, u.username, u.first_name, u.last_name, u.bio, u.avatar_url,
                   u.is_admin, u.created_at, u.updated_at,
                   (SELECT COUNT(*) FROM posts p WHERE p.author_id = u.id) AS post_count,
                   (SELECT COUNT(*) FROM comments c WHERE c.author_id = u.id) AS comment_count
            FROM users u
            ORDER BY u.created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(UserWithActivity::from).collect())
    }

    #[instrument(skip(self))]
    async fn activity(&self, id: Uuid) -> RepoResult<UserActivity> {
        let (posts, comments) = sqlx::query_as::<_, (i64, i64)>(
            r"
            SELECT (SELECT COUNT(*) FROM posts WHERE author_id = $1),
                   (SELECT COUNT(*) FROM comments WHERE author_id = $1)
            ",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(UserActivity { posts, comments })
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, email, username, first_name, last_name, bio, avatar_url,
                               is_admin, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.bio)
        .bind(&user.avatar_url)
        .bind(user.is_admin)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UserAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
