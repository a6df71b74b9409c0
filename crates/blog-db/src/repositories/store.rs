//! PostgreSQL implementation of the whole-store operations

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use blog_core::traits::{RepoResult, Store, WipeSummary};

use super::error::map_db_error;

/// PostgreSQL implementation of Store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a new PgStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn wipe_all(&self) -> RepoResult<WipeSummary> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        let mut summary = WipeSummary::default();

        // Children before parents
        for (table, slot) in [
            ("post_tags", &mut summary.post_tags),
            ("comments", &mut summary.comments),
            ("posts", &mut summary.posts),
            ("tags", &mut summary.tags),
            ("users", &mut summary.users),
        ] {
            let result = sqlx::query(&format!("DELETE FROM {table}"))
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            *slot = result.rows_affected();
        }

        tx.commit().await.map_err(map_db_error)?;
        info!(rows = summary.total(), "Store wiped");
        Ok(summary)
    }
}
