//! Schema migration runner
//!
//! Thin wrapper over the SQLx migrator. Migrations are plain
//! `<version>_<name>.sql` files read from a directory at runtime.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::Utc;
use sqlx::migrate::{Migrate, MigrateError, Migrator};
use sqlx::PgPool;
use tracing::{info, instrument, warn};

/// Migration errors
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Migration failed: {0}")]
    Source(#[from] MigrateError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Could not write migration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid migration name: {0:?}")]
    InvalidName(String),
}

/// One migration and whether it has been applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationStatus {
    pub version: i64,
    pub description: String,
    pub applied: bool,
}

/// Applies and inspects migrations from a directory
pub struct MigrationRunner {
    pool: PgPool,
    dir: PathBuf,
}

impl MigrationRunner {
    pub fn new(pool: PgPool, dir: impl Into<PathBuf>) -> Self {
        Self {
            pool,
            dir: dir.into(),
        }
    }

    async fn migrator(&self) -> Result<Migrator, MigrationError> {
        Ok(Migrator::new(self.dir.as_path()).await?)
    }

    async fn applied_versions(&self) -> Result<HashSet<i64>, MigrationError> {
        let mut conn = self.pool.acquire().await?;
        conn.ensure_migrations_table().await?;
        let applied = conn.list_applied_migrations().await?;
        Ok(applied.into_iter().map(|m| m.version).collect())
    }

    /// Every known migration with its applied flag, ordered by version
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    pub async fn status(&self) -> Result<Vec<MigrationStatus>, MigrationError> {
        let migrator = self.migrator().await?;
        let applied = self.applied_versions().await?;

        Ok(migrator
            .iter()
            .filter(|m| !m.migration_type.is_down_migration())
            .map(|m| MigrationStatus {
                version: m.version,
                description: m.description.to_string(),
                applied: applied.contains(&m.version),
            })
            .collect())
    }

    /// Apply every pending migration, returning the ones newly applied
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    pub async fn apply_pending(&self) -> Result<Vec<MigrationStatus>, MigrationError> {
        let pending: Vec<MigrationStatus> = self
            .status()
            .await?
            .into_iter()
            .filter(|m| !m.applied)
            .map(|m| MigrationStatus { applied: true, ..m })
            .collect();

        self.migrator().await?.run(&self.pool).await?;

        for migration in &pending {
            info!(
                version = migration.version,
                description = %migration.description,
                "Applied migration"
            );
        }
        Ok(pending)
    }

    /// Drop the public schema and re-apply every migration. Irreversible.
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    pub async fn reset(&self) -> Result<Vec<MigrationStatus>, MigrationError> {
        warn!("Dropping and recreating the public schema");
        sqlx::raw_sql("DROP SCHEMA public CASCADE; CREATE SCHEMA public;")
            .execute(&self.pool)
            .await?;
        self.apply_pending().await
    }
}

/// Normalize a human migration name to `snake_case` file-name form
pub fn sanitize_name(name: &str) -> Result<String, MigrationError> {
    let mut out = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() {
        return Err(MigrationError::InvalidName(name.to_string()));
    }
    Ok(out)
}

/// Create an empty timestamped migration file and return its path
pub async fn scaffold(dir: &Path, name: &str) -> Result<PathBuf, MigrationError> {
    let name = sanitize_name(name)?;
    tokio::fs::create_dir_all(dir).await?;

    let path = dir.join(format!("{}_{name}.sql", Utc::now().format("%Y%m%d%H%M%S")));
    tokio::fs::write(&path, format!("-- {name}\n")).await?;

    info!(path = %path.display(), "Created migration file");
    Ok(path)
}
