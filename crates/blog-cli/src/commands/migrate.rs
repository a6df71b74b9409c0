//! `blog migrate` subcommands

use std::path::Path;

use blog_common::{AppConfig, AppError, AppResult};
use blog_db::migrate::scaffold;
use blog_db::{close_pool, MigrationError, MigrationRunner, MigrationStatus};
use tokio::process::Command;
use tracing::info;

use super::{connect, refuse_in_production};

fn migration_error(err: MigrationError) -> AppError {
    AppError::Migration(err.to_string())
}

fn print_applied(applied: &[MigrationStatus]) {
    if applied.is_empty() {
        println!("Database is up to date");
        return;
    }
    for migration in applied {
        println!("Applied {} {}", migration.version, migration.description);
    }
}

/// Run `op` against a fresh runner, closing the pool whatever the outcome
async fn with_runner<T, F, Fut>(config: &AppConfig, op: F) -> AppResult<T>
where
    F: FnOnce(MigrationRunner) -> Fut,
    Fut: std::future::Future<Output = Result<T, MigrationError>>,
{
    let pool = connect(config).await?;
    let result = op(MigrationRunner::new(pool.clone(), &config.migrations.dir)).await;
    close_pool(pool).await;
    result.map_err(migration_error)
}

/// Scaffold an optional new migration, then apply pending ones
pub async fn dev(config: &AppConfig, name: Option<&str>) -> AppResult<()> {
    refuse_in_production(config, "migrate dev")?;

    if let Some(name) = name {
        let path = scaffold(Path::new(&config.migrations.dir), name)
            .await
            .map_err(migration_error)?;
        info!(path = %path.display(), "Migration scaffolded");
        println!("Created {}", path.display());
    }

    let applied = with_runner(config, |runner| async move { runner.apply_pending().await }).await?;
    print_applied(&applied);
    Ok(())
}

/// Apply pending migrations
pub async fn deploy(config: &AppConfig) -> AppResult<()> {
    let applied = with_runner(config, |runner| async move { runner.apply_pending().await }).await?;
    print_applied(&applied);
    Ok(())
}

/// Drop the schema and re-apply every migration
pub async fn reset(config: &AppConfig, force: bool) -> AppResult<()> {
    if !force {
        return Err(AppError::Refused(
            "reset destroys all data; re-run with --force".to_string(),
        ));
    }

    let applied = with_runner(config, |runner| async move { runner.reset().await }).await?;
    info!(applied = applied.len(), "Database reset");
    print_applied(&applied);
    Ok(())
}

/// Print every known migration with its state
pub async fn status(config: &AppConfig) -> AppResult<()> {
    let migrations = with_runner(config, |runner| async move { runner.status().await }).await?;

    println!("Migration Status:");
    if migrations.is_empty() {
        println!("  No migrations found");
    }
    for migration in &migrations {
        let state = if migration.applied { "applied" } else { "pending" };
        println!("  [{state:>7}] {} {}", migration.version, migration.description);
    }
    Ok(())
}

/// Regenerate offline query metadata
pub async fn generate() -> AppResult<()> {
    let status = Command::new("cargo")
        .args(["sqlx", "prepare", "--workspace"])
        .status()
        .await
        .map_err(|e| AppError::Migration(format!("failed to run cargo sqlx prepare: {e}")))?;

    if !status.success() {
        return Err(AppError::Migration(format!(
            "cargo sqlx prepare exited with {status}"
        )));
    }

    println!("Query metadata regenerated");
    Ok(())
}
