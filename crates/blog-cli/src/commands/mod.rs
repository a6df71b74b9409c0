//! Subcommand implementations

pub mod migrate;
pub mod seed;

use blog_common::{AppConfig, AppError, AppResult};
use blog_db::{create_pool, DatabaseConfig, PgPool};

/// Open a pool for a single command; callers close it with `close_pool`
async fn connect(config: &AppConfig) -> AppResult<PgPool> {
    create_pool(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))
}

/// Refuse `action` when running against production
fn refuse_in_production(config: &AppConfig, action: &str) -> AppResult<()> {
    if config.app.env.is_production() {
        return Err(AppError::Refused(format!(
            "{action} is not allowed when APP_ENV=production"
        )));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_for(env: &str) -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "DATABASE_URL" => Some("postgres://localhost/blog_test".to_string()),
        "APP_ENV" => Some(env.to_string()),
        _ => None,
    })
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refuse_in_production() {
        assert!(refuse_in_production(&config_for("development"), "seed").is_ok());

        let err = refuse_in_production(&config_for("production"), "seed").unwrap_err();
        assert_eq!(err.error_code(), "REFUSED");
        assert!(err.to_string().contains("APP_ENV=production"));
    }
}
