//! `blog seed`

use blog_common::{AppConfig, AppResult};
use blog_db::close_pool;
use blog_service::{SeedService, ServiceContext};
use tracing::info;

use super::{connect, refuse_in_production};

/// Wipe every table and load the demo data
pub async fn run(config: &AppConfig, force: bool) -> AppResult<()> {
    if !force {
        refuse_in_production(config, "seed")?;
    }

    let pool = connect(config).await?;
    let ctx = ServiceContext::from_pool(pool.clone());
    let result = SeedService::new(&ctx).run().await;
    close_pool(pool).await;

    let summary = result?;
    info!(?summary, "Seeding finished");
    println!(
        "Seeded {} users, {} tags, {} posts, {} tag links, {} comments",
        summary.users, summary.tags, summary.posts, summary.post_tags, summary.comments
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::config_for;

    #[tokio::test]
    async fn test_seed_refused_in_production_without_force() {
        let err = run(&config_for("production"), false).await.unwrap_err();
        assert_eq!(err.error_code(), "REFUSED");
    }
}
