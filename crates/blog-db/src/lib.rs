//! # blog-db
//!
//! Storage adapters implementing the repository traits from `blog-core`.
//!
//! ## Overview
//!
//! - Connection pool management (explicit open/close, no global handle)
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - PostgreSQL repository implementations
//! - An in-memory store with the same uniqueness and reference rules
//! - A schema migration runner
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blog_db::pool::{close_pool, create_pool, DatabaseConfig};
//! use blog_db::repositories::PgUserRepository;
//! use blog_core::traits::UserRepository;
//!
//! async fn example(config: DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&config).await?;
//!     let user_repo = PgUserRepository::new(pool.clone());
//!
//!     // Use the repository...
//!     close_pool(pool).await;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod migrate;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use migrate::{MigrationError, MigrationRunner, MigrationStatus};
pub use pool::{close_pool, create_pool, DatabaseConfig, PgPool};
pub use repositories::{
    PgCommentRepository, PgPostRepository, PgStore, PgTagRepository, PgUserRepository,
};
