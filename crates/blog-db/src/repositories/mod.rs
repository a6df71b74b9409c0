//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in blog-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod post;
mod store;
mod tag;
mod user;

pub use comment::PgCommentRepository;
pub use post::PgPostRepository;
pub use store::PgStore;
pub use tag::PgTagRepository;
pub use user::PgUserRepository;
