//! Business logic services
//!
//! Each service is a thin struct borrowing the shared `ServiceContext`.
//! Failures are logged once through `LogFailure` and returned unchanged.

pub mod comment;
pub mod context;
pub mod error;
pub mod logging;
pub mod post;
pub mod seed;
pub mod tag;
pub mod user;

pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use logging::LogFailure;
pub use post::PostService;
pub use seed::{SeedService, SeedSummary};
pub use tag::TagService;
pub use user::UserService;
