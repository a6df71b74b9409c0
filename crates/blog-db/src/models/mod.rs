//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod post;
mod tag;
mod user;

pub use comment::{CommentModel, CommentWithAuthorModel};
pub use post::{PostListingModel, PostModel, PostSummaryModel};
pub use tag::{TagModel, TagWithCountModel, TaggedPostModel};
pub use user::{UserModel, UserWithActivityModel};
