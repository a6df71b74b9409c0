//! Domain entities - core business objects

mod comment;
mod post;
mod tag;
mod user;

pub use comment::{Comment, CommentWithAuthor};
pub use post::{Post, PostListing, PostStatus, PostStatusParseError, PostSummary};
pub use tag::{is_hex_color, PostTag, Tag, TagWithCount, DEFAULT_TAG_COLOR};
pub use user::{AuthorSummary, User, UserActivity, UserWithActivity};
