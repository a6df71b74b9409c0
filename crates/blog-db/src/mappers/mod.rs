//! Entity to model mappers
//!
//! `From<Model> for Entity` conversions from database rows to domain objects
//! (blog-core). Status strings are parsed here.

mod comment;
mod post;
mod tag;
mod user;

pub use post::parse_post_status;
