//! Axum extractors for request handling
//!
//! Custom extractors for id paths and validated bodies.

mod path;
mod validated;

pub use path::{IdPath, PostTagPath};
pub use validated::ValidatedJson;
