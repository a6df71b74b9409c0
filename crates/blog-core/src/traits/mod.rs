//! Storage traits (ports)

mod repositories;

pub use repositories::{
    CommentRepository, PostRepository, RepoResult, Store, TagRepository, UserRepository,
    WipeSummary,
};
