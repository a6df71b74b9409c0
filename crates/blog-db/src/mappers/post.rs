//! Post entity <-> model mapper

use blog_core::entities::{AuthorSummary, Post, PostListing, PostStatus, PostSummary};
use tracing::warn;

use crate::models::{PostListingModel, PostModel, PostSummaryModel};

/// Convert database status string to PostStatus enum
pub fn parse_post_status(status: &str) -> PostStatus {
    status.parse().unwrap_or_else(|_| {
        warn!(status = %status, "Unknown post status in database, treating as DRAFT");
        PostStatus::Draft
    })
}

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            title: model.title,
            slug: model.slug,
            content: model.content,
            excerpt: model.excerpt,
            status: parse_post_status(&model.status),
            author_id: model.author_id,
            view_count: model.view_count,
            like_count: model.like_count,
            published_at: model.published_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<PostListingModel> for PostListing {
    fn from(model: PostListingModel) -> Self {
        let author = AuthorSummary {
            id: model.post.author_id,
            username: model.author_username,
            first_name: model.author_first_name,
            last_name: model.author_last_name,
        };
        PostListing {
            post: Post::from(model.post),
            author,
            comment_count: model.comment_count,
        }
    }
}

impl From<PostSummaryModel> for PostSummary {
    fn from(model: PostSummaryModel) -> Self {
        PostSummary {
            id: model.id,
            title: model.title,
            slug: model.slug,
            status: parse_post_status(&model.status),
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post_status() {
        assert_eq!(parse_post_status("PUBLISHED"), PostStatus::Published);
        assert_eq!(parse_post_status("ARCHIVED"), PostStatus::Archived);
        assert_eq!(parse_post_status("bogus"), PostStatus::Draft);
    }
}
