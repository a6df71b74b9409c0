//! Comment entity <-> model mapper

use blog_core::entities::{AuthorSummary, Comment, CommentWithAuthor};

use crate::models::{CommentModel, CommentWithAuthorModel};

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            content: model.content,
            author_id: model.author_id,
            post_id: model.post_id,
            parent_id: model.parent_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CommentWithAuthorModel> for CommentWithAuthor {
    fn from(model: CommentWithAuthorModel) -> Self {
        let author = AuthorSummary {
            id: model.comment.author_id,
            username: model.author_username,
            first_name: model.author_first_name,
            last_name: model.author_last_name,
        };
        CommentWithAuthor {
            comment: Comment::from(model.comment),
            author,
        }
    }
}
