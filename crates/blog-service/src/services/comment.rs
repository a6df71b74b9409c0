//! Comment service
//!
//! Creates comments and assembles per-post comment threads.

use std::collections::HashMap;

use blog_core::entities::{Comment, CommentWithAuthor};
use blog_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CommentResponse, CommentThreadResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::logging::LogFailure;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a comment to a post, optionally as a reply
    ///
    /// The author must exist, and a parent comment must belong to the same post.
    #[instrument(skip(self, request), fields(author_id = %request.author_id))]
    pub async fn create(
        &self,
        post_id: Uuid,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await
            .log_failure("comment", "create")?
            .ok_or(DomainError::PostNotFound(post_id))?;

        if self
            .ctx
            .user_repo()
            .find_by_id(request.author_id)
            .await
            .log_failure("comment", "create")?
            .is_none()
        {
            return Err(ServiceError::validation("Author does not exist"))
                .log_failure("comment", "create");
        }

        let mut comment = Comment::new(request.content, request.author_id, post_id);

        if let Some(parent_id) = request.parent_id {
            let parent = self
                .ctx
                .comment_repo()
                .find_by_id(parent_id)
                .await
                .log_failure("comment", "create")?
                .ok_or_else(|| ServiceError::validation("Parent comment does not exist"))
                .log_failure("comment", "create")?;

            if parent.post_id != post_id {
                return Err(DomainError::ParentPostMismatch)
                    .log_failure("comment", "create");
            }
            comment.parent_id = Some(parent.id);
        }

        self.ctx
            .comment_repo()
            .create(&comment)
            .await
            .log_failure("comment", "create")?;

        info!(comment_id = %comment.id, post_id = %post_id, "Comment created");
        Ok(CommentResponse::from(&comment))
    }

    /// Top-level comments of a post, oldest first, with replies nested to any depth
    ///
    /// Unknown posts are NotFound rather than an empty thread.
    #[instrument(skip(self))]
    pub async fn thread_for_post(&self, post_id: Uuid) -> ServiceResult<Vec<CommentThreadResponse>> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await
            .log_failure("comment", "thread_for_post")?
            .ok_or(DomainError::PostNotFound(post_id))?;

        let comments = self
            .ctx
            .comment_repo()
            .find_by_post(post_id)
            .await
            .log_failure("comment", "thread_for_post")?;

        Ok(build_thread(comments))
    }

    /// Get a comment by ID
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: Uuid) -> ServiceResult<Option<CommentResponse>> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(id)
            .await
            .log_failure("comment", "find_by_id")?;

        Ok(comment.as_ref().map(CommentResponse::from))
    }

    /// Total number of comments
    #[instrument(skip(self))]
    pub async fn count(&self) -> ServiceResult<i64> {
        self.ctx
            .comment_repo()
            .count()
            .await
            .log_failure("comment", "count")
    }
}

/// Arrange a post's comments (oldest first) into a forest
///
/// Sibling order follows the input order. Comments whose parent is not in the
/// input are dropped.
pub(crate) fn build_thread(comments: Vec<CommentWithAuthor>) -> Vec<CommentThreadResponse> {
    let mut children: HashMap<Option<Uuid>, Vec<CommentWithAuthor>> = HashMap::new();
    for item in comments {
        children.entry(item.comment.parent_id).or_default().push(item);
    }
    assemble(None, &mut children)
}

fn assemble(
    parent: Option<Uuid>,
    children: &mut HashMap<Option<Uuid>, Vec<CommentWithAuthor>>,
) -> Vec<CommentThreadResponse> {
    let Some(level) = children.remove(&parent) else {
        return Vec::new();
    };

    level
        .into_iter()
        .map(|item| {
            let replies = assemble(Some(item.comment.id), children);
            CommentThreadResponse {
                comment: CommentResponse::from(&item.comment),
                author: item.author.into(),
                replies,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{context, create_post, create_user};
    use blog_core::entities::{AuthorSummary, User};

    fn request(content: &str, author_id: Uuid, parent_id: Option<Uuid>) -> CreateCommentRequest {
        CreateCommentRequest {
            content: content.to_string(),
            author_id,
            parent_id,
        }
    }

    #[tokio::test]
    async fn test_reply_appears_under_parent() {
        let ctx = context();
        let author = create_user(&ctx, "alice").await;
        let post = create_post(&ctx, "hello", author.id).await;
        let service = CommentService::new(&ctx);

        let top = service.create(post.id, request("top", author.id, None)).await.unwrap();
        let reply = service
            .create(post.id, request("reply", author.id, Some(top.id)))
            .await
            .unwrap();
        assert!(top.parent_id.is_none());

        let thread = service.thread_for_post(post.id).await.unwrap();
        assert_eq!(thread.len(), 1);
        assert_eq!(thread[0].comment.id, top.id);
        assert_eq!(thread[0].replies.len(), 1);
        assert_eq!(thread[0].replies[0].comment.id, reply.id);
        assert_eq!(thread[0].author.username, "alice");
    }

    #[tokio::test]
    async fn test_thread_nests_beyond_one_level() {
        let ctx = context();
        let author = create_user(&ctx, "alice").await;
        let post = create_post(&ctx, "hello", author.id).await;
        let service = CommentService::new(&ctx);

        let a = service.create(post.id, request("a", author.id, None)).await.unwrap();
        let b = service.create(post.id, request("b", author.id, Some(a.id))).await.unwrap();
        let c = service.create(post.id, request("c", author.id, Some(b.id))).await.unwrap();

        let thread = service.thread_for_post(post.id).await.unwrap();
        assert_eq!(thread[0].replies[0].replies[0].comment.id, c.id);
    }

    #[tokio::test]
    async fn test_parent_on_other_post_rejected() {
        let ctx = context();
        let author = create_user(&ctx, "alice").await;
        let first = create_post(&ctx, "first", author.id).await;
        let second = create_post(&ctx, "second", author.id).await;
        let service = CommentService::new(&ctx);

        let parent = service.create(first.id, request("a", author.id, None)).await.unwrap();
        let err = service
            .create(second.id, request("b", author.id, Some(parent.id)))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "PARENT_POST_MISMATCH");
    }

    #[tokio::test]
    async fn test_unknown_post_author_or_parent() {
        let ctx = context();
        let author = create_user(&ctx, "alice").await;
        let post = create_post(&ctx, "hello", author.id).await;
        let service = CommentService::new(&ctx);

        let err = service
            .create(Uuid::new_v4(), request("x", author.id, None))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);

        let err = service
            .create(post.id, request("x", Uuid::new_v4(), None))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);

        let err = service
            .create(post.id, request("x", author.id, Some(Uuid::new_v4())))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);

        let err = service.thread_for_post(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.client_message(), "Post not found");

        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[test]
    fn test_build_thread_keeps_sibling_order() {
        let user = User::new("a@example.com".to_string(), "alice".to_string());
        let author = AuthorSummary::from(&user);
        let post_id = Uuid::new_v4();

        let first = Comment::new("1".to_string(), user.id, post_id);
        let second = Comment::new("2".to_string(), user.id, post_id);
        let reply = Comment::reply_to(&first, "1.1".to_string(), user.id);

        let thread = build_thread(
            [first.clone(), second.clone(), reply.clone()]
                .into_iter()
                .map(|comment| CommentWithAuthor {
                    comment,
                    author: author.clone(),
                })
                .collect(),
        );

        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0].comment.id, first.id);
        assert_eq!(thread[1].comment.id, second.id);
        assert_eq!(thread[0].replies[0].comment.id, reply.id);
        assert!(thread[1].replies.is_empty());
    }
}
