//! Comment handlers, nested under posts

use axum::{extract::State, Json};
use blog_service::dto::{CommentResponse, CommentThreadResponse, CreateCommentRequest};
use blog_service::CommentService;

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, Envelope};
use crate::state::AppState;

/// Threaded comments of a post; `count` is the number of top-level comments
///
/// GET /posts/:id/comments
pub async fn list_comments(
    State(state): State<AppState>,
    IdPath(post_id): IdPath,
) -> ApiResult<Json<Envelope<Vec<CommentThreadResponse>>>> {
    let thread = CommentService::new(state.service_context())
        .thread_for_post(post_id)
        .await?;
    Ok(Json(Envelope::list(thread)))
}

/// POST /posts/:id/comments
pub async fn create_comment(
    State(state): State<AppState>,
    IdPath(post_id): IdPath,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<Envelope<CommentResponse>>>> {
    let comment = CommentService::new(state.service_context())
        .create(post_id, request)
        .await?;
    Ok(Created(Json(
        Envelope::ok(comment).with_message("Comment created successfully"),
    )))
}
