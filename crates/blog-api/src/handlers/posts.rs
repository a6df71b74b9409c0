//! Post handlers

use axum::{extract::State, Json};
use blog_service::dto::{
    CreatePostRequest, PostDetailResponse, PostListItemResponse, PostResponse,
    UpdatePostStatusRequest,
};
use blog_service::{DomainError, PostService, ServiceError};

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, Envelope};
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(
    State(state): State<AppState>,
) -> ApiResult<Json<Envelope<Vec<PostListItemResponse>>>> {
    let posts = PostService::new(state.service_context()).find_all().await?;
    Ok(Json(Envelope::list(posts)))
}

/// Get a post with author, tags and comment thread; counts as a view
///
/// GET /posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<Envelope<PostDetailResponse>>> {
    let post = PostService::new(state.service_context())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::from(DomainError::PostNotFound(id)))?;
    Ok(Json(Envelope::ok(post)))
}

/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<Envelope<PostResponse>>>> {
    let post = PostService::new(state.service_context())
        .create(request)
        .await?;
    Ok(Created(Json(
        Envelope::ok(post).with_message("Post created successfully"),
    )))
}

/// POST /posts/:id/like
pub async fn like_post(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<Envelope<PostResponse>>> {
    let post = PostService::new(state.service_context()).like(id).await?;
    Ok(Json(Envelope::ok(post)))
}

/// PATCH /posts/:id/status
pub async fn update_post_status(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdatePostStatusRequest>,
) -> ApiResult<Json<Envelope<PostResponse>>> {
    let post = PostService::new(state.service_context())
        .update_status(id, request.status)
        .await?;
    Ok(Json(Envelope::ok(post)))
}
