//! Tag handlers, including post/tag linking

use axum::{
    extract::{Path, State},
    Json,
};
use blog_service::dto::{CreateTagRequest, LinkTagResponse, TagListItemResponse, TagResponse};
use blog_service::{ServiceError, TagService};
use uuid::Uuid;

use crate::extractors::{PostTagPath, ValidatedJson};
use crate::response::{ApiResult, Created, Envelope};
use crate::state::AppState;

/// Tags ordered by name, with post counts
///
/// GET /tags
pub async fn list_tags(
    State(state): State<AppState>,
) -> ApiResult<Json<Envelope<Vec<TagListItemResponse>>>> {
    let tags = TagService::new(state.service_context()).find_all().await?;
    Ok(Json(Envelope::list(tags)))
}

/// Look a tag up by UUID or, failing that, by slug
///
/// GET /tags/:id
pub async fn get_tag(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ApiResult<Json<Envelope<TagResponse>>> {
    let service = TagService::new(state.service_context());
    let tag = match key.parse::<Uuid>() {
        Ok(id) => service.find_by_id(id).await?,
        Err(_) => service.find_by_slug(&key).await?,
    };
    let tag = tag.ok_or_else(|| ServiceError::not_found("Tag", &key))?;
    Ok(Json(Envelope::ok(tag)))
}

/// POST /tags
pub async fn create_tag(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateTagRequest>,
) -> ApiResult<Created<Json<Envelope<TagResponse>>>> {
    let tag = TagService::new(state.service_context())
        .create(request)
        .await?;
    Ok(Created(Json(
        Envelope::ok(tag).with_message("Tag created successfully"),
    )))
}

/// Attach a tag; repeating the call is a no-op reported as `changed: false`
///
/// PUT /posts/:id/tags/:tag_id
pub async fn link_tag(
    State(state): State<AppState>,
    path: PostTagPath,
) -> ApiResult<Json<Envelope<LinkTagResponse>>> {
    let link = TagService::new(state.service_context())
        .link(path.post_id, path.tag_id)
        .await?;
    Ok(Json(Envelope::ok(link)))
}

/// DELETE /posts/:id/tags/:tag_id
pub async fn unlink_tag(
    State(state): State<AppState>,
    path: PostTagPath,
) -> ApiResult<Json<Envelope<LinkTagResponse>>> {
    let link = TagService::new(state.service_context())
        .unlink(path.post_id, path.tag_id)
        .await?;
    Ok(Json(Envelope::ok(link)))
}
