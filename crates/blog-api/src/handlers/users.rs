//! User handlers

use axum::{extract::State, Json};
use blog_service::dto::{CreateUserRequest, UserDetailResponse, UserListItemResponse, UserResponse};
use blog_service::{DomainError, ServiceError, UserService};

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, Envelope};
use crate::state::AppState;

/// List users, newest first, with post and comment counts
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> ApiResult<Json<Envelope<Vec<UserListItemResponse>>>> {
    let users = UserService::new(state.service_context()).find_all().await?;
    Ok(Json(Envelope::list(users)))
}

/// Get a user with their posts
///
/// GET /users/:id
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<Envelope<UserDetailResponse>>> {
    let user = UserService::new(state.service_context())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::from(DomainError::UserNotFound(id)))?;
    Ok(Json(Envelope::ok(user)))
}

/// Create a user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<Envelope<UserResponse>>>> {
    let user = UserService::new(state.service_context())
        .create(request)
        .await?;
    Ok(Created(Json(
        Envelope::ok(user).with_message("User created successfully"),
    )))
}
