//! Route definitions

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::handlers::{comments, health, posts, tags, users};
use crate::state::AppState;

/// Create the router with every resource route
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(meta_routes())
        .merge(user_routes())
        .merge(post_routes())
        .merge(tag_routes())
}

/// Info, health and stats
fn meta_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::api_info))
        .route("/health", get(health::health_check))
        .route("/stats", get(health::stats))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/:id", get(users::get_user))
}

/// Post routes, with comments and tag links nested under a post
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route("/posts/:id", get(posts::get_post))
        .route("/posts/:id/like", post(posts::like_post))
        .route("/posts/:id/status", patch(posts::update_post_status))
        .route(
            "/posts/:id/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/posts/:id/tags/:tag_id",
            put(tags::link_tag).delete(tags::unlink_tag),
        )
}

/// Tag routes
fn tag_routes() -> Router<AppState> {
    Router::new()
        .route("/tags", get(tags::list_tags).post(tags::create_tag))
        .route("/tags/:id", get(tags::get_tag))
}
