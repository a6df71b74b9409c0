//! Service info, health and statistics handlers

use axum::{extract::State, http::StatusCode, Json};
use blog_service::dto::StatsResponse;
use blog_service::PostService;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::response::{ApiResult, Envelope};
use crate::state::AppState;

/// Body of `GET /`
#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub name: String,
    pub version: &'static str,
    pub environment: String,
    pub endpoints: &'static [&'static str],
}

const ENDPOINTS: &[&str] = &[
    "GET /health",
    "GET /stats",
    "GET|POST /users",
    "GET /users/:id",
    "GET|POST /posts",
    "GET /posts/:id",
    "POST /posts/:id/like",
    "PATCH /posts/:id/status",
    "GET|POST /posts/:id/comments",
    "PUT|DELETE /posts/:id/tags/:tag_id",
    "GET|POST /tags",
    "GET /tags/:id",
];

/// Body of `GET /health`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub environment: String,
    pub timestamp: DateTime<Utc>,
    pub uptime_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

/// API info
///
/// GET /
pub async fn api_info(State(state): State<AppState>) -> Json<ApiInfo> {
    let config = state.config();
    Json(ApiInfo {
        name: config.app.name.clone(),
        version: env!("CARGO_PKG_VERSION"),
        environment: config.app.env.to_string(),
        endpoints: ENDPOINTS,
    })
}

/// Health check with a storage probe; 503 when the probe fails
///
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let probe = state.service_context().store().ping().await;

    let mut response = HealthResponse {
        status: "healthy",
        database: "connected",
        environment: state.config().app.env.to_string(),
        timestamp: Utc::now(),
        uptime_secs: state.uptime().as_secs(),
        error: None,
    };

    match probe {
        Ok(()) => (StatusCode::OK, Json(response)),
        Err(e) => {
            warn!(error = %e, "Health probe failed");
            response.status = "unhealthy";
            response.database = "disconnected";
            response.error = Some("Database connection failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(response))
        }
    }
}

/// Aggregate counts
///
/// GET /stats
pub async fn stats(State(state): State<AppState>) -> ApiResult<Json<Envelope<StatsResponse>>> {
    let stats = PostService::new(state.service_context()).stats().await?;
    Ok(Json(Envelope::ok(stats)))
}
