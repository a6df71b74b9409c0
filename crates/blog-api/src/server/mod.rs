//! Server setup and initialization
//!
//! The binary owns the pool: it is opened here, injected into the service
//! context, and closed after the server drains.

use axum::Router;
use blog_common::{AppConfig, AppError};
use blog_db::{close_pool, create_pool, DatabaseConfig};
use blog_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(
        create_router(),
        &config.cors,
        config.app.env.is_production(),
    );
    router.with_state(state)
}

/// Serve `app` on an already-bound listener until ctrl-c
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    let address = config.api.address();
    let state = AppState::new(ServiceContext::from_pool(pool.clone()), config);
    let app = create_app(state);

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {address}: {e}")));

    let result = match listener {
        Ok(listener) => serve(listener, app).await,
        Err(e) => Err(e),
    };

    close_pool(pool).await;
    result
}
