//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! configuration and the process start time used by the health probe.

use std::sync::Arc;
use std::time::{Duration, Instant};

use blog_common::AppConfig;
use blog_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all repositories
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    started_at: Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Time since the state was built
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("env", &self.config.app.env)
            .finish()
    }
}
