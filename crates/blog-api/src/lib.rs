//! # blog-api
//!
//! Thin REST layer over the content services, built with Axum.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, run, serve};
pub use state::AppState;
