//! HTTP API Layer
//!
//! This crate exposes the settlement core to the surrounding MONI
//! application as a stateless REST API using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: split calculation and settlement computation
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! Every endpoint is a pure request-in/result-out computation; persistence,
//! authentication, and group membership live in the calling application.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use axum::{routing::get, routing::post, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{health, settlement, split};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig) -> Router {
    let state = AppState { config };

    let public_routes = Router::new().route("/health", get(health::health_check));

    let split_routes = Router::new().route("/calculate", post(split::calculate));

    let settlement_routes = Router::new().route("/compute", post(settlement::compute));

    let api_routes = Router::new()
        .nest("/splits", split_routes)
        .nest("/settlements", settlement_routes);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
