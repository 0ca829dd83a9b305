//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for the household dashboard
//! - Query and form extractors
//! - Error and flash-message responses

pub mod response;
pub mod routes;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use axum::Router;
use casa_client::HouseholdApi;
use casa_shared::config::DashboardConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Household API the views are computed from.
    pub api: Arc<dyn HouseholdApi>,
    /// Dashboard view settings.
    pub dashboard: DashboardConfig,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
