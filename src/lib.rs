//! Equiplease Equipment Rental Storefront
//!
//! A Rust implementation of the Equiplease rental storefront backend,
//! providing a REST JSON API for browsing, searching and filtering the
//! equipment catalog.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Equipment catalog
        .route("/equipment", get(api::equipment::list_equipment))
        .route("/equipment/:id", get(api::equipment::get_equipment))
        // Storefront metadata
        .route("/filters", get(api::storefront::list_filters))
        .route("/sort-options", get(api::storefront::list_sort_options))
        .route("/categories", get(api::storefront::list_categories))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
