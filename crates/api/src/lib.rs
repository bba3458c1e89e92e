//! HTTP API serving the demo item catalog.
//!
//! Provides the welcome, health and item endpoints, with structured
//! logging (tracing), Prometheus metrics, and an optional variant that
//! also serves OpenAPI documentation.

pub mod config;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use catalog::Catalog;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::{method_not_allowed, route_not_found};

/// Shared application state accessible from all handlers.
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub environment: String,
}

/// Creates the default application state from configuration.
pub fn create_default_state(config: &Config) -> Arc<AppState> {
    Arc::new(AppState {
        catalog: Catalog::new(),
        environment: config.environment.clone(),
    })
}

/// Creates the plain application: the five API routes plus `/metrics`.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    with_middleware(build_router(state, metrics_handle))
}

/// Creates the documented application: [`create_app`] plus `/openapi.json`
/// and the interactive docs at `/docs`.
pub fn create_documented_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    with_middleware(build_router(state, metrics_handle).merge(openapi::router()))
}

fn build_router(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_router = Router::new()
        .route("/items", get(routes::items::list).post(routes::items::create))
        .route("/items/{id}", get(routes::items::get))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors);

    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::root::index))
        .route("/health", get(routes::health::check))
        .method_not_allowed_fallback(method_not_allowed)
        .nest("/api", api_router)
        .fallback(route_not_found)
        .with_state(state)
        .merge(metrics_router)
}

/// Wraps a router in the request logging, panic and tracing layers
/// shared by both variants.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(axum::middleware::from_fn(middleware::track_requests))
        .layer(TraceLayer::new_for_http())
}
