//! Service banner endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub status: String,
    pub environment: String,
    pub timestamp: DateTime<Utc>,
}

/// GET / — welcome message with version and environment.
#[utoipa::path(
    get,
    path = "/",
    tag = "general",
    responses((status = 200, description = "Service banner", body = RootResponse))
)]
pub async fn index(State(state): State<Arc<AppState>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to AI Backend API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
        environment: state.environment.clone(),
        timestamp: Utc::now(),
    })
}
