//! API error types with HTTP response mapping.

use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog::CatalogError;
use serde::Serialize;
use utoipa::ToSchema;

const ROUTE_NOT_FOUND_MESSAGE: &str = "The requested URL was not found on the server. \
     If you entered the URL manually please check your spelling and try again.";

/// JSON body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client, with optional detail.
    BadRequest {
        error: String,
        message: Option<String>,
    },
    /// No route matches the request path.
    RouteNotFound,
    /// The route exists but not for this method.
    MethodNotAllowed,
    /// Internal server error. The detail is logged, never returned.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, body(msg, None)),
            ApiError::BadRequest { error, message } => (StatusCode::BAD_REQUEST, body(error, message)),
            ApiError::RouteNotFound => (
                StatusCode::NOT_FOUND,
                body("Not found", Some(ROUTE_NOT_FOUND_MESSAGE.to_string())),
            ),
            ApiError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, body("Method not allowed", None))
            }
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    body("Internal server error", None),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

fn body(error: impl Into<String>, message: Option<String>) -> ErrorBody {
    ErrorBody {
        error: error.into(),
        message,
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::ItemNotFound { .. } => ApiError::NotFound(err.to_string()),
            CatalogError::NameRequired => ApiError::BadRequest {
                error: err.to_string(),
                message: None,
            },
        }
    }
}

/// A body that is missing or not a JSON object cannot carry a name.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(%rejection, "rejected request body");
        ApiError::BadRequest {
            error: CatalogError::NameRequired.to_string(),
            message: Some(rejection.body_text()),
        }
    }
}

/// Turns a panic caught by `CatchPanicLayer` into a generic 500 response.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError::Internal(detail).into_response()
}

/// Fallback for paths no route matches.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Fallback for known paths requested with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
