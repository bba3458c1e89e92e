//! OpenAPI document and interactive docs for the documented variant.

use axum::routing::get;
use axum::{Json, Router};
use catalog::Item;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::error::ErrorBody;
use crate::routes;
use crate::routes::health::HealthResponse;
use crate::routes::items::{CreateItemRequest, ItemList};
use crate::routes::root::RootResponse;

/// Path of the interactive documentation page.
pub const DOCS_PATH: &str = "/docs";

/// Path of the raw OpenAPI document.
pub const SPEC_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AI Backend API",
        description = "Demonstration API serving a fixed set of items"
    ),
    paths(
        routes::root::index,
        routes::health::check,
        routes::items::list,
        routes::items::get,
        routes::items::create,
    ),
    components(schemas(
        Item,
        ItemList,
        CreateItemRequest,
        RootResponse,
        HealthResponse,
        ErrorBody,
    )),
    tags(
        (name = "general", description = "Service banner and health"),
        (name = "items", description = "Item listing, lookup and creation")
    )
)]
pub struct ApiDoc;

async fn document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Routes serving the OpenAPI document and the docs UI.
pub fn router<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new()
        .route(SPEC_PATH, get(document))
        .merge(Scalar::with_url(DOCS_PATH, ApiDoc::openapi()))
}
