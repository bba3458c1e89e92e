//! Item listing, lookup and creation endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use catalog::{Item, NewItem};
use common::ItemId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::AppState;
use crate::error::{ApiError, ErrorBody};

// -- Request types --

/// Body of `POST /api/items`. Only `name` is required.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    #[schema(example = "Test Item")]
    pub name: Option<String>,
    #[schema(example = "Test description")]
    pub description: Option<String>,
}

impl From<CreateItemRequest> for NewItem {
    fn from(req: CreateItemRequest) -> Self {
        NewItem {
            name: req.name,
            description: req.description,
        }
    }
}

// -- Response types --

#[derive(Debug, Serialize, ToSchema)]
pub struct ItemList {
    pub items: Vec<Item>,
    pub count: usize,
}

// -- Handlers --

/// GET /api/items — list the well-known items.
#[utoipa::path(
    get,
    path = "/api/items",
    tag = "items",
    responses((status = 200, description = "All items", body = ItemList))
)]
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Json<ItemList> {
    let items = state.catalog.list().to_vec();
    Json(ItemList {
        count: items.len(),
        items,
    })
}

/// GET /api/items/{id} — look up a single item.
///
/// Ids that are not integers do not match this route at all.
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 404, description = "No item with this id, or the id is negative", body = ErrorBody)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::RouteNotFound)?;
    // Ids are non-negative integers; anything else is not a route.
    if id < 0 {
        return Err(ApiError::RouteNotFound);
    }
    let item = state.catalog.get(ItemId::new(id))?;
    Ok(Json(item.clone()))
}

/// POST /api/items — build a new item from the request body.
///
/// The body must be a JSON object; arrays, scalars and `null` carry no name.
#[utoipa::path(
    post,
    path = "/api/items",
    tag = "items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Name missing, body not a JSON object, or fields of the wrong type", body = ErrorBody)
    )
)]
#[tracing::instrument(skip(state, payload))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(body) = payload?;
    let req: CreateItemRequest =
        serde_json::from_value(Value::Object(body)).map_err(|e| ApiError::BadRequest {
            error: "Invalid request body".to_string(),
            message: Some(e.to_string()),
        })?;
    let item = state.catalog.create(req.into())?;
    Ok((StatusCode::CREATED, Json(item)))
}
