//! Axum route handlers for the orderly orders API.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use orderly_core::{Order, OrderDraft, OrderId, ValidationError};
use orderly_store::OrderStore;

use crate::{config::CorsMode, error::ApiError};

// ── Shared state ──────────────────────────────────────────────────────────────

pub type Store = Arc<dyn OrderStore>;

// ── Request types ─────────────────────────────────────────────────────────────

/// Body of `POST /orders`. Fields are optional so that validation failures
/// answer with the API's 400 contract instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct CreateOrderBody {
    pub item: Option<String>,
    pub quantity: Option<f64>,
}

/// Body of `PUT /orders`. Carries an optional ID; without one the request
/// behaves exactly like a create.
#[derive(Debug, Deserialize)]
pub struct PutOrderBody {
    pub id: Option<String>,
    pub item: Option<String>,
    pub quantity: Option<f64>,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router backed by the given order store.
pub fn create_router(store: Store, cors: CorsMode) -> Router {
    let router = Router::new()
        .route("/orders", get(list_orders).post(create_order).put(put_order))
        .route("/orders/{order_id}", get(get_order))
        .route("/health", get(health))
        .with_state(store)
        .layer(TraceLayer::new_for_http());

    match cors {
        CorsMode::Permissive => router.layer(CorsLayer::permissive()),
        CorsMode::Disabled => router,
    }
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `POST /orders` — validate the payload and store a new order.
///
/// The order ID is generated server-side; the stored order is echoed back.
///
/// # Errors
/// Returns [`ApiError::MalformedBody`] if the body is not JSON,
/// [`ApiError::InvalidOrder`] if `item` or `quantity` is missing or invalid,
/// or [`ApiError::Store`] if the write fails.
pub async fn create_order(
    State(store): State<Store>,
    body: Result<Json<CreateOrderBody>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let Json(body) = body?;
    tracing::info!(request = ?body, "create order");
    let draft = OrderDraft::from_parts(body.item, body.quantity)?;
    let order = store.create(draft).await?;
    Ok(Json(order))
}

/// `GET /orders/:order_id` — fetch one order by ID.
///
/// # Errors
/// Returns [`ApiError::NotFound`] if no order exists under the ID, or
/// [`ApiError::Store`] if the lookup fails.
pub async fn get_order(
    State(store): State<Store>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    tracing::info!(%order_id, "get order");
    let id = OrderId::new(order_id);
    match store.get(&id).await? {
        Some(order) => Ok(Json(order)),
        None => Err(ApiError::NotFound(id)),
    }
}

/// `GET /orders` — list every stored order.
///
/// # Errors
/// Returns [`ApiError::Store`] if the scan fails.
pub async fn list_orders(State(store): State<Store>) -> Result<Json<Vec<Order>>, ApiError> {
    tracing::info!("list orders");
    let orders = store.list().await?;
    Ok(Json(orders))
}

/// `PUT /orders` — create or replace an order.
///
/// A body carrying an `id` replaces the full record stored under that ID,
/// whether or not one already exists; a body without an `id` is a create.
///
/// # Errors
/// Returns [`ApiError::MalformedBody`] if the body is not JSON,
/// [`ApiError::InvalidOrder`] if `item` or `quantity` is missing or invalid
/// or the supplied `id` is blank, or [`ApiError::Store`] if the write fails.
pub async fn put_order(
    State(store): State<Store>,
    body: Result<Json<PutOrderBody>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let Json(body) = body?;
    tracing::info!(request = ?body, "put order");
    let draft = OrderDraft::from_parts(body.item, body.quantity)?;
    let order = match body.id {
        // A blank id cannot be addressed through `GET /orders/{order_id}`.
        Some(id) if id.trim().is_empty() => {
            return Err(ApiError::InvalidOrder(ValidationError::BlankId))
        }
        Some(id) => store.put(OrderId::new(id), draft).await?,
        None => store.create(draft).await?,
    };
    Ok(Json(order))
}
