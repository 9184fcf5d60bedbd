//! Error types for the gateway crate.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use orderly_core::{OrderId, ValidationError};
use orderly_store::StoreError;

/// Errors that can occur during order request handling.
///
/// Every invalid payload answers with the same
/// `{"message": "Bad request payload"}` body; the specific reason goes to the
/// log, not the wire. Store failures stay opaque on the wire as well.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The request body could not be read as the expected JSON shape.
    #[error("Bad request payload")]
    MalformedBody(#[from] JsonRejection),

    /// The request body was well-formed JSON but failed order validation.
    #[error("Bad request payload")]
    InvalidOrder(#[from] ValidationError),

    /// No order exists under the requested identifier.
    #[error("order not found: {0}")]
    NotFound(OrderId),

    /// An error propagated from the persistence layer.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::MalformedBody(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            ApiError::InvalidOrder(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::NotFound(id) => (StatusCode::NOT_FOUND, id.to_string()),
            ApiError::Store(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        let message = if status.is_server_error() {
            tracing::error!(%status, %detail, "request failed");
            "Internal server error".to_owned()
        } else {
            tracing::warn!(%status, %detail, "request rejected");
            self.to_string()
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
