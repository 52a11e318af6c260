use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::MessageResponse;

pub const NOT_FOUND_MESSAGE: &str = "Item not found";

/// Custom error type for API endpoints
///
/// Every variant is rendered as a JSON `{ "message": ... }` body.
#[derive(Debug)]
pub enum ApiError {
    /// No item carries the requested id
    ItemNotFound(i64),
    /// Path id is not an integer, so it cannot match any item
    InvalidId(String),
    /// Replacement body for an existing item is not a JSON object
    InvalidBody(String),
    /// Writing the store file failed
    Persistence(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::ItemNotFound(id) => {
                tracing::debug!("No item with id {}", id);
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string())
            }
            ApiError::InvalidId(raw) => {
                tracing::debug!("Path id '{}' is not an integer", raw);
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string())
            }
            ApiError::InvalidBody(reason) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Request body must be a JSON object: {}", reason),
            ),
            ApiError::Persistence(err) => {
                tracing::error!("Persistence failure: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to persist items: {}", err),
                )
            }
        };

        (status, Json(MessageResponse { message })).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Persistence(err)
    }
}

/// Parse a path id the way lookups need it
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))
}
