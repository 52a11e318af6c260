use crate::error::{parse_id, ApiError};
use crate::models::MessageResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// DELETE /api/items/{id} handler - Remove an item
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Id of the item to remove")
    ),
    responses(
        (status = 200, description = "Item removed", body = MessageResponse),
        (status = 404, description = "Item not found", body = MessageResponse),
        (status = 500, description = "Store file could not be written", body = MessageResponse)
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = parse_id(&id_str)?;

    if !state.store.remove(id).await? {
        tracing::info!("Item not found for delete with id: {}", id);
        return Err(ApiError::ItemNotFound(id));
    }

    tracing::info!("Deleted item with id: {}", id);
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Item deleted successfully".to_string(),
        }),
    ))
}
