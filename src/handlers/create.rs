use crate::error::ApiError;
use crate::models::{Item, ItemResponse, MessageResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// POST /api/items handler - Append an item
///
/// The caller supplies the `id`. Other fields are stored as sent, whatever
/// their types. Duplicate ids are not rejected.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = Item,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 422, description = "Body is not an object with an integer id"),
        (status = 500, description = "Store file could not be written", body = MessageResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(item): Json<Item>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let item = state.store.create(item).await?;

    tracing::info!("Created item with id: {}", item.id);
    Ok((
        StatusCode::CREATED,
        Json(ItemResponse {
            message: "Item created successfully".to_string(),
            item,
        }),
    ))
}
