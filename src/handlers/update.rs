use crate::error::{parse_id, ApiError};
use crate::models::{ItemFields, ItemResponse, MessageResponse};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value as JsonValue;

/// PUT /api/items/{id} handler - Replace an item
///
/// The stored item becomes `{id, ...body}`. Fields missing from the body are
/// dropped, and a body `id` is ignored in favour of the path. An unknown id
/// is a 404 whatever the body holds.
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Id of the item to replace")
    ),
    request_body = ItemFields,
    responses(
        (status = 200, description = "Item replaced", body = ItemResponse),
        (status = 404, description = "Item not found", body = MessageResponse),
        (status = 422, description = "Body for an existing item is not a JSON object", body = MessageResponse),
        (status = 500, description = "Store file could not be written", body = MessageResponse)
    ),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let id = parse_id(&id_str)?;

    let fields = match payload {
        Ok(Json(body)) => serde_json::from_value::<ItemFields>(body).map_err(|e| e.to_string()),
        Err(rejection) => Err(rejection.body_text()),
    };

    let fields = match fields {
        Ok(fields) => fields,
        Err(reason) => {
            if state.store.contains(id).await {
                tracing::info!("Rejected update body for id {}: {}", id, reason);
                return Err(ApiError::InvalidBody(reason));
            }
            tracing::info!("Item not found for update with id: {}", id);
            return Err(ApiError::ItemNotFound(id));
        }
    };

    match state.store.replace(id, fields).await? {
        Some(item) => {
            tracing::info!("Updated item with id: {}", id);
            Ok((
                StatusCode::OK,
                Json(ItemResponse {
                    message: "Item updated successfully".to_string(),
                    item,
                }),
            ))
        }
        None => {
            tracing::info!("Item not found for update with id: {}", id);
            Err(ApiError::ItemNotFound(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::NOT_FOUND_MESSAGE;
    use crate::handlers::test_support::TestApp;
    use crate::models::{ItemResponse, MessageResponse};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_update_endpoint_replaces_wholesale() {
        let app = TestApp::new(json!([{"id": 1, "name": "a", "description": "b"}]));

        let (status, response): (_, ItemResponse) = app
            .send_json("PUT", "/api/items/1", Some(json!({"name": "c"})))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.message, "Item updated successfully");
        assert_eq!(
            serde_json::to_value(&response.item).unwrap(),
            json!({"id": 1, "name": "c"})
        );
        assert_eq!(app.list().await, json!([{"id": 1, "name": "c"}]));
    }

    #[tokio::test]
    async fn test_update_endpoint_path_id_wins() {
        let app = TestApp::new(json!([{"id": 1, "name": "a"}]));

        let (status, response): (_, ItemResponse) = app
            .send_json("PUT", "/api/items/1", Some(json!({"id": 77, "name": "b"})))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.item.id, 1);
        assert_eq!(app.list().await, json!([{"id": 1, "name": "b"}]));
    }

    #[tokio::test]
    async fn test_update_endpoint_keeps_position() {
        let app = TestApp::new(json!([
            {"id": 1, "name": "a"},
            {"id": 2, "name": "b"},
            {"id": 3, "name": "c"}
        ]));

        let (status, _) = app
            .send("PUT", "/api/items/2", Some(json!({"name": "B", "color": "red"})))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            app.list().await,
            json!([
                {"id": 1, "name": "a"},
                {"id": 2, "name": "B", "color": "red"},
                {"id": 3, "name": "c"}
            ])
        );
        assert_eq!(serde_json::to_value(app.on_disk()).unwrap(), app.list().await);
    }

    #[tokio::test]
    async fn test_update_endpoint_not_found() {
        let app = TestApp::new(json!([]));
        let before = app.raw_file();

        let (status, response): (_, MessageResponse) = app
            .send_json("PUT", "/api/items/99", Some(json!({"name": "x"})))
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(response.message, NOT_FOUND_MESSAGE);
        assert_eq!(app.raw_file(), before);
    }

    #[tokio::test]
    async fn test_update_endpoint_not_found_with_any_body() {
        let app = TestApp::new(json!([]));
        let before = app.raw_file();

        for body in [Some(json!({"name": 42})), Some(json!([1, 2])), Some(json!("text")), None] {
            let (status, response): (_, MessageResponse) =
                app.send_json("PUT", "/api/items/99", body).await;

            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(response.message, NOT_FOUND_MESSAGE);
        }

        assert_eq!(app.raw_file(), before);
    }

    #[tokio::test]
    async fn test_update_endpoint_accepts_any_field_types() {
        let app = TestApp::new(json!([{"id": 1, "name": "a", "description": "b"}]));
        let body = json!({"name": 42, "description": null, "tags": ["x"]});

        let (status, response): (_, ItemResponse) =
            app.send_json("PUT", "/api/items/1", Some(body)).await;

        let expected = json!({"id": 1, "name": 42, "description": null, "tags": ["x"]});
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::to_value(&response.item).unwrap(), expected);
        assert_eq!(app.list().await, json!([expected]));
    }

    #[tokio::test]
    async fn test_update_endpoint_non_object_body_on_existing_item() {
        let app = TestApp::new(json!([{"id": 1, "name": "a"}]));
        let before = app.raw_file();

        let (status, _) = app.send("PUT", "/api/items/1", Some(json!([1, 2]))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = app.send("PUT", "/api/items/1", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        assert_eq!(app.raw_file(), before);
    }

    #[tokio::test]
    async fn test_update_endpoint_non_integer_id() {
        let app = TestApp::new(json!([{"id": 1, "name": "a"}]));
        let before = app.raw_file();

        let (status, response): (_, MessageResponse) = app
            .send_json("PUT", "/api/items/abc", Some(json!({"name": "x"})))
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(response.message, NOT_FOUND_MESSAGE);
        assert_eq!(app.raw_file(), before);
    }
}
