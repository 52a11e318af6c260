use utoipa::OpenApi;

use crate::handlers;
use crate::models::{HealthResponse, Item, ItemFields, ItemResponse, MessageResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-items-json API",
        version = "1.0.0",
        description = "CRUD over a collection of items persisted to a JSON file"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Item,
            ItemFields,
            ItemResponse,
            MessageResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "items", description = "Item collection operations")
    )
)]
pub struct ApiDoc;
