use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// A single stored item
///
/// `id`, `name` and `description` are the known fields. Their values are not
/// type-checked: `None` means the key was absent, `Some(Value::Null)` an
/// explicit `null`. Anything else the caller sends is kept in `extra` and
/// written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub id: i64,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<JsonValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<JsonValue>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

/// Replacement body for PUT /api/items/{id}
///
/// Same shape as [`Item`] minus the required `id`; the path id is always used.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct ItemFields {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<JsonValue>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<JsonValue>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

// A key that is present maps to `Some`, even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<JsonValue>, D::Error>
where
    D: Deserializer<'de>,
{
    JsonValue::deserialize(deserializer).map(Some)
}

impl ItemFields {
    /// Build the record that replaces the stored one. A body `id` is dropped.
    pub fn into_item(mut self, id: i64) -> Item {
        self.extra.remove("id");
        Item {
            id,
            name: self.name,
            description: self.description,
            extra: self.extra,
        }
    }
}

/// Response type for successful create and update operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemResponse {
    pub message: String,
    pub item: Item,
}

/// Response type carrying only a message (delete, errors)
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub items: usize,
    pub store_file: String,
}
