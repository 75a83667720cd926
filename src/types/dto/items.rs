use chrono::SecondsFormat;
use poem_openapi::Object;
use serde_json::Value;

use crate::types::internal::StoredItem;

/// Raw create-item input
///
/// Fields are kept as untyped JSON so the gateway can apply its own coercion
/// rules. An explicit `null` is preserved as `Some(Value::Null)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateItemRequest {
    pub name: Option<Value>,
    pub price: Option<Value>,
}

impl CreateItemRequest {
    /// Pull `name` and `price` out of a request body
    ///
    /// Bodies that are not JSON objects yield a request with both fields absent.
    pub fn from_json(body: &Value) -> Self {
        Self {
            name: body.get("name").cloned(),
            price: body.get("price").cloned(),
        }
    }
}

/// Response model representing an item
#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct ItemResponse {
    /// Unique identifier for the item
    pub id: String,

    /// Name of the item
    pub name: String,

    /// Price of the item (integral prices are sent as JSON integers)
    pub price: Value,

    /// Timestamp when the item was created (ISO 8601 format)
    pub created_at: String,
}

impl From<StoredItem> for ItemResponse {
    fn from(item: StoredItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: price_to_json(item.price),
            created_at: item.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Whole prices go out as integers (`50000`, not `50000.0`)
pub fn price_to_json(price: f64) -> Value {
    // Integers are exact in f64 only up to 2^53
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    if price.fract() == 0.0 && price.abs() <= MAX_EXACT {
        Value::from(price as i64)
    } else {
        Value::from(price)
    }
}

/// Response model for item deletion
#[derive(Object, Debug)]
pub struct DeleteItemResponse {
    pub success: bool,
}
