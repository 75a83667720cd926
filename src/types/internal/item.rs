use chrono::{DateTime, Utc};

use crate::types::db::item;

/// An item as held by the store, independent of any storage driver
#[derive(Debug, Clone, PartialEq)]
pub struct StoredItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

/// Item input that has passed validation and is ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedItem {
    pub name: String,
    pub price: f64,
}

impl From<item::Model> for StoredItem {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            created_at: DateTime::from_timestamp_millis(model.created_at).unwrap_or_default(),
        }
    }
}
