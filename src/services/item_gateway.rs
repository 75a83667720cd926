use std::sync::Arc;

use chrono::DateTime;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::InternalError;
use crate::services::clock::Clock;
use crate::services::item_validator::ItemValidator;
use crate::stores::ItemCollection;
use crate::types::internal::StoredItem;

/// Validation and persistence boundary for items
///
/// The only place item rules are enforced. Storage is reached through the
/// `ItemCollection` capability so the gateway does not depend on a driver.
pub struct ItemGateway {
    collection: Arc<dyn ItemCollection>,
    clock: Arc<dyn Clock>,
}

impl ItemGateway {
    pub fn new(collection: Arc<dyn ItemCollection>, clock: Arc<dyn Clock>) -> Self {
        Self { collection, clock }
    }

    /// List all items, newest first
    pub async fn list(&self) -> Result<Vec<StoredItem>, InternalError> {
        self.collection.list_newest_first().await
    }

    /// Validate raw input and store a new item
    ///
    /// # Returns
    /// * `Ok(StoredItem)` - The item as stored, with its new id and creation time
    /// * `Err(InternalError::Validation)` - Name or price failed validation; nothing stored
    /// * `Err(InternalError::Database)` - Store failure
    pub async fn create(
        &self,
        name: Option<&Value>,
        price: Option<&Value>,
    ) -> Result<StoredItem, InternalError> {
        let validated = ItemValidator::validate(name, price)?;

        // Truncate to the stored precision so the returned item matches later listings
        let now = self.clock.now();
        let created_at = DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now);

        let item = StoredItem {
            id: Uuid::now_v7().to_string(),
            name: validated.name,
            price: validated.price,
            created_at,
        };

        let stored = self.collection.insert(item).await?;
        tracing::debug!("Created item {} ({})", stored.id, stored.name);

        Ok(stored)
    }

    /// Delete an item by id
    ///
    /// Unknown ids are not an error; the call succeeds without changing anything.
    pub async fn delete(&self, id: &str) -> Result<(), InternalError> {
        let removed = self.collection.delete_by_id(id).await?;
        if removed {
            tracing::debug!("Deleted item {}", id);
        } else {
            tracing::debug!("Delete requested for unknown item {}", id);
        }

        Ok(())
    }
}

impl std::fmt::Debug for ItemGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemGateway")
            .field("collection", &"<item_collection>")
            .finish()
    }
}
