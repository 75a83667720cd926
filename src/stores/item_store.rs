use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};

use crate::errors::InternalError;
use crate::types::db::item::{self, ActiveModel, Entity as Item};
use crate::types::internal::StoredItem;

/// Document collection capability the item gateway is written against
///
/// Implementations only move data; validation happens before `insert` is called.
#[async_trait]
pub trait ItemCollection: Send + Sync {
    /// All items, newest `created_at` first, ties broken by descending `id`
    async fn list_newest_first(&self) -> Result<Vec<StoredItem>, InternalError>;

    /// Persist a fully-formed item
    async fn insert(&self, item: StoredItem) -> Result<StoredItem, InternalError>;

    /// Remove the item with `id`; returns whether anything was removed
    async fn delete_by_id(&self, id: &str) -> Result<bool, InternalError>;
}

/// ItemStore keeps items in the `items` table of the configured database
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemCollection for ItemStore {
    async fn list_newest_first(&self) -> Result<Vec<StoredItem>, InternalError> {
        let models = Item::find()
            .order_by_desc(item::Column::CreatedAt)
            // Ids are time-ordered, so this breaks same-millisecond ties newest first
            .order_by_desc(item::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_items", e))?;

        Ok(models.into_iter().map(StoredItem::from).collect())
    }

    async fn insert(&self, item: StoredItem) -> Result<StoredItem, InternalError> {
        let new_item = ActiveModel {
            id: Set(item.id),
            name: Set(item.name),
            price: Set(item.price),
            created_at: Set(item.created_at.timestamp_millis()),
        };

        let model = new_item
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_item", e))?;

        Ok(StoredItem::from(model))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, InternalError> {
        let result = Item::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        Ok(result.rows_affected > 0)
    }
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("db", &"<connection>")
            .finish()
    }
}
