use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::errors::InternalError;
use crate::services::{ItemGateway, SystemClock};
use crate::stores::ItemStore;

/// Process-scoped application state
///
/// Created once in main.rs after the database is connected and migrated,
/// shared with the API layer, and closed on shutdown.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(db)
///   ├─ db (DatabaseConnection)
///   └─ item_gateway (Arc<ItemGateway>)
///        └─ ItemStore (db) + SystemClock
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub item_gateway: Arc<ItemGateway>,
}

impl AppData {
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::debug!("Initializing AppData...");

        let item_store = Arc::new(ItemStore::new(db.clone()));
        let item_gateway = Arc::new(ItemGateway::new(item_store, Arc::new(SystemClock)));

        Self { db, item_gateway }
    }

    /// Release the database connection pool
    pub async fn close(&self) -> Result<(), InternalError> {
        self.db
            .clone()
            .close()
            .await
            .map_err(|e| InternalError::database("close_database", e))?;

        tracing::info!("Database connection closed");
        Ok(())
    }
}
