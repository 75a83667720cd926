// Test utilities shared across unit tests
// Only compiled when running tests

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::{Arc, Mutex};

use crate::errors::InternalError;
use crate::services::{Clock, ItemGateway};
use crate::stores::{ItemCollection, ItemStore};
use crate::types::internal::StoredItem;

/// Creates an in-memory SQLite database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Clock that advances one second on every reading
pub struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            next: Mutex::new(Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().unwrap();
        let now = *next;
        *next = now + Duration::seconds(1);
        now
    }
}

/// Clock stuck at one instant, so every item shares a creation time
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Vec-backed collection for exercising the gateway without a database
#[derive(Default)]
pub struct InMemoryItemCollection {
    items: Mutex<Vec<StoredItem>>,
}

impl InMemoryItemCollection {
    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }
}

#[async_trait]
impl ItemCollection for InMemoryItemCollection {
    async fn list_newest_first(&self) -> Result<Vec<StoredItem>, InternalError> {
        let mut items = self.items.lock().unwrap().clone();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        Ok(items)
    }

    async fn insert(&self, item: StoredItem) -> Result<StoredItem, InternalError> {
        self.items.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, InternalError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() != before)
    }
}

/// Collection whose every call fails like a dropped connection
pub struct FailingItemCollection;

#[async_trait]
impl ItemCollection for FailingItemCollection {
    async fn list_newest_first(&self) -> Result<Vec<StoredItem>, InternalError> {
        Err(InternalError::database("list_items", sea_orm::DbErr::Custom("connection closed".to_string())))
    }

    async fn insert(&self, _item: StoredItem) -> Result<StoredItem, InternalError> {
        Err(InternalError::database("insert_item", sea_orm::DbErr::Custom("connection closed".to_string())))
    }

    async fn delete_by_id(&self, _id: &str) -> Result<bool, InternalError> {
        Err(InternalError::database("delete_item", sea_orm::DbErr::Custom("connection closed".to_string())))
    }
}

/// Gateway over the in-memory collection with a stepping clock
///
/// Returns (gateway, collection) so tests can inspect what was stored.
pub fn setup_in_memory_gateway() -> (ItemGateway, Arc<InMemoryItemCollection>) {
    let collection = Arc::new(InMemoryItemCollection::default());
    let gateway = ItemGateway::new(collection.clone(), Arc::new(SteppingClock::new()));
    (gateway, collection)
}

/// Gateway over a migrated in-memory SQLite database with a stepping clock
pub async fn setup_sqlite_gateway() -> (DatabaseConnection, ItemGateway) {
    setup_sqlite_gateway_with_clock(Arc::new(SteppingClock::new())).await
}

pub async fn setup_sqlite_gateway_with_clock(clock: Arc<dyn Clock>) -> (DatabaseConnection, ItemGateway) {
    let db = setup_test_db().await;
    let store = Arc::new(ItemStore::new(db.clone()));
    let gateway = ItemGateway::new(store, clock);
    (db, gateway)
}
