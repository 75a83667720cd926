// Common test utilities for integration tests
#![allow(dead_code)]

use menu_items_backend::api::build_routes;
use menu_items_backend::app_data::AppData;
use migration::{Migrator, MigratorTrait};
use poem::test::{TestClient, TestResponse};
use poem::Route;
use sea_orm::{Database, DatabaseConnection};
use serde_json::Value;
use std::sync::Arc;

/// Creates an in-memory item database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Builds the full application route over a fresh database
pub async fn setup_test_app() -> (Arc<AppData>, TestClient<Route>) {
    let db = setup_test_db().await;
    let app_data = Arc::new(AppData::init(db));
    let client = TestClient::new(build_routes(app_data.clone()));
    (app_data, client)
}

/// Reads a response body as JSON
pub async fn body_json(resp: TestResponse) -> Value {
    resp.0
        .into_body()
        .into_json::<Value>()
        .await
        .expect("Response body is not JSON")
}
