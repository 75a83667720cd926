// API layer - HTTP endpoints
pub mod health;
pub mod index;
pub mod items;
pub mod json_body;

use std::sync::Arc;

use poem::{get, EndpointExt, Route};
use poem_openapi::OpenApiService;

use crate::app_data::AppData;

pub use health::HealthApi;
pub use index::index_page;
pub use items::ItemsApi;
pub use json_body::default_non_json_body;

/// Compose the full application route
///
/// - `/` serves the item list page
/// - `/api` serves the JSON API (items, health)
/// - `/swagger` serves the generated API docs
pub fn build_routes(app_data: Arc<AppData>) -> Route {
    let items_api = ItemsApi::new(app_data.item_gateway.clone());

    let api_service = OpenApiService::new((HealthApi, items_api), "Menu Items API", "1.0.0")
        .server("/api");
    let ui = api_service.swagger_ui();

    Route::new()
        .at("/", get(index_page))
        .nest("/api", api_service.around(default_non_json_body))
        .nest("/swagger", ui)
}
