use poem_openapi::{param::Path, payload::Json, ApiResponse, OpenApi, Tags};
use serde_json::Value;
use std::sync::Arc;

use crate::errors::ItemError;
use crate::services::ItemGateway;
use crate::types::dto::items::{CreateItemRequest, DeleteItemResponse, ItemResponse};

/// Item list/create/delete endpoints
pub struct ItemsApi {
    item_gateway: Arc<ItemGateway>,
}

impl ItemsApi {
    pub fn new(item_gateway: Arc<ItemGateway>) -> Self {
        Self { item_gateway }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ItemTags {
    /// Item management endpoints
    Items,
}

/// Successful create response
#[derive(ApiResponse)]
pub enum CreateItemResponse {
    /// Item was stored
    #[oai(status = 201)]
    Created(Json<ItemResponse>),
}

#[OpenApi]
impl ItemsApi {
    /// List all items
    ///
    /// Returns every item, newest first
    #[oai(path = "/items", method = "get", tag = "ItemTags::Items")]
    async fn list_items(&self) -> Result<Json<Vec<ItemResponse>>, ItemError> {
        let items = self.item_gateway.list().await?;
        Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
    }

    /// Create a new item
    ///
    /// Accepts `{ name, price }`; `price` may be a number or a numeric string.
    /// Returns the stored item with its generated ID and timestamp.
    #[oai(path = "/items", method = "post", tag = "ItemTags::Items")]
    async fn create_item(&self, body: Json<Value>) -> Result<CreateItemResponse, ItemError> {
        let request = CreateItemRequest::from_json(&body.0);

        let item = self
            .item_gateway
            .create(request.name.as_ref(), request.price.as_ref())
            .await?;

        Ok(CreateItemResponse::Created(Json(ItemResponse::from(item))))
    }

    /// Delete an item
    ///
    /// Always reports success; unknown IDs are ignored.
    #[oai(path = "/items/:id", method = "delete", tag = "ItemTags::Items")]
    async fn delete_item(&self, id: Path<String>) -> Result<Json<DeleteItemResponse>, ItemError> {
        self.item_gateway.delete(&id.0).await?;
        Ok(Json(DeleteItemResponse { success: true }))
    }
}
