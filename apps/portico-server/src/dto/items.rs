//! DTOs for item endpoints

use portico_domain::Item;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating an item
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    /// Identifier of the owning user
    #[schema(example = 1)]
    pub user_id: i64,
    /// Text payload
    #[schema(example = "hello")]
    pub text: String,
}

/// A stored item
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ItemResponse {
    /// Identifier of the owning user
    #[schema(example = 1)]
    pub user_id: i64,
    /// Text payload
    #[schema(example = "hello")]
    pub text: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        let (user_id, text) = item.into_parts();
        Self {
            user_id: user_id.get(),
            text,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description
    #[schema(example = "Item text cannot be empty")]
    pub error: String,
}
