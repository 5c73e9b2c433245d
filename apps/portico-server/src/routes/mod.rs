//! HTTP surface: item endpoints, health, and the generated OpenAPI document

pub mod health;
pub mod items;

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::{
        health::HealthResponse,
        items::{CreateItemRequest, ErrorResponse, ItemResponse},
    },
    handlers, AppState,
};

const OPENAPI_JSON: &str = "/api-docs/openapi.json";

// Title, version and contact default to the crate's Cargo metadata.
#[derive(OpenApi)]
#[openapi(
    info(description = "Lists and stores items in the configured repository backend"),
    paths(
        handlers::items::list_items_handler,
        handlers::items::create_item_handler,
        handlers::health::health_handler
    ),
    components(schemas(CreateItemRequest, ItemResponse, ErrorResponse, HealthResponse)),
    tags(
        (name = "items", description = "Item listing and storage"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(items::routes())
        .merge(health::routes())
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON, ApiDoc::openapi()))
}
