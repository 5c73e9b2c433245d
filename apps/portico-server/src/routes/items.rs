//! Item routes

use axum::{routing::get, Router};

use crate::{
    handlers::items::{create_item_handler, list_items_handler},
    AppState,
};

/// Create item routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/items", get(list_items_handler).post(create_item_handler))
}
