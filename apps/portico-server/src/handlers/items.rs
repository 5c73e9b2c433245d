//! Item handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use portico_domain::ItemError;
use tracing::{error, info, warn};

use crate::{
    dto::items::{CreateItemRequest, ErrorResponse, ItemResponse},
    AppState,
};

/// List every stored item
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "All stored items", body = [ItemResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn list_items_handler(State(state): State<AppState>) -> Response {
    match state.item_service.list_items().await {
        Ok(items) => {
            info!(count = items.len(), "Listed items");
            let body: Vec<ItemResponse> = items.into_iter().map(ItemResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Store a new item
#[utoipa::path(
    post,
    path = "/items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item stored successfully", body = ItemResponse),
        (status = 400, description = "Bad request - malformed body, empty or oversized text", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_item_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };

    info!(
        user_id = payload.user_id,
        text_len = payload.text.len(),
        "Received create item request"
    );

    match state
        .item_service
        .add_item(payload.user_id, payload.text)
        .await
    {
        Ok(item) => {
            info!(user_id = %item.user_id(), "Stored item");
            (StatusCode::CREATED, Json(ItemResponse::from(item))).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Map a domain error to a status code and JSON body
pub fn error_response(err: ItemError) -> Response {
    if err.is_validation() {
        warn!(error = %err, "Rejected item");
    } else {
        error!(error = ?err, "Item operation failed");
    }

    let status = status_for(&err);
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// Answer an unreadable request body with a 400 and JSON body
fn rejection_response(rejection: JsonRejection) -> Response {
    warn!(error = %rejection.body_text(), "Rejected request body");

    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: rejection.body_text(),
        }),
    )
        .into_response()
}

fn status_for(err: &ItemError) -> StatusCode {
    match err {
        ItemError::EmptyText | ItemError::TextTooLong { .. } => StatusCode::BAD_REQUEST,
        ItemError::StorageFailure(_) | ItemError::ConfigError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_bad_requests() {
        assert_eq!(status_for(&ItemError::EmptyText), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(&ItemError::text_too_long(10, 5)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_backend_errors_are_server_errors() {
        for err in [
            ItemError::storage_failure("db gone"),
            ItemError::config_error("bad url"),
        ] {
            assert_eq!(error_response(err).status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
