use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET /collections: every stored collection name, lexicographically sorted
/// by the repository.
#[tracing::instrument(skip(state))]
pub async fn list_collections_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.collection_repository.list_names().await {
        Ok(names) => {
            tracing::debug!(count = names.len(), "Listed collections");
            (StatusCode::OK, Json(names)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to list collections");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to list collections: {}", e),
                }),
            )
                .into_response()
        }
    }
}
