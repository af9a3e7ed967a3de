use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::ports::RepositoryError;
use crate::domain::CollectionName;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET /messages/{name}: all messages of one collection, ordered by
/// `timestamp_ms` ascending.
#[tracing::instrument(skip(state))]
pub async fn get_messages_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let name = match parse_name(&name) {
        Ok(n) => n,
        Err(response) => return response,
    };

    match state.collection_repository.get_messages(&name).await {
        Ok(messages) => {
            tracing::debug!(collection = %name, count = messages.len(), "Fetched messages");
            (StatusCode::OK, Json(messages)).into_response()
        }
        Err(e) => repository_error_response(e, "Failed to fetch messages"),
    }
}

/// GET /messages/{name}/photo: one representative photo attachment, or 404
/// when the collection has none.
#[tracing::instrument(skip(state))]
pub async fn get_photo_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let name = match parse_name(&name) {
        Ok(n) => n,
        Err(response) => return response,
    };

    match state.collection_repository.find_photo(&name).await {
        Ok(Some(photo)) => (StatusCode::OK, Json(photo)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Photo not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => repository_error_response(e, "Failed to fetch photo"),
    }
}

pub(super) fn parse_name(raw: &str) -> Result<CollectionName, Response> {
    CollectionName::new(raw).map_err(|e| {
        tracing::warn!(raw, error = %e, "Rejected collection name");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response()
    })
}

pub(super) fn repository_error_response(error: RepositoryError, context: &str) -> Response {
    match error {
        RepositoryError::NotFound(name) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Collection \"{}\" not found", name),
            }),
        )
            .into_response(),
        other => {
            tracing::error!(error = %other, "{}", context);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("{}: {}", context, other),
                }),
            )
                .into_response()
        }
    }
}
