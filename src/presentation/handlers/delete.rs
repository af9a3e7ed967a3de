use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::presentation::handlers::messages::{parse_name, repository_error_response};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
    #[serde(rename = "collectionName")]
    pub collection_name: String,
}

/// DELETE /delete/{name}: drop the collection and all its messages. There is
/// no soft-delete or recovery path.
#[tracing::instrument(skip(state))]
pub async fn delete_collection_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let name = match parse_name(&name) {
        Ok(n) => n,
        Err(response) => return response,
    };

    match state.collection_repository.delete(&name).await {
        Ok(()) => {
            tracing::info!(collection = %name, "Collection deleted");
            (
                StatusCode::OK,
                Json(DeleteResponse {
                    message: format!("Collection \"{}\" deleted.", name),
                    collection_name: name.as_str().to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => repository_error_response(e, "Failed to delete collection"),
    }
}
