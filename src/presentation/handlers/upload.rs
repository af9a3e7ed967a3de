use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::services::{ImportError, ImportReceipt};
use crate::domain::StoragePath;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: String,
    #[serde(rename = "collectionName")]
    pub collection_name: String,
    #[serde(rename = "messageCount")]
    pub message_count: u64,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
enum UploadError {
    #[error("failed to read multipart: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
    #[error("staging: {0}")]
    Staging(#[from] crate::application::ports::StagingStoreError),
    #[error(transparent)]
    Import(#[from] ImportError),
}

/// POST /upload: stage every uploaded file, run the decode-merge-persist
/// pipeline, and answer with the new collection's name and message count.
///
/// The staged objects belong to this handler; they are deleted on every exit
/// path, success and failure alike.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(State(state): State<AppState>, multipart: Multipart) -> Response {
    let mut staged: Vec<StoragePath> = Vec::new();

    let outcome = stage_and_import(&state, multipart, &mut staged).await;

    for path in &staged {
        if let Err(e) = state.staging_store.delete(path).await {
            tracing::warn!(path = path.as_str(), error = %e, "Failed to remove staged upload");
        }
    }

    match outcome {
        Ok(receipt) => {
            tracing::info!(
                collection = %receipt.collection_name,
                message_count = receipt.message_count,
                "Upload complete"
            );
            (
                StatusCode::OK,
                Json(UploadResponse {
                    message: format!(
                        "Messages uploaded to collection: {}",
                        receipt.collection_name
                    ),
                    collection_name: receipt.collection_name,
                    message_count: receipt.message_count,
                }),
            )
                .into_response()
        }
        Err(e) => upload_error_response(e),
    }
}

async fn stage_and_import(
    state: &AppState,
    mut multipart: Multipart,
    staged: &mut Vec<StoragePath>,
) -> Result<ImportReceipt, UploadError> {
    while let Some(field) = multipart.next_field().await? {
        let filename = field.file_name().unwrap_or("unknown").to_string();
        let data = field.bytes().await?;

        let path = StoragePath::for_upload(&filename);
        let size = state.staging_store.store(&path, data).await?;
        tracing::debug!(filename = %filename, path = path.as_str(), size, "Upload staged");
        staged.push(path);
    }

    let mut files = Vec::with_capacity(staged.len());
    for path in staged.iter() {
        files.push(state.staging_store.fetch(path).await?);
    }

    let receipt = state.import_service.import_files(&files).await?;
    Ok(receipt)
}

fn upload_error_response(error: UploadError) -> Response {
    let (status, body) = match &error {
        UploadError::Multipart(e) => (
            StatusCode::BAD_REQUEST,
            format!("Failed to read multipart: {}", e),
        ),
        UploadError::Staging(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Staging failed: {}", e),
        ),
        UploadError::Import(import) => match import {
            ImportError::NoFiles => (StatusCode::BAD_REQUEST, "No files provided".to_string()),
            ImportError::Decode(e) => (StatusCode::BAD_REQUEST, format!("Decode failed: {}", e)),
            ImportError::Merge(e) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid conversation structure: {}", e),
            ),
            ImportError::InvalidName(e) => {
                (StatusCode::BAD_REQUEST, format!("Invalid name: {}", e))
            }
            ImportError::DuplicateCollection(_) => (StatusCode::CONFLICT, import.to_string()),
            ImportError::Storage(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Storage failed: {}", e),
            ),
        },
    };

    if status.is_server_error() {
        tracing::error!(error = %error, "Upload failed");
    } else {
        tracing::warn!(error = %error, "Upload rejected");
    }

    (status, Json(ErrorResponse { error: body })).into_response()
}
