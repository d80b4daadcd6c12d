//! CSV download handler.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::error;

use crate::state::AppState;

/// GET /download
///
/// The catalog in its on-disk order as a BOM-prefixed CSV attachment, named
/// after the canonical catalog file.
pub async fn download(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let bytes = state.store().export().map_err(|e| {
        error!("Failed to export catalog: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let disposition = format!("attachment; filename=\"{}\"", state.store().file_name());
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
