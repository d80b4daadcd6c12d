//! Catalog upload handler.

use axum::{
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;

use bookshelf_core::{messages, IngestOutcome, Upload};

use crate::state::AppState;

/// POST /upload
///
/// Multipart form with a `file` field holding the replacement CSV. Every
/// outcome, including rejections, is a 200 with `{success, message}` so the
/// form handler on the page can render the message directly.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Json<IngestOutcome> {
    let mut upload: Option<Upload> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or("").to_string();
            match field.bytes().await {
                Ok(bytes) => {
                    upload = Some(Upload {
                        file_name,
                        data: bytes.to_vec(),
                    })
                }
                Err(e) => {
                    return Json(IngestOutcome::failure(format!(
                        "파일을 읽을 수 없습니다: {}",
                        e
                    )))
                }
            }
        }
    }

    match upload {
        Some(upload) => Json(state.store().ingest(&upload)),
        None => Json(IngestOutcome::failure(messages::NO_FILE)),
    }
}
