//! Ingest types: the upload payload and the structured outcome returned to
//! the client.
//!
//! Ingest never surfaces as an error; every failure mode collapses into an
//! `IngestOutcome` with `success: false` and a user-readable message, so the
//! HTTP layer can hand it straight back as JSON.

use serde::{Deserialize, Serialize};

/// User-facing messages. The catalog schema is Korean, so these stay in the
/// language of the UI.
pub mod messages {
    /// No `file` field in the upload form.
    pub const NO_FILE: &str = "파일이 없습니다.";
    /// A `file` field was present but carried no file name.
    pub const NO_FILE_SELECTED: &str = "선택된 파일이 없습니다.";
    /// The file name does not end in `.csv`.
    pub const NOT_CSV: &str = "CSV 파일만 업로드 가능합니다.";
    /// One of the required columns is absent.
    pub const MISSING_COLUMNS: &str = "필수 열이 누락되었습니다.";
    /// The catalog file was replaced.
    pub const UPDATED: &str = "도서목록이 업데이트되었습니다.";
}

/// An uploaded file as extracted from the multipart form.
#[derive(Debug, Clone)]
pub struct Upload {
    /// Client-supplied file name. May be empty.
    pub file_name: String,
    /// Raw file content.
    pub data: Vec<u8>,
}

/// Result of an ingest attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestOutcome {
    pub success: bool,
    pub message: String,
}

impl IngestOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
