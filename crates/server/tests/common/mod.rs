//! Common test utilities: an in-process router over a catalog file in a
//! temporary directory.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use bookshelf_core::CsvBookStore;
use bookshelf_server::api::create_router;
use bookshelf_server::state::AppState;

pub const SAMPLE_CSV: &str = "\
번호,도서명,저자,분류,추천 대상
1,데미안,헤르만 헤세,소설,청소년
2,Rust in Action,Tim McNamara,프로그래밍,전체
3,어린 왕자,생텍쥐페리,소설,아동
";

/// Test fixture wrapping the router and the temp directory holding the
/// catalog file.
pub struct TestServer {
    pub router: Router,
    pub catalog_path: PathBuf,
    // Keeps the directory alive for the duration of the test.
    _temp_dir: TempDir,
}

/// Response from a test request
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }
}

impl TestServer {
    /// Server over the sample catalog.
    pub fn new() -> Self {
        Self::with_catalog(SAMPLE_CSV)
    }

    /// Server over a caller-supplied catalog file.
    pub fn with_catalog(content: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let catalog_path = temp_dir.path().join("trius_book_list.csv");
        fs::write(&catalog_path, content).expect("Failed to write catalog");
        Self::build(temp_dir, catalog_path)
    }

    /// Server whose catalog file does not exist.
    pub fn without_catalog() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let catalog_path = temp_dir.path().join("trius_book_list.csv");
        Self::build(temp_dir, catalog_path)
    }

    fn build(temp_dir: TempDir, catalog_path: PathBuf) -> Self {
        let store = Arc::new(CsvBookStore::new(catalog_path.clone()));
        let state = Arc::new(AppState::new(store));
        let router = create_router(state);
        Self {
            router,
            catalog_path,
            _temp_dir: temp_dir,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// POST a multipart upload. `file_name: None` sends a form without a
    /// `file` field at all; `Some("")` sends one with an empty file name.
    pub async fn upload(&self, file_name: Option<&str>, content: &[u8]) -> TestResponse {
        let boundary = "bookshelf-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        match file_name {
            Some(name) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n\r\n",
                    name
                )
                .as_bytes(),
            ),
            None => body
                .extend_from_slice(b"Content-Disposition: form-data; name=\"other\"\r\n\r\n"),
        }
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

        let request = Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}
