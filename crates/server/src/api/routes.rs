use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{export, handlers, pages, upload};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Catalog views
        .route("/", get(pages::list))
        .route("/search", get(pages::search))
        // CSV export
        .route("/download", get(export::download))
        // CSV replacement
        .route("/upload", post(upload::upload))
        // Liveness
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
