//! Catalog view handlers.

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

use bookshelf_core::{SortOrder, ID_COLUMN};

use crate::state::AppState;
use crate::templates::CatalogTemplate;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_sort")]
    pub sort: String,
    #[serde(default = "default_order")]
    pub order: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_sort")]
    pub sort: String,
    #[serde(default = "default_order")]
    pub order: String,
}

fn default_sort() -> String {
    ID_COLUMN.to_string()
}

fn default_order() -> String {
    "asc".to_string()
}

/// GET /
///
/// The full catalog, optionally sorted.
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, StatusCode> {
    render_catalog(&state, "", &params.sort, &params.order)
}

/// GET /search
///
/// The catalog filtered by a case-insensitive substring match over title
/// and author, then sorted the same way as the list view.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, StatusCode> {
    render_catalog(&state, &params.query, &params.sort, &params.order)
}

/// Loader failures are a per-request fatal condition on the read paths:
/// log the cause and answer with a bare 500.
fn render_catalog(
    state: &AppState,
    query: &str,
    sort: &str,
    order: &str,
) -> Result<Html<String>, StatusCode> {
    let catalog = state.store().load().map_err(|e| {
        error!("Failed to load catalog: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let mut shown = catalog.filter(query);
    shown.sort_by(sort, SortOrder::from_param(order));

    let template = CatalogTemplate {
        columns: shown.columns,
        books: shown.books,
        query: query.to_string(),
        sort: sort.to_string(),
        order: order.to_string(),
    };

    template.render().map(Html).map_err(|e| {
        error!("Template rendering failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
