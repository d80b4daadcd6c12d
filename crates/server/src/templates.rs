use askama::Template;

use bookshelf_core::Book;

/// The single catalog view, shared by the list and search pages.
#[derive(Template)]
#[template(path = "index.html")]
pub struct CatalogTemplate {
    pub columns: Vec<String>,
    pub books: Vec<Book>,
    pub query: String,
    pub sort: String,
    pub order: String,
}
