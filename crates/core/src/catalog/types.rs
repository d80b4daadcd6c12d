//! Types for the book catalog.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

/// Columns every catalog file must carry. Extra columns pass through
/// unchanged.
pub const REQUIRED_COLUMNS: [&str; 5] = ["번호", "도서명", "저자", "분류", "추천 대상"];

/// Column holding the book number, the default sort key.
pub const ID_COLUMN: &str = "번호";

/// Column holding the book title, matched by free-text search.
pub const TITLE_COLUMN: &str = "도서명";

/// Column holding the author, matched by free-text search.
pub const AUTHOR_COLUMN: &str = "저자";

/// Placeholder written into empty cells after parsing.
pub const MISSING_CELL: &str = "-";

/// One row of the catalog. Cells are positionally aligned with the owning
/// catalog's column list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub cells: Vec<String>,
}

impl Book {
    /// Cell at `index`, or the empty string for rows shorter than the header.
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }
}

/// The full catalog: ordered columns plus ordered book rows, loaded fresh
/// from disk for every request and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub columns: Vec<String>,
    pub books: Vec<Book>,
}

impl Catalog {
    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Reorder books by the named column.
    ///
    /// An unknown column leaves the catalog order untouched. A column whose
    /// every cell parses as a number compares numerically, any other column
    /// lexicographically. The sort is stable, and descending is ascending
    /// followed by a reverse, so tied keys keep a deterministic order either
    /// way.
    pub fn sort_by(&mut self, column: &str, order: SortOrder) {
        let Some(index) = self.column_index(column) else {
            return;
        };

        let numeric = !self.books.is_empty()
            && self
                .books
                .iter()
                .all(|book| book.cell(index).parse::<f64>().is_ok());

        self.books.sort_by(|a, b| {
            let (left, right) = (a.cell(index), b.cell(index));
            if numeric {
                let left: f64 = left.parse().unwrap_or(f64::NAN);
                let right: f64 = right.parse().unwrap_or(f64::NAN);
                left.partial_cmp(&right).unwrap_or(Ordering::Equal)
            } else {
                left.cmp(right)
            }
        });

        if order == SortOrder::Descending {
            self.books.reverse();
        }
    }

    /// Keep only books whose title or author contains `query`,
    /// case-insensitively. An empty query keeps every book.
    pub fn filter(&self, query: &str) -> Catalog {
        if query.is_empty() {
            return self.clone();
        }

        let query = query.to_lowercase();
        let searched: Vec<usize> = [TITLE_COLUMN, AUTHOR_COLUMN]
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect();

        let books = self
            .books
            .iter()
            .filter(|book| {
                searched
                    .iter()
                    .any(|&index| book.cell(index).to_lowercase().contains(&query))
            })
            .cloned()
            .collect();

        Catalog {
            columns: self.columns.clone(),
            books,
        }
    }
}

/// Sort direction for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Parse the `order` query parameter: ascending iff it equals `asc`.
    pub fn from_param(param: &str) -> Self {
        if param == "asc" {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }
}

/// Errors for catalog read operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid CSV: {0}")]
    Parse(String),
}
