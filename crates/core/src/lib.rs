pub mod catalog;
pub mod config;

pub use catalog::{
    messages, Book, BookStore, Catalog, CatalogError, CsvBookStore, IngestOutcome, SortOrder,
    Upload, AUTHOR_COLUMN, ID_COLUMN, MISSING_CELL, REQUIRED_COLUMNS, TITLE_COLUMN,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    ServerConfig,
};
