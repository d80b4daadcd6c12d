//! Book catalog - the CSV-backed table of book records.
//!
//! The catalog lives in a single CSV file on disk. Every request loads it
//! fresh, so the file is the only persistent state; the one mutation path is
//! a full-file replacement via [`BookStore::ingest`].

mod csv_store;
mod ingest;
mod store;
mod types;

pub use csv_store::CsvBookStore;
pub use ingest::{messages, IngestOutcome, Upload};
pub use store::BookStore;
pub use types::*;
