use super::ingest::{IngestOutcome, Upload};
use super::types::{Catalog, CatalogError};

/// Trait for catalog storage.
///
/// The handlers only ever see this seam, so tests can swap in a store rooted
/// in a temporary directory.
pub trait BookStore: Send + Sync {
    /// Read the catalog from disk with empty cells normalized to `-`.
    ///
    /// Loaded fresh on every call; there is no caching between requests.
    fn load(&self) -> Result<Catalog, CatalogError>;

    /// Serialize the catalog to CSV bytes, prefixed with the UTF-8 BOM so
    /// spreadsheet tools pick the right encoding.
    fn export(&self) -> Result<Vec<u8>, CatalogError>;

    /// Validate an uploaded CSV and swap it in for the live catalog file,
    /// keeping the prior content under a `.bak` sibling.
    fn ingest(&self, upload: &Upload) -> IngestOutcome;

    /// Canonical file name, used for the download disposition.
    fn file_name(&self) -> &str;
}
