//! CSV-file backed catalog store.
//!
//! The on-disk file is the sole source of truth: every operation re-reads it
//! and nothing is cached in memory. Ingest stages uploads to a `.tmp`
//! sibling, validates them, then swaps files with renames, keeping the prior
//! content under a `.bak` sibling.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::ingest::{messages, IngestOutcome, Upload};
use super::store::BookStore;
use super::types::{Book, Catalog, CatalogError, MISSING_CELL, REQUIRED_COLUMNS};

/// UTF-8 byte order mark, prepended to exports for spreadsheet tools.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

pub struct CsvBookStore {
    path: PathBuf,
    file_name: String,
}

impl CsvBookStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "catalog.csv".to_string());
        Self { path, file_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Staging path for uploads: `<catalog>.tmp`.
    fn temp_path(&self) -> PathBuf {
        self.sibling(".tmp")
    }

    /// Backup path for the prior catalog: `<catalog>.bak`.
    fn backup_path(&self) -> PathBuf {
        self.sibling(".bak")
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(suffix);
        PathBuf::from(name)
    }

    /// Parse a CSV file into a catalog, padding short rows and replacing
    /// empty cells with the `-` placeholder.
    fn read_catalog(path: &Path) -> Result<Catalog, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(into_catalog_error)?;

        let columns: Vec<String> = reader
            .headers()
            .map_err(into_catalog_error)?
            .iter()
            .map(str::to_string)
            .collect();

        let mut books = Vec::new();
        for record in reader.records() {
            let record = record.map_err(into_catalog_error)?;
            let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
            cells.resize(columns.len(), String::new());
            for cell in &mut cells {
                if cell.is_empty() {
                    *cell = MISSING_CELL.to_string();
                }
            }
            books.push(Book { cells });
        }

        Ok(Catalog { columns, books })
    }

    /// Rename the live file to `.bak` (when present) and the staged file
    /// into place.
    fn commit(&self, staged: &Path) -> Result<(), std::io::Error> {
        if self.path.exists() {
            fs::rename(&self.path, self.backup_path())?;
        }
        fs::rename(staged, &self.path)
    }

    /// Best-effort restore of the backup over the live path.
    fn rollback(&self) {
        let backup = self.backup_path();
        if backup.exists() {
            if let Err(e) = fs::rename(&backup, &self.path) {
                warn!(
                    "Rollback from {} to {} failed: {}",
                    backup.display(),
                    self.path.display(),
                    e
                );
            }
        }
    }
}

impl BookStore for CsvBookStore {
    fn load(&self) -> Result<Catalog, CatalogError> {
        Self::read_catalog(&self.path)
    }

    fn export(&self) -> Result<Vec<u8>, CatalogError> {
        let catalog = self.load()?;

        let mut buffer = Vec::from(UTF8_BOM);
        {
            let mut writer = csv::Writer::from_writer(&mut buffer);
            writer
                .write_record(&catalog.columns)
                .map_err(into_catalog_error)?;
            for book in &catalog.books {
                writer
                    .write_record(&book.cells)
                    .map_err(into_catalog_error)?;
            }
            writer.flush().map_err(CatalogError::Io)?;
        }

        Ok(buffer)
    }

    fn ingest(&self, upload: &Upload) -> IngestOutcome {
        if upload.file_name.is_empty() {
            return IngestOutcome::failure(messages::NO_FILE_SELECTED);
        }
        if !upload.file_name.ends_with(".csv") {
            return IngestOutcome::failure(messages::NOT_CSV);
        }

        // Stage. Nothing has been moved yet, so a write failure leaves the
        // live catalog untouched.
        let staged = self.temp_path();
        if let Err(e) = fs::write(&staged, &upload.data) {
            warn!("Failed to stage upload at {}: {}", staged.display(), e);
            return IngestOutcome::failure(format!("파일 처리 중 오류가 발생했습니다: {}", e));
        }

        // Validate the staged file before touching the live one.
        match Self::read_catalog(&staged) {
            Ok(catalog) => {
                let missing: Vec<&str> = REQUIRED_COLUMNS
                    .iter()
                    .filter(|name| catalog.column_index(name).is_none())
                    .copied()
                    .collect();
                if !missing.is_empty() {
                    let _ = fs::remove_file(&staged);
                    info!(
                        "Rejected upload {:?}: missing columns {:?}",
                        upload.file_name, missing
                    );
                    return IngestOutcome::failure(messages::MISSING_COLUMNS);
                }
            }
            Err(e) => {
                let _ = fs::remove_file(&staged);
                info!("Rejected upload {:?}: {}", upload.file_name, e);
                return IngestOutcome::failure(format!("CSV 파일을 읽을 수 없습니다: {}", e));
            }
        }

        // Backup and commit. On failure, restore whatever backup exists.
        match self.commit(&staged) {
            Ok(()) => {
                info!(
                    "Catalog {} replaced by upload {:?}",
                    self.path.display(),
                    upload.file_name
                );
                IngestOutcome::success(messages::UPDATED)
            }
            Err(e) => {
                warn!("Commit of upload {:?} failed: {}", upload.file_name, e);
                self.rollback();
                IngestOutcome::failure(format!("파일 처리 중 오류가 발생했습니다: {}", e))
            }
        }
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }
}

fn into_catalog_error(err: csv::Error) -> CatalogError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => CatalogError::Io(e),
        _ => CatalogError::Parse(message),
    }
}
