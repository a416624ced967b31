//! Catalog loading entry points.
//!
//! This module turns a CSV source into an immutable `Catalog`:
//! - open the file (or accept any reader)
//! - parse and clean rows
//! - enforce the "at least one titled row" rule
//! - index titles for lookup

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{info, warn};

impl Catalog {
    /// Load the catalog from a CSV file
    ///
    /// This is the main entry point for loading data.
    ///
    /// Steps:
    /// 1. Open the file, mapping "not found" to `FileNotFound`
    /// 2. Parse and clean every row
    /// 3. Build the title index
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {:?}", path);

        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DataLoadError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => DataLoadError::IoError(e),
        })?;

        Self::from_reader(file)
    }

    /// Load the catalog from any CSV reader.
    ///
    /// Same rules as `load_from_file`. A header-only source yields an empty
    /// catalog; a source whose rows all lack a title is an error.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let parsed = parser::parse_movies(reader)?;

        if parsed.total_rows > 0 && parsed.movies.is_empty() {
            return Err(DataLoadError::NoTitledRows {
                rows: parsed.total_rows,
            });
        }

        if parsed.dropped_rows > 0 {
            warn!(
                "Dropped {} of {} rows without a title",
                parsed.dropped_rows, parsed.total_rows
            );
        }

        let catalog = Catalog::from_movies(parsed.movies);
        info!(
            "Loaded {} movies ({} distinct titles)",
            catalog.len(),
            catalog.title_index.len()
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let err = Catalog::load_from_file(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_header_only_source_is_empty_catalog() {
        let catalog = Catalog::from_reader("Series_Title,Genre\n".as_bytes()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_all_rows_untitled_is_error() {
        let csv = "Series_Title,Genre\n,Drama\n,Comedy\n";
        let err = Catalog::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataLoadError::NoTitledRows { rows: 2 }));
    }

    #[test]
    fn test_load_dataset() {
        // This test requires the actual dataset file
        // Place imdb_top_1000.csv in ../../data/
        let path = Path::new("../../data/imdb_top_1000.csv");

        if path.exists() {
            let catalog = Catalog::load_from_file(path).unwrap();
            assert_eq!(catalog.len(), 1000);
            assert!(catalog.contains_title("The Shawshank Redemption"));
        }
    }
}
