//! # Data Loader Crate
//!
//! This crate loads and cleans the movie catalog (IMDb top-1000 CSV layout).
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Catalog)
//! - **parser**: Parse CSV rows into cleaned `Movie` records
//! - **loader**: Load a `Catalog` from a file or reader
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! // Load the entire dataset
//! let catalog = Catalog::load_from_file(Path::new("data/imdb_top_1000.csv"))?;
//!
//! // Query data
//! let movie = catalog.find("Inception").unwrap();
//! println!("{} ({:?}) rated {:?}", movie.title, movie.year, movie.rating);
//! ```
//!
//! ## Cleaning Rules
//!
//! 1. Rows without a title are dropped silently (title is the lookup key)
//! 2. Unparseable year/rating cells become `None`, never 0
//! 3. Absent text cells become empty strings
//! 4. Once built, a `Catalog` exposes no mutation

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    MovieIdx,
    // Core types
    Movie,
    Catalog,
    STAR_COUNT,
};
