//! # Similarity Crate
//!
//! Content-based similarity over the movie catalog.
//!
//! ## Components
//!
//! ### Similarity Index
//! - Feature document per movie: overview, genre, director and cast
//! - TF-IDF weighting with English stop words removed
//! - Dense pairwise cosine matrix, computed once per catalog
//!
//! ### Content Recommender
//! - "Movies like this one": nearest neighbours of a title, itself excluded
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use similarity::{ContentRecommender, SimilarityIndex, DEFAULT_K};
//!
//! let catalog = Catalog::load_from_file(Path::new("data/imdb_top_1000.csv"))?;
//! let index = SimilarityIndex::build(&catalog);
//!
//! for hit in ContentRecommender::recommend(&catalog, &index, "Inception", DEFAULT_K) {
//!     println!("{} ({:.3})", catalog.get(hit.index).unwrap().title, hit.score);
//! }
//! ```
//!
//! ## Scaling
//!
//! Vectorization is O(N·V) and the matrix is O(N²) in time and memory
//! (N = movies, V = vocabulary). That is intended for a single static
//! catalog of at most a few thousand titles.

pub mod stop_words;
pub mod tokenizer;
pub mod tfidf;
pub mod matrix;
pub mod index;
pub mod content;

// Re-export commonly used types
pub use content::{ContentRecommender, SimilarMovie, DEFAULT_K};
pub use index::{feature_document, SimilarityIndex};
pub use matrix::SimilarityMatrix;
pub use tfidf::{SparseVector, TfidfModel};
