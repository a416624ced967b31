//! Similarity index over a catalog.
//!
//! ## Algorithm
//! 1. Build one feature document per movie (overview, genre, director, cast)
//! 2. Fit TF-IDF over all documents
//! 3. Compute the pairwise cosine matrix
//!
//! Built once per catalog load and read-only afterwards.

use crate::matrix::SimilarityMatrix;
use crate::tfidf::TfidfModel;
use data_loader::{Catalog, Movie, MovieIdx};
use std::time::Instant;
use tracing::{info, instrument};

/// Space-joined text the similarity model sees for one movie.
///
/// Absent fields contribute empty strings, never placeholders.
pub fn feature_document(movie: &Movie) -> String {
    let mut parts: Vec<&str> = vec![
        movie.overview.as_str(),
        movie.genre.as_str(),
        movie.director.as_str(),
    ];
    parts.extend(movie.stars.iter().map(String::as_str));
    parts.join(" ")
}

/// Precomputed content similarity between every pair of catalog movies
#[derive(Debug, Default)]
pub struct SimilarityIndex {
    matrix: SimilarityMatrix,
    vocabulary_size: usize,
}

impl SimilarityIndex {
    /// Build the index for `catalog`.
    ///
    /// An empty catalog yields an empty index that answers every query with
    /// nothing.
    #[instrument(skip(catalog), fields(movies = catalog.len()))]
    pub fn build(catalog: &Catalog) -> Self {
        let start = Instant::now();

        let documents: Vec<String> = catalog.iter().map(feature_document).collect();
        let model = TfidfModel::fit_transform(&documents);
        let matrix = SimilarityMatrix::from_vectors(model.vectors());

        info!(
            "Built similarity index: {} movies, {} terms in {:.2?}",
            matrix.size(),
            model.vocabulary_size(),
            start.elapsed()
        );

        Self {
            matrix,
            vocabulary_size: model.vocabulary_size(),
        }
    }

    pub fn len(&self) -> usize {
        self.matrix.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    /// Cosine similarity between two catalog positions
    pub fn similarity(&self, a: MovieIdx, b: MovieIdx) -> Option<f64> {
        self.matrix.get(a, b)
    }

    /// Similarities of one movie to every catalog position
    pub fn row(&self, idx: MovieIdx) -> Option<&[f64]> {
        self.matrix.row(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_document_joins_fields() {
        let movie = Movie::new("Inception")
            .with_overview("A thief")
            .with_genre("Action, Sci-Fi")
            .with_director("Christopher Nolan")
            .with_stars(["Leonardo DiCaprio", "Elliot Page"]);

        assert_eq!(
            feature_document(&movie),
            "A thief Action, Sci-Fi Christopher Nolan Leonardo DiCaprio Elliot Page  "
        );
    }

    #[test]
    fn test_empty_catalog_builds_empty_index() {
        let index = SimilarityIndex::build(&Catalog::default());
        assert!(index.is_empty());
        assert_eq!(index.vocabulary_size(), 0);
        assert!(index.row(0).is_none());
    }

    #[test]
    fn test_blank_movie_scores_zero() {
        let catalog = Catalog::from_movies(vec![
            Movie::new("Blank"),
            Movie::new("Heist").with_overview("thieves plan a heist"),
        ]);
        let index = SimilarityIndex::build(&catalog);

        assert_eq!(index.similarity(0, 0), Some(0.0));
        assert_eq!(index.similarity(0, 1), Some(0.0));
        assert_eq!(index.similarity(1, 1), Some(1.0));
    }
}
