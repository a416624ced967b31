//! Content recommender - "movies like this one".
//!
//! ## Algorithm
//! 1. Resolve the title to its first catalog position
//! 2. Pair each entry of that row of the similarity matrix with its position
//! 3. Stable-sort by score descending (ties keep catalog order)
//! 4. Drop the query movie itself and keep the top k
//!
//! An unknown title is not an error: the result is simply empty.

use crate::index::SimilarityIndex;
use data_loader::{Catalog, MovieIdx};
use tracing::{debug, instrument};

/// Number of neighbours returned when the caller does not choose
pub const DEFAULT_K: usize = 10;

/// One neighbour of the query movie
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarMovie {
    pub index: MovieIdx,
    pub score: f64,
}

/// Nearest-neighbour lookups over a prebuilt `SimilarityIndex`
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentRecommender;

impl ContentRecommender {
    /// Up to `k` movies most similar to `title`, best first.
    ///
    /// The query movie is excluded by position, so it never appears even if
    /// another movie ties with it at 1.0 or its own document is empty.
    #[instrument(skip(catalog, index))]
    pub fn recommend(
        catalog: &Catalog,
        index: &SimilarityIndex,
        title: &str,
        k: usize,
    ) -> Vec<SimilarMovie> {
        let Some(query) = catalog.position(title) else {
            debug!("Title not in catalog");
            return Vec::new();
        };
        let Some(row) = index.row(query) else {
            debug!("Index has no row for position {}", query);
            return Vec::new();
        };

        let mut scored: Vec<SimilarMovie> = row
            .iter()
            .enumerate()
            .filter(|&(idx, _)| idx != query)
            .map(|(idx, &score)| SimilarMovie { index: idx, score })
            .collect();

        // sort_by is stable, so equal scores stay in catalog order
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(k);

        debug!("Found {} similar movies", scored.len());
        scored
    }
}
