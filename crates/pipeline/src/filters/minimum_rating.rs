//! Filter to ensure a minimum rating.
//!
//! Movies with an unknown rating are always removed, whatever the
//! threshold. `MinimumRatingFilter::new(0.0)` therefore still narrows the
//! set to rated movies.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::{Catalog, MovieIdx};

/// Removes candidates below the rating threshold.
///
/// ## Algorithm
/// For each candidate:
/// 1. Look the movie up in the catalog
/// 2. Require a known rating
/// 3. Keep only if rating >= min_rating
pub struct MinimumRatingFilter {
    min_rating: f32,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Minimum rating on the 0-10 scale (UI default 8.0)
    pub fn new(min_rating: f32) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply(&self, candidates: Vec<MovieIdx>, catalog: &Catalog) -> Result<Vec<MovieIdx>> {
        let filtered: Vec<MovieIdx> = candidates
            .into_iter()
            .filter(|&idx| {
                if let Some(rating) = catalog.get(idx).and_then(|movie| movie.rating) {
                    rating >= self.min_rating
                } else {
                    false
                }
            })
            .collect();

        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Movie;

    fn create_test_catalog() -> Catalog {
        Catalog::from_movies(vec![
            Movie::new("High Rated Movie").with_rating(9.0),
            Movie::new("Low Rated Movie").with_rating(6.5),
            Movie::new("Unrated Movie"),
            Movie::new("Threshold Movie").with_rating(8.0),
        ])
    }

    #[test]
    fn test_minimum_rating_filter() {
        let catalog = create_test_catalog();

        let filter = MinimumRatingFilter::new(8.0);
        let filtered = filter.apply(vec![0, 1, 2, 3], &catalog).unwrap();

        assert_eq!(filtered, vec![0, 3]);
    }

    #[test]
    fn test_zero_threshold_still_drops_unknown() {
        let catalog = create_test_catalog();

        let filter = MinimumRatingFilter::new(0.0);
        let filtered = filter.apply(vec![0, 1, 2, 3], &catalog).unwrap();

        assert_eq!(filtered, vec![0, 1, 3]);
    }
}
