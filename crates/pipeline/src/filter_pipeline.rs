//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern. Chained filters
//! combine with logical AND.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::{Catalog, MovieIdx};
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new(["Drama"]))
///     .add_filter(MinimumRatingFilter::new(8.0));
///
/// let matches = pipeline.apply(all_positions, &catalog)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Add a filter only when `filter` is `Some`.
    ///
    /// Lets callers skip inactive predicates without breaking the chain.
    pub fn add_optional(self, filter: Option<impl Filter + 'static>) -> Self {
        match filter {
            Some(filter) => self.add_filter(filter),
            None => self,
        }
    }

    /// Number of filters in the chain
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// ## Algorithm
    /// 1. Start with the input candidates
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    pub fn apply(&self, candidates: Vec<MovieIdx>, catalog: &Catalog) -> Result<Vec<MovieIdx>> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, catalog)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{GenreFilter, MinimumRatingFilter};
    use data_loader::Movie;

    fn create_test_catalog() -> Catalog {
        Catalog::from_movies(vec![
            Movie::new("Drama A").with_genre("Drama").with_rating(8.5),
            Movie::new("Comedy B").with_genre("Comedy").with_rating(8.9),
            Movie::new("Drama C").with_genre("Crime, Drama").with_rating(7.0),
        ])
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let catalog = create_test_catalog();

        let filtered = pipeline.apply(vec![0, 1, 2], &catalog).unwrap();
        assert_eq!(filtered, vec![0, 1, 2]);
        assert!(pipeline.is_empty());
    }

    #[test]
    fn test_filters_combine_with_and() {
        let catalog = create_test_catalog();

        let pipeline = FilterPipeline::new()
            .add_filter(GenreFilter::new(["Drama"]))
            .add_filter(MinimumRatingFilter::new(8.0));

        let filtered = pipeline.apply(vec![0, 1, 2], &catalog).unwrap();
        assert_eq!(filtered, vec![0]);
        assert_eq!(pipeline.len(), 2);
    }

    #[test]
    fn test_add_optional_skips_none() {
        let pipeline = FilterPipeline::new()
            .add_optional(None::<GenreFilter>)
            .add_optional(Some(MinimumRatingFilter::new(0.0)));
        assert_eq!(pipeline.len(), 1);
    }
}
