//! Attribute query: genres, stars, years and a minimum rating.
//!
//! Builds a `FilterPipeline` from the active predicates, runs it over the
//! whole catalog and ranks the survivors by rating.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{GenreFilter, MinimumRatingFilter, StarFilter, YearFilter};
use anyhow::{Context, Result};
use data_loader::{Catalog, MovieIdx};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, instrument};

/// Maximum number of movies an attribute query returns
pub const RESULT_LIMIT: usize = 10;

/// Minimum rating preselected by the interactive UI
pub const DEFAULT_MIN_RATING: f32 = 8.0;

/// User selections for an attribute query.
///
/// An empty collection means "no constraint on this field". The rating
/// threshold has no such escape: unrated movies never match.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeQuery {
    pub genres: Vec<String>,
    pub stars: HashSet<String>,
    pub years: BTreeSet<i32>,
    pub min_rating: f32,
}

impl Default for AttributeQuery {
    fn default() -> Self {
        Self {
            genres: Vec::new(),
            stars: HashSet::new(),
            years: BTreeSet::new(),
            min_rating: DEFAULT_MIN_RATING,
        }
    }
}

impl AttributeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres.extend(genres.into_iter().map(Into::into));
        self
    }

    pub fn with_stars<I, S>(mut self, stars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stars.extend(stars.into_iter().map(Into::into));
        self
    }

    pub fn with_years<I: IntoIterator<Item = i32>>(mut self, years: I) -> Self {
        self.years.extend(years);
        self
    }

    pub fn with_min_rating(mut self, min_rating: f32) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// True when none of genres, stars or years is constrained.
    ///
    /// Callers use this to fall back to the default top-rated view; the
    /// engine itself still answers such a query.
    pub fn has_no_selection(&self) -> bool {
        self.genres.is_empty() && self.stars.is_empty() && self.years.is_empty()
    }

    /// Filter chain for this query; the rating filter is always last
    pub fn pipeline(&self) -> FilterPipeline {
        FilterPipeline::new()
            .add_optional((!self.genres.is_empty()).then(|| GenreFilter::new(self.genres.clone())))
            .add_optional((!self.stars.is_empty()).then(|| StarFilter::new(self.stars.clone())))
            .add_optional((!self.years.is_empty()).then(|| YearFilter::new(self.years.clone())))
            .add_filter(MinimumRatingFilter::new(self.min_rating))
    }
}

/// Runs attribute queries against a catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeFilterEngine;

impl AttributeFilterEngine {
    /// Movies matching every active predicate, best rated first, at most
    /// `RESULT_LIMIT`.
    #[instrument(skip(catalog, query), fields(genres = query.genres.len(), stars = query.stars.len(), years = query.years.len(), min_rating = query.min_rating))]
    pub fn filter(catalog: &Catalog, query: &AttributeQuery) -> Result<Vec<MovieIdx>> {
        let all: Vec<MovieIdx> = (0..catalog.len()).collect();
        let matches = query
            .pipeline()
            .apply(all, catalog)
            .context("Failed to apply attribute filters")?;
        debug!("{} movies match attribute query", matches.len());

        let mut ranked = sort_by_rating(matches, catalog);
        ranked.truncate(RESULT_LIMIT);
        Ok(ranked)
    }
}

/// Whole catalog ranked by rating, unknown ratings last, truncated to
/// `limit`. This is the default view when the user selected nothing.
pub fn rank_by_rating(catalog: &Catalog, limit: usize) -> Vec<MovieIdx> {
    let mut ranked = sort_by_rating((0..catalog.len()).collect(), catalog);
    ranked.truncate(limit);
    ranked
}

/// Stable sort, descending rating; ties and unknowns keep catalog order
fn sort_by_rating(mut positions: Vec<MovieIdx>, catalog: &Catalog) -> Vec<MovieIdx> {
    let rating = |idx: MovieIdx| catalog.get(idx).and_then(|m| m.rating);
    positions.sort_by(|&a, &b| match (rating(a), rating(b)) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Movie;

    fn create_test_catalog() -> Catalog {
        Catalog::from_movies(vec![
            Movie::new("Inception").with_year(2010).with_rating(8.8).with_genre("Action, Sci-Fi"),
            Movie::new("Interstellar").with_year(2014).with_rating(8.6).with_genre("Sci-Fi, Drama"),
        ])
    }

    #[test]
    fn test_sci_fi_above_threshold() {
        let catalog = create_test_catalog();
        let query = AttributeQuery::new().with_genres(["Sci-Fi"]).with_min_rating(8.7);

        let result = AttributeFilterEngine::filter(&catalog, &query).unwrap();
        assert_eq!(result, vec![0]);
    }

    #[test]
    fn test_pipeline_contains_only_active_predicates() {
        assert_eq!(AttributeQuery::new().pipeline().len(), 1);
        let query = AttributeQuery::new().with_genres(["Drama"]).with_years([1994]);
        assert_eq!(query.pipeline().len(), 3);
    }

    #[test]
    fn test_has_no_selection() {
        assert!(AttributeQuery::new().with_min_rating(9.0).has_no_selection());
        assert!(!AttributeQuery::new().with_stars(["Tom Hanks"]).has_no_selection());
    }

    #[test]
    fn test_rank_by_rating_puts_unknown_last() {
        let catalog = Catalog::from_movies(vec![
            Movie::new("Unrated"),
            Movie::new("Good").with_rating(8.0),
            Movie::new("Best").with_rating(9.3),
            Movie::new("Also Good").with_rating(8.0),
        ]);

        assert_eq!(rank_by_rating(&catalog, 10), vec![2, 1, 3, 0]);
        assert_eq!(rank_by_rating(&catalog, 2), vec![2, 1]);
    }
}
