//! # Recommendation Service
//!
//! Read-only query surface over one loaded catalog:
//! 1. Similar movies by content (`recommend_similar`)
//! 2. Attribute filtering (`recommend_by_attributes`)
//! 3. Default top-rated view (`top_rated`)
//! 4. Page-level dispatch between the three (`browse`)
//!
//! The catalog and similarity index sit behind `Arc`s and are never
//! mutated, so clones of the service can answer queries concurrently
//! without locking.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use data_loader::{Catalog, MovieIdx};
use pipeline::{rank_by_rating, AttributeFilterEngine, AttributeQuery};
use similarity::{ContentRecommender, SimilarityIndex};

use crate::config::ServiceConfig;
use crate::view::{MovieView, SelectionOptions};

/// What the user asked for on the recommendation page
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// "Find similar movies" mode; an empty title means nothing picked yet
    Similar { title: String },
    /// "Filter by attributes" mode
    Attributes(AttributeQuery),
}

/// Main service that answers recommendation queries
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<Catalog>,
    index: Arc<SimilarityIndex>,
    config: ServiceConfig,
}

impl RecommendationService {
    /// Build the similarity index for `catalog` and wrap both.
    pub fn new(catalog: Arc<Catalog>, config: ServiceConfig) -> Self {
        let index = Arc::new(SimilarityIndex::build(&catalog));
        Self::from_parts(catalog, index, config)
    }

    /// Wrap an already built catalog and index.
    pub fn from_parts(
        catalog: Arc<Catalog>,
        index: Arc<SimilarityIndex>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            catalog,
            index,
            config,
        }
    }

    /// Load the catalog named by `config` and build its index.
    ///
    /// Blocking; async callers go through `EngineHandle`.
    pub fn load(config: ServiceConfig) -> Result<Self> {
        let start = Instant::now();
        let catalog = Catalog::load_from_file(&config.data_path)
            .with_context(|| format!("Failed to load catalog from {}", config.data_path.display()))?;
        let service = Self::new(Arc::new(catalog), config);
        info!(
            "Recommendation service ready: {} movies in {:.2?}",
            service.catalog.len(),
            start.elapsed()
        );
        Ok(service)
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn index(&self) -> &Arc<SimilarityIndex> {
        &self.index
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Up to `k` movies most similar to `title`; empty when the title is
    /// not in the catalog.
    #[instrument(skip(self))]
    pub fn recommend_similar(&self, title: &str, k: usize) -> Vec<MovieView> {
        let hits = ContentRecommender::recommend(&self.catalog, &self.index, title, k);
        let views: Vec<MovieView> = hits
            .into_iter()
            .filter_map(|hit| {
                let movie = self.catalog.get(hit.index)?;
                Some(MovieView::from(movie).with_similarity(hit.score))
            })
            .collect();
        debug!("Returning {} similar movies", views.len());
        views
    }

    /// Top movies matching the attribute query, best rated first.
    pub fn recommend_by_attributes(&self, query: &AttributeQuery) -> Result<Vec<MovieView>> {
        let positions = AttributeFilterEngine::filter(&self.catalog, query)?;
        Ok(self.views(&positions))
    }

    /// Attribute query built from raw selections.
    ///
    /// Without an explicit threshold the configured `default_min_rating`
    /// applies.
    pub fn attribute_query<G, S, Y>(
        &self,
        genres: G,
        stars: S,
        years: Y,
        min_rating: Option<f32>,
    ) -> AttributeQuery
    where
        G: IntoIterator,
        G::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
        Y: IntoIterator<Item = i32>,
    {
        AttributeQuery::new()
            .with_genres(genres)
            .with_stars(stars)
            .with_years(years)
            .with_min_rating(min_rating.unwrap_or(self.config.default_min_rating))
    }

    /// Whole catalog ranked by rating, unknown ratings last
    pub fn top_rated(&self, limit: usize) -> Vec<MovieView> {
        let positions = rank_by_rating(&self.catalog, limit);
        self.views(&positions)
    }

    /// Dispatch a page selection.
    ///
    /// ## Policy
    /// - similar mode with a title → similar movies (`similar_k` of them)
    /// - attribute mode with at least one genre, star or year → filter
    /// - anything else → default top-rated view
    pub fn browse(&self, selection: &Selection) -> Result<Vec<MovieView>> {
        match selection {
            Selection::Similar { title } if !title.is_empty() => {
                Ok(self.recommend_similar(title, self.config.similar_k))
            }
            Selection::Attributes(query) if !query.has_no_selection() => {
                self.recommend_by_attributes(query)
            }
            _ => {
                debug!("No selection made, showing default view");
                Ok(self.top_rated(self.config.result_limit))
            }
        }
    }

    /// Option lists for selection pickers
    pub fn options(&self) -> SelectionOptions {
        SelectionOptions {
            titles: self.catalog.titles(),
            genres: self.catalog.genres(),
            stars: self.catalog.stars(),
            years: self.catalog.years(),
        }
    }

    fn views(&self, positions: &[MovieIdx]) -> Vec<MovieView> {
        positions
            .iter()
            .filter_map(|&idx| self.catalog.get(idx).map(MovieView::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Movie;

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    fn build_test_service() -> RecommendationService {
        let catalog = Catalog::from_movies(vec![
            Movie::new("Inception")
                .with_year(2010)
                .with_rating(8.8)
                .with_genre("Action, Sci-Fi")
                .with_director("Christopher Nolan")
                .with_overview("a thief enters dreams to plant an idea"),
            Movie::new("Interstellar")
                .with_year(2014)
                .with_rating(8.6)
                .with_genre("Sci-Fi, Drama")
                .with_director("Christopher Nolan")
                .with_overview("explorers cross a wormhole to save humanity"),
            Movie::new("Paprika")
                .with_year(2006)
                .with_rating(7.7)
                .with_genre("Animation, Sci-Fi")
                .with_director("Satoshi Kon")
                .with_overview("a device lets therapists enter dreams"),
            Movie::new("Unrated Short").with_genre("Drama"),
        ]);
        RecommendationService::new(Arc::new(catalog), ServiceConfig::default())
    }

    fn titles(views: &[MovieView]) -> Vec<&str> {
        views.iter().map(|v| v.title.as_str()).collect()
    }

    // ============================================================================
    // Unit Tests
    // ============================================================================

    #[test]
    fn test_recommend_similar_excludes_query_and_scores() {
        let service = build_test_service();

        let results = service.recommend_similar("Inception", 10);
        assert_eq!(results.len(), 3);
        assert!(!titles(&results).contains(&"Inception"));
        assert!(results.iter().all(|v| v.similarity.is_some()));
        assert!(results[0].similarity >= results[1].similarity);
    }

    #[test]
    fn test_recommend_similar_unknown_title() {
        let service = build_test_service();
        assert!(service.recommend_similar("Tenet", 10).is_empty());
    }

    #[test]
    fn test_recommend_by_attributes_example() {
        let service = build_test_service();
        let query = AttributeQuery::new().with_genres(["Sci-Fi"]).with_min_rating(8.7);

        let results = service.recommend_by_attributes(&query).unwrap();
        assert_eq!(titles(&results), vec!["Inception"]);
        assert_eq!(results[0].similarity, None);
    }

    #[test]
    fn test_browse_dispatch() {
        let service = build_test_service();

        let similar = service
            .browse(&Selection::Similar { title: "Paprika".to_string() })
            .unwrap();
        assert!(!titles(&similar).contains(&"Paprika"));

        let filtered = service
            .browse(&Selection::Attributes(
                AttributeQuery::new().with_genres(["Drama"]).with_min_rating(0.0),
            ))
            .unwrap();
        assert_eq!(titles(&filtered), vec!["Interstellar"]);

        // No title picked and no attributes picked both fall back to top rated
        let expected = vec!["Inception", "Interstellar", "Paprika", "Unrated Short"];
        let default_view = service
            .browse(&Selection::Similar { title: String::new() })
            .unwrap();
        assert_eq!(titles(&default_view), expected);
        let default_view = service
            .browse(&Selection::Attributes(AttributeQuery::new().with_min_rating(9.5)))
            .unwrap();
        assert_eq!(titles(&default_view), expected);
    }

    #[test]
    fn test_attribute_query_falls_back_to_configured_threshold() {
        let catalog = build_test_service().catalog().clone();
        let config = ServiceConfig {
            default_min_rating: 8.7,
            ..ServiceConfig::default()
        };
        let service = RecommendationService::new(catalog, config);

        let query = service.attribute_query(["Sci-Fi"], Vec::<String>::new(), Vec::<i32>::new(), None);
        assert_eq!(query.min_rating, 8.7);
        let results = service.recommend_by_attributes(&query).unwrap();
        assert_eq!(titles(&results), vec!["Inception"]);

        let query = service.attribute_query(["Sci-Fi"], Vec::<String>::new(), Vec::<i32>::new(), Some(7.0));
        assert_eq!(query.min_rating, 7.0);
        let results = service.recommend_by_attributes(&query).unwrap();
        assert_eq!(titles(&results), vec!["Inception", "Interstellar", "Paprika"]);
    }

    #[test]
    fn test_options() {
        let service = build_test_service();
        let options = service.options();

        assert_eq!(options.titles.len(), 4);
        assert_eq!(options.genres, vec!["Action", "Animation", "Drama", "Sci-Fi"]);
        assert_eq!(options.years, vec![2006, 2010, 2014]);
        assert!(options.stars.is_empty());
    }

    #[test]
    fn test_empty_catalog_answers_empty() {
        let service = RecommendationService::new(Arc::new(Catalog::default()), ServiceConfig::default());

        assert!(service.recommend_similar("Inception", 10).is_empty());
        assert!(service.recommend_by_attributes(&AttributeQuery::new().with_genres(["Drama"])).unwrap().is_empty());
        assert!(service.top_rated(10).is_empty());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let result = RecommendationService::load(ServiceConfig::new("no/such/catalog.csv"));
        assert!(result.is_err());
    }
}
