//! Service configuration.

use pipeline::{DEFAULT_MIN_RATING, RESULT_LIMIT};
use similarity::DEFAULT_K;
use std::path::PathBuf;

/// Where the catalog lives and the default query sizes
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// CSV file the catalog is loaded from
    pub data_path: PathBuf,
    /// Neighbours returned by a similar-movies query
    pub similar_k: usize,
    /// Size of the default top-rated view
    pub result_limit: usize,
    /// Threshold used when the caller does not pick one
    pub default_min_rating: f32,
}

impl ServiceConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            ..Self::default()
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/imdb_top_1000.csv"),
            similar_k: DEFAULT_K,
            result_limit: RESULT_LIMIT,
            default_min_rating: DEFAULT_MIN_RATING,
        }
    }
}
