//! Attribute filtering for movie recommendations.
//!
//! This crate provides:
//! - Filter trait and implementations for the four attribute predicates
//! - FilterPipeline for composing filters (logical AND)
//! - AttributeFilterEngine for running a full attribute query
//!
//! ## Architecture
//! An attribute query is processed in stages:
//! 1. Active predicates (genre, star, year) narrow the catalog
//! 2. The minimum-rating filter always runs, removing unrated movies
//! 3. Survivors are ranked by rating and truncated to the top 10
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{AttributeFilterEngine, AttributeQuery};
//!
//! let query = AttributeQuery::new()
//!     .with_genres(["Drama"])
//!     .with_min_rating(8.0);
//!
//! let positions = AttributeFilterEngine::filter(&catalog, &query)?;
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod attribute;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use attribute::{
    rank_by_rating, AttributeFilterEngine, AttributeQuery, DEFAULT_MIN_RATING, RESULT_LIMIT,
};
