//! Server crate for the movie recommender.
//!
//! This crate exposes the core query interface to front ends:
//! - `RecommendationService`: similar-movie, attribute and default queries
//! - `EngineHandle`: single-flight, process-wide initialization
//! - `MovieView`: the record a front end renders

pub mod config;
pub mod view;
pub mod service;
pub mod handle;

pub use config::ServiceConfig;
pub use handle::EngineHandle;
pub use service::{RecommendationService, Selection};
pub use view::{MovieView, SelectionOptions};
