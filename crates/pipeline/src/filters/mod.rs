//! Filter implementations for the attribute query.
//!
//! This module contains all the concrete predicates that can be composed
//! into a FilterPipeline. Note the deliberate asymmetry: genres match by
//! substring (the genre field is an unparsed comma list) while stars match
//! exactly.

pub mod genre;
pub mod star;
pub mod year;
pub mod minimum_rating;

// Re-export for convenience
pub use genre::GenreFilter;
pub use star::StarFilter;
pub use year::YearFilter;
pub use minimum_rating::MinimumRatingFilter;
