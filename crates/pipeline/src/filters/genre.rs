//! Filter to keep movies tagged with any requested genre.
//!
//! The genre field is free text such as "Action, Adventure, Sci-Fi", so a
//! requested genre passes when it occurs anywhere inside that text. This is
//! a case-sensitive substring test, not set membership: "Fi" matches
//! "Sci-Fi". Do not "fix" it into exact tag equality.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::{Catalog, MovieIdx};

/// Keeps candidates whose genre text contains at least one requested genre.
pub struct GenreFilter {
    genres: Vec<String>,
}

impl GenreFilter {
    /// Create a new GenreFilter.
    ///
    /// # Arguments
    /// * `genres` - Requested genres; any one of them is enough
    pub fn new<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            genres: genres.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, candidates: Vec<MovieIdx>, catalog: &Catalog) -> Result<Vec<MovieIdx>> {
        let filtered: Vec<MovieIdx> = candidates
            .into_iter()
            .filter(|&idx| {
                if let Some(movie) = catalog.get(idx) {
                    self.genres.iter().any(|genre| movie.genre.contains(genre.as_str()))
                } else {
                    false // Exclude if movie not found
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
            Movie::new("Action Movie").with_genre("Action, Adventure"),
            Movie::new("Drama Movie").with_genre("Drama"),
            Movie::new("Sci-Fi Movie").with_genre("Sci-Fi"),
            Movie::new("No Genre"),
        ])
    }

    #[test]
    fn test_genre_filter_any_match() {
        let catalog = create_test_catalog();
        let filter = GenreFilter::new(["Action", "Drama"]);

        let filtered = filter.apply(vec![0, 1, 2, 3], &catalog).unwrap();
        assert_eq!(filtered, vec![0, 1]);
    }

    #[test]
    fn test_genre_filter_is_substring_and_case_sensitive() {
        let catalog = create_test_catalog();

        let filtered = GenreFilter::new(["Fi"]).apply(vec![0, 1, 2, 3], &catalog).unwrap();
        assert_eq!(filtered, vec![2]);

        let filtered = GenreFilter::new(["drama"]).apply(vec![0, 1, 2, 3], &catalog).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_unknown_position_excluded() {
        let catalog = create_test_catalog();
        let filtered = GenreFilter::new(["Drama"]).apply(vec![1, 99], &catalog).unwrap();
        assert_eq!(filtered, vec![1]);
    }
}
