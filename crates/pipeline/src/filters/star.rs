//! Filter to keep movies featuring any requested star.
//!
//! Unlike genres, cast names compare exactly: "Tom" does not match
//! "Tom Hanks".

use crate::traits::Filter;
use anyhow::Result;
use data_loader::{Catalog, MovieIdx};
use std::collections::HashSet;

/// Keeps candidates where any of the four cast slots equals a requested star.
///
/// ## Algorithm
/// Uses a HashSet of requested names for O(1) lookups per cast slot.
/// Empty slots are not cast members, so an empty name never matches.
pub struct StarFilter {
    stars: HashSet<String>,
}

impl StarFilter {
    pub fn new(stars: HashSet<String>) -> Self {
        Self { stars }
    }
}

impl Filter for StarFilter {
    fn name(&self) -> &str {
        "StarFilter"
    }

    fn apply(&self, candidates: Vec<MovieIdx>, catalog: &Catalog) -> Result<Vec<MovieIdx>> {
        let filtered: Vec<MovieIdx> = candidates
            .into_iter()
            .filter(|&idx| {
                catalog
                    .get(idx)
                    .map(|movie| movie.cast().any(|star| self.stars.contains(star)))
                    .unwrap_or(false)
            })
            .collect();
        Ok(filtered)
    }
}
