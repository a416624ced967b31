//! Filter to keep movies released in one of the requested years.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::{Catalog, MovieIdx};
use std::collections::BTreeSet;

/// Keeps candidates whose release year is known and requested.
///
/// A movie with an unknown year never passes.
pub struct YearFilter {
    years: BTreeSet<i32>,
}

impl YearFilter {
    pub fn new(years: BTreeSet<i32>) -> Self {
        Self { years }
    }
}

impl Filter for YearFilter {
    fn name(&self) -> &str {
        "YearFilter"
    }

    fn apply(&self, candidates: Vec<MovieIdx>, catalog: &Catalog) -> Result<Vec<MovieIdx>> {
        let filtered: Vec<MovieIdx> = candidates
            .into_iter()
            .filter(|&idx| {
                catalog
                    .get(idx)
                    .and_then(|movie| movie.year)
                    .map(|year| self.years.contains(&year))
                    .unwrap_or(false)
            })
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Movie;

    #[test]
    fn test_year_filter() {
        let catalog = Catalog::from_movies(vec![
            Movie::new("Old Movie").with_year(1980),
            Movie::new("Era Movie").with_year(2000),
            Movie::new("Unknown Year"),
            Movie::new("Recent Movie").with_year(2020),
        ]);

        let filter = YearFilter::new(BTreeSet::from([2000, 2020]));
        let filtered = filter.apply(vec![0, 1, 2, 3], &catalog).unwrap();

        assert_eq!(filtered, vec![1, 3]);
    }
}
