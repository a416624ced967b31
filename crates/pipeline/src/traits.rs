//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to a set of catalog positions.

use anyhow::Result;
use data_loader::{Catalog, MovieIdx};

/// Core trait for filtering candidate movies.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a built pipeline to be shared across request tasks
/// - Candidates are catalog positions; filters look movies up in `catalog`
/// - Filters take ownership of the Vec and return the survivors in order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - Catalog positions to filter (takes ownership)
    /// * `catalog` - The catalog the positions refer to
    ///
    /// # Returns
    /// * `Ok(Vec<MovieIdx>)` - The surviving positions, relative order kept
    /// * `Err` - If filtering fails
    fn apply(&self, candidates: Vec<MovieIdx>, catalog: &Catalog) -> Result<Vec<MovieIdx>>;
}
