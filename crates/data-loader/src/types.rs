//! Core domain types for the movie catalog.
//!
//! `Movie` is a typed record with explicit "unknown" states for the numeric
//! fields, and `Catalog` is the immutable ordered collection the rest of
//! the workspace reads from.

use std::collections::{BTreeSet, HashMap};

// =============================================================================
// Type Aliases
// =============================================================================

/// Position of a movie within the catalog (0-based, load order)
pub type MovieIdx = usize;

/// Number of cast columns carried per movie
pub const STAR_COUNT: usize = 4;

// =============================================================================
// Movie
// =============================================================================

/// A single movie row after cleaning.
///
/// Numeric fields use `Option` so that an unparseable or blank cell is
/// "unknown" rather than zero. Text fields default to the empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// Lookup key within the catalog
    pub title: String,
    /// Release year, `None` when unknown
    pub year: Option<i32>,
    /// IMDb rating (0-10), `None` when unknown
    pub rating: Option<f32>,
    /// Unparsed comma-separated genre tags, e.g. "Action, Sci-Fi"
    pub genre: String,
    pub director: String,
    /// Up to four cast names; missing slots are empty strings
    pub stars: [String; STAR_COUNT],
    /// Free-text synopsis
    pub overview: String,
    /// Poster URL
    pub poster_link: String,
}

impl Movie {
    /// Create a movie with only a title; every other field is unknown/empty.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: None,
            rating: None,
            genre: String::new(),
            director: String::new(),
            stars: Default::default(),
            overview: String::new(),
            poster_link: String::new(),
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = director.into();
        self
    }

    /// Set the cast; names beyond the fourth are ignored.
    pub fn with_stars<I, S>(mut self, stars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (slot, name) in self.stars.iter_mut().zip(stars) {
            *slot = name.into();
        }
        self
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = overview.into();
        self
    }

    pub fn with_poster_link(mut self, link: impl Into<String>) -> Self {
        self.poster_link = link.into();
        self
    }

    /// Cast names that are actually present
    pub fn cast(&self) -> impl Iterator<Item = &str> {
        self.stars
            .iter()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}

// =============================================================================
// Catalog - The Immutable In-Memory Dataset
// =============================================================================

/// Ordered, immutable collection of movies.
///
/// Built once by the loader (or `from_movies`) and only read afterwards.
/// Titles are indexed for O(1) lookup; on duplicate titles the first row
/// wins.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) movies: Vec<Movie>,
    pub(crate) title_index: HashMap<String, MovieIdx>,
}

impl Catalog {
    /// Build a catalog from already-cleaned movies, preserving their order.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let mut title_index = HashMap::with_capacity(movies.len());
        for (idx, movie) in movies.iter().enumerate() {
            title_index.entry(movie.title.clone()).or_insert(idx);
        }
        Self {
            movies,
            title_index,
        }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// All movies in load order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    /// Get a movie by its catalog position
    pub fn get(&self, idx: MovieIdx) -> Option<&Movie> {
        self.movies.get(idx)
    }

    /// Position of the first movie with exactly this title
    pub fn position(&self, title: &str) -> Option<MovieIdx> {
        self.title_index.get(title).copied()
    }

    /// First movie with exactly this title
    pub fn find(&self, title: &str) -> Option<&Movie> {
        self.position(title).map(|idx| &self.movies[idx])
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.title_index.contains_key(title)
    }

    // Option lists for selection pickers. Each is sorted and deduplicated.

    /// Every distinct title
    pub fn titles(&self) -> Vec<String> {
        self.movies
            .iter()
            .map(|m| m.title.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every distinct genre tag, split on commas and trimmed
    pub fn genres(&self) -> Vec<String> {
        self.movies
            .iter()
            .flat_map(|m| m.genre.split(','))
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every distinct non-empty cast name
    pub fn stars(&self) -> Vec<String> {
        self.movies
            .iter()
            .flat_map(|m| m.cast())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every distinct known release year
    pub fn years(&self) -> Vec<i32> {
        self.movies
            .iter()
            .filter_map(|m| m.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}
