//! Result records handed to the presentation layer.

use data_loader::Movie;
use serde::Serialize;

/// One movie as rendered by a front end.
///
/// `year` and `rating` stay `None` when unknown so the renderer can print
/// "N/A" instead of a fake zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieView {
    pub title: String,
    pub year: Option<i32>,
    pub rating: Option<f32>,
    pub genre: String,
    pub director: String,
    pub stars: Vec<String>,
    pub overview: String,
    pub poster_link: String,
    /// Cosine similarity to the query title; only set for similar-movie results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

impl MovieView {
    pub fn with_similarity(mut self, score: f64) -> Self {
        self.similarity = Some(score);
        self
    }
}

impl From<&Movie> for MovieView {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            year: movie.year,
            rating: movie.rating,
            genre: movie.genre.clone(),
            director: movie.director.clone(),
            stars: movie.stars.to_vec(),
            overview: movie.overview.clone(),
            poster_link: movie.poster_link.clone(),
            similarity: None,
        }
    }
}

/// Values a front end offers in its pickers
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectionOptions {
    pub titles: Vec<String>,
    pub genres: Vec<String>,
    pub stars: Vec<String>,
    pub years: Vec<i32>,
}
