//! Parser for the movie CSV export.
//!
//! The expected header is the IMDb top-1000 layout:
//! `Poster_Link,Series_Title,Released_Year,Certificate,Runtime,Genre,
//! IMDB_Rating,Overview,Meta_score,Director,Star1,Star2,Star3,Star4,...`
//!
//! Columns this crate does not model are ignored. Only `Series_Title` must
//! be present in the header; any other missing column reads as blank.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::io::Read;
use tracing::debug;

/// Header name of the title column
pub const TITLE_COLUMN: &str = "Series_Title";

/// One CSV row exactly as it appears in the file.
///
/// Every field is optional text; cleaning into a `Movie` happens in
/// `clean_row`, never during deserialization, so a bad number can not
/// abort the load.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRow {
    #[serde(rename = "Series_Title")]
    title: Option<String>,
    #[serde(rename = "Released_Year")]
    year: Option<String>,
    #[serde(rename = "IMDB_Rating")]
    rating: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "Star1")]
    star1: Option<String>,
    #[serde(rename = "Star2")]
    star2: Option<String>,
    #[serde(rename = "Star3")]
    star3: Option<String>,
    #[serde(rename = "Star4")]
    star4: Option<String>,
    #[serde(rename = "Overview")]
    overview: Option<String>,
    #[serde(rename = "Poster_Link")]
    poster_link: Option<String>,
}

/// Result of parsing a source: the surviving movies plus row accounting
#[derive(Debug)]
pub struct ParsedRows {
    pub movies: Vec<Movie>,
    /// Data rows seen, including dropped ones
    pub total_rows: usize,
    /// Rows dropped for lacking a title
    pub dropped_rows: usize,
}

/// Parse a CSV source into cleaned movies.
///
/// Fails on unreadable input, broken CSV structure, or a header without
/// the title column. Rows without a title are dropped, not reported.
pub fn parse_movies<R: Read>(reader: R) -> Result<ParsedRows> {
    let mut csv_reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if !headers.iter().any(|h| h == TITLE_COLUMN) {
        return Err(DataLoadError::MissingColumn {
            column: TITLE_COLUMN.to_string(),
        });
    }

    let mut movies = Vec::new();
    let mut total_rows = 0;
    let mut dropped_rows = 0;

    for (idx, record) in csv_reader.deserialize::<RawRow>().enumerate() {
        let row = record?;
        total_rows += 1;
        match clean_row(row) {
            Some(movie) => movies.push(movie),
            None => {
                // Header is line 1, so data row idx lives on line idx + 2
                debug!("Dropping untitled row at line {}", idx + 2);
                dropped_rows += 1;
            }
        }
    }

    Ok(ParsedRows {
        movies,
        total_rows,
        dropped_rows,
    })
}

/// Turn a raw row into a `Movie`, or `None` when the title is blank.
fn clean_row(row: RawRow) -> Option<Movie> {
    let title = text(row.title);
    if title.is_empty() {
        return None;
    }

    Some(Movie {
        title,
        year: row.year.as_deref().and_then(parse_year),
        rating: row.rating.as_deref().and_then(parse_rating),
        genre: text(row.genre),
        director: text(row.director),
        stars: [
            text(row.star1),
            text(row.star2),
            text(row.star3),
            text(row.star4),
        ],
        overview: text(row.overview),
        poster_link: text(row.poster_link),
    })
}

/// Blank or absent text becomes the empty string
fn text(value: Option<String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Parse a release year cell
///
/// Example: "1994" -> Some(1994)
///          "1994.0" -> Some(1994)
///          "PG" -> None
fn parse_year(s: &str) -> Option<i32> {
    let s = s.trim();
    if let Ok(year) = s.parse::<i32>() {
        return Some(year);
    }
    // Spreadsheet exports sometimes write integral years as floats
    let value = s.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

/// Parse a rating cell; NaN and infinities are unknown, not numbers
fn parse_rating(s: &str) -> Option<f32> {
    s.trim().parse::<f32>().ok().filter(|r| r.is_finite())
}
