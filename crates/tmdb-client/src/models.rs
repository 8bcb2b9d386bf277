//! Wire models for the TMDB movie endpoints

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Movie details as returned by `GET /movie/{id}`
///
/// Only the fields the app displays are decoded; everything else in the
/// response body is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// TMDB movie ID
    pub id: u64,
    /// Display title
    pub title: String,
    /// Plot overview
    #[serde(default)]
    pub overview: String,
    /// Wide backdrop image path (e.g., "/abc.jpg")
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Poster image path
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Average rating on a 0-10 scale
    #[serde(default)]
    pub vote_average: f64,
    /// Number of votes
    #[serde(default)]
    pub vote_count: u64,
    /// TMDB popularity score
    #[serde(default)]
    pub popularity: f64,
    /// ISO 639-1 code of the original language
    #[serde(default)]
    pub original_language: String,
    /// Release date; the API sends an empty string when unknown
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub release_date: Option<NaiveDate>,
}

impl MovieRecord {
    /// Image path for the hero banner: the backdrop, or the poster when the
    /// movie has no backdrop
    pub fn hero_image_path(&self) -> Option<&str> {
        self.backdrop_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .or_else(|| self.poster_path.as_deref().filter(|p| !p.is_empty()))
    }
}

/// Compact movie entry used by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// TMDB movie ID
    pub id: u64,
    /// Display title
    pub title: String,
    /// Poster image path
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Average rating on a 0-10 scale
    #[serde(default)]
    pub vote_average: f64,
}

/// One page of a list endpoint (e.g., `/movie/{id}/recommendations`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    /// Page number (1-based)
    pub page: u32,
    /// Entries on this page
    pub results: Vec<MovieSummary>,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of entries
    #[serde(default)]
    pub total_results: u32,
}

fn empty_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
