//! View components for cinema-deck
//!
//! Components are plain Rust structs with serializable properties. Screens
//! build them and a frontend paints them; nothing here draws pixels or
//! touches the network.
//!
//! # Available Components
//!
//! - [`ImageSource`] - A catalog image path resolved against the image CDN
//! - [`HeroImage`] - Banner image with title and rating overlay
//! - [`StarRating`] - Star icon plus one-decimal rating text
//! - [`FactGrid`] - Two-column grid of labelled facts
//! - [`RelatedListDescriptor`] - Input of the related-movies list component
//! - [`LoadingPlaceholder`] / [`ErrorNotice`] - Non-content states

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tmdb_client::MovieRecord;

/// Root of the TMDB image CDN
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Text shown while a screen waits for data
pub const LOADING_TEXT: &str = "Loading...";

// =============================================================================
// Images
// =============================================================================

/// Rendition size requested from the image CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    /// 500px wide
    #[default]
    W500,
    /// Full resolution
    Original,
}

impl ImageSize {
    /// Path segment for this size
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W500 => "w500",
            ImageSize::Original => "original",
        }
    }
}

/// Image reference plus its resolved URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    /// Catalog path (e.g., "/abc.jpg")
    pub path: String,
    /// Absolute URI to load
    pub uri: String,
}

impl ImageSource {
    /// Resolve a catalog image path
    pub fn new(path: impl Into<String>, size: ImageSize) -> Self {
        let path = path.into();
        let uri = format!("{}/{}{}", IMAGE_BASE_URL, size.as_str(), path);
        Self { path, uri }
    }
}

/// Cover style of a movie list or hero image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverType {
    /// Portrait poster art
    Poster,
    /// Landscape backdrop art
    Backdrop,
}

// =============================================================================
// Rating
// =============================================================================

/// Format a vote average for display with one decimal place
///
/// Ties round away from zero.
///
/// ```
/// use app_ui::components::format_rating;
///
/// assert_eq!(format_rating(7.666), "7.7");
/// assert_eq!(format_rating(7.25), "7.3");
/// assert_eq!(format_rating(8.0), "8.0");
/// ```
pub fn format_rating(vote_average: f64) -> String {
    format!("{:.1}", (vote_average * 10.0).round() / 10.0)
}

/// Star icon with rating text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarRating {
    /// Icon name
    pub icon: String,
    /// Raw value, untouched
    pub value: f64,
    /// Display text
    pub text: String,
}

impl StarRating {
    /// Build a rating from a vote average
    pub fn new(vote_average: f64) -> Self {
        Self {
            icon: "star".to_string(),
            value: vote_average,
            text: format_rating(vote_average),
        }
    }
}

// =============================================================================
// Hero
// =============================================================================

/// Image shown in the hero banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSource {
    /// Which artwork was chosen
    pub kind: CoverType,
    /// The image
    pub image: ImageSource,
}

/// Hero banner: one image with a title and rating overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroImage {
    /// Backdrop, or poster when there is no backdrop; `None` without artwork
    pub source: Option<HeroSource>,
    /// Overlay title
    pub title: String,
    /// Overlay rating
    pub rating: StarRating,
}

impl HeroImage {
    /// Build the hero banner for a movie
    pub fn for_movie(movie: &MovieRecord) -> Self {
        let source = movie.hero_image_path().map(|path| {
            let kind = if movie.backdrop_path.as_deref() == Some(path) {
                CoverType::Backdrop
            } else {
                CoverType::Poster
            };
            HeroSource {
                kind,
                image: ImageSource::new(path, ImageSize::W500),
            }
        });

        Self {
            source,
            title: movie.title.clone(),
            rating: StarRating::new(movie.vote_average),
        }
    }
}

// =============================================================================
// Facts
// =============================================================================

/// One labelled fact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCell {
    /// Label
    pub label: String,
    /// Display value
    pub value: String,
}

impl FactCell {
    /// Create a fact cell
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Two-column grid of facts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactGrid {
    /// Rows of (left, right) cells
    pub rows: Vec<[FactCell; 2]>,
}

impl FactGrid {
    /// The detail screen's grid: language and release date, then popularity
    /// and vote count
    pub fn for_movie(movie: &MovieRecord) -> Self {
        Self {
            rows: vec![
                [
                    FactCell::new("Original Language", movie.original_language.clone()),
                    FactCell::new("Release Date", format_release_date(movie.release_date)),
                ],
                [
                    FactCell::new("Popularity", format!("{:.2}", movie.popularity)),
                    FactCell::new("Vote Count", movie.vote_count.to_string()),
                ],
            ],
        }
    }
}

/// Format a release date as e.g. "Thu Jul 15 2010"
pub fn format_release_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%a %b %d %Y").to_string(),
        None => "Unknown".to_string(),
    }
}

// =============================================================================
// Related lists
// =============================================================================

/// Input of the related-movies list component
///
/// The list component fetches `path` itself and renders covers in the given
/// style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedListDescriptor {
    /// Section title
    pub title: String,
    /// API path of the list endpoint
    pub path: String,
    /// Cover style
    #[serde(rename = "coverType")]
    pub cover_type: CoverType,
}

impl RelatedListDescriptor {
    /// Create a descriptor
    pub fn new(title: impl Into<String>, path: impl Into<String>, cover_type: CoverType) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            cover_type,
        }
    }
}

// =============================================================================
// Non-content states
// =============================================================================

/// Placeholder shown while data is not available
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingPlaceholder {
    /// Placeholder text
    pub text: String,
}

impl Default for LoadingPlaceholder {
    fn default() -> Self {
        Self {
            text: LOADING_TEXT.to_string(),
        }
    }
}

/// Error message shown instead of content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorNotice {
    /// Message text
    pub message: String,
}

impl ErrorNotice {
    /// Create an error notice
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
