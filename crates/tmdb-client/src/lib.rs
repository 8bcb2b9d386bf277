//! TMDB catalog client
//!
//! This crate provides a small client for the TMDB v3 REST API: the wire
//! models for movie details and movie lists, the client configuration
//! (including the static bearer credential), and the HTTP client itself.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod models;

pub use client::CatalogClient;
pub use config::ClientConfig;
pub use models::{MoviePage, MovieRecord, MovieSummary};

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network error (unreachable host, connection reset, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API error with status code and message
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from server
        message: String,
    },

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this error was produced while decoding a response body
    pub fn is_decode(&self) -> bool {
        match self {
            Error::Json(_) => true,
            Error::Network(e) => e.is_decode(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let err = Error::Config("TMDB_API_TOKEN is not set".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(!err.is_decode());
    }

    #[test]
    fn test_api_error_display() {
        let err = Error::Api {
            status: 401,
            message: "Invalid API key".to_string(),
        };
        assert_eq!(err.to_string(), "API error (401): Invalid API key");
    }

    #[test]
    fn test_json_error_is_decode() {
        let json_err = serde_json::from_str::<MovieRecord>("{").unwrap_err();
        assert!(Error::from(json_err).is_decode());
    }
}
