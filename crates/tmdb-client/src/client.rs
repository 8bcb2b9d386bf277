//! HTTP client for the catalog API
//!
//! Every request is a `GET` against `{base_url}{path}` carrying the bearer
//! token and `Accept: application/json`. There is no retry and no caching;
//! each call performs exactly one outbound request.

use crate::config::ClientConfig;
use crate::models::{MoviePage, MovieRecord};
use crate::{Error, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client as ReqwestClient, Response as ReqwestResponse};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Error body returned by TMDB on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// TMDB-specific status code (not the HTTP status)
    #[serde(default)]
    pub status_code: i64,
    /// Human-readable message
    pub status_message: String,
}

/// Catalog API client
#[derive(Debug, Clone)]
pub struct CatalogClient {
    /// HTTP client
    client: ReqwestClient,
    /// Configuration
    config: ClientConfig,
}

impl CatalogClient {
    /// Create a new catalog client
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = ReqwestClient::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Fetch the details of one movie
    ///
    /// The identifier is inserted into the path as-is.
    ///
    /// # Examples
    /// ```
    /// use tmdb_client::{CatalogClient, ClientConfig};
    ///
    /// async fn example() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CatalogClient::new(ClientConfig::from_env()?)?;
    ///     let movie = client.movie_detail("27205").await?;
    ///     println!("{} ({:.1})", movie.title, movie.vote_average);
    ///     Ok(())
    /// }
    /// ```
    pub async fn movie_detail(&self, id: &str) -> Result<MovieRecord> {
        self.get_json(&movie_path(id)).await
    }

    /// Fetch the first page of a movie list endpoint
    /// (e.g., "/movie/27205/recommendations")
    pub async fn movie_list(&self, path: &str) -> Result<MoviePage> {
        self.get_json(path).await
    }

    /// Issue a `GET` for `path` and decode the JSON body
    pub async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, "catalog request");

        let mut req = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.config.authorization())
            .header(ACCEPT, "application/json");

        for (key, value) in &self.config.default_headers {
            req = req.header(key, value);
        }

        let response = req.send().await?;
        self.parse_response(response).await
    }

    /// Turn a response into a decoded body or an error
    async fn parse_response<T>(&self, response: ReqwestResponse) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorResponse>(&error_body) {
                Ok(error_response) => error_response.status_message,
                Err(_) => format!("HTTP {}: {}", status.as_u16(), error_body),
            };
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// API path of a movie's detail endpoint
pub fn movie_path(id: &str) -> String {
    format!("/movie/{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_new() {
        let config = ClientConfig::new("token")
            .with_base_url("https://example.test/3")
            .with_timeout(Duration::from_secs(5));

        let client = CatalogClient::new(config).unwrap();
        assert_eq!(client.config().timeout, Some(Duration::from_secs(5)));
        assert_eq!(client.url("/movie/42"), "https://example.test/3/movie/42");
    }

    #[test]
    fn test_movie_path_keeps_id_verbatim() {
        assert_eq!(movie_path("42"), "/movie/42");
        assert_eq!(movie_path("not-a-number"), "/movie/not-a-number");
    }

    #[test]
    fn test_api_error_response_decode() {
        let body = r#"{"success":false,"status_code":34,"status_message":"The resource you requested could not be found."}"#;
        let parsed: ApiErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.status_code, 34);
        assert!(parsed.status_message.contains("could not be found"));
    }
}
