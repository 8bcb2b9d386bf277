//! Detail data loader
//!
//! Turns one catalog request into a terminal [`LoadState`]. Transport and
//! decode faults are collapsed into [`LoadState::Failed`]; the cause is
//! logged and never returned to the caller.

use crate::load_state::LoadState;
use async_trait::async_trait;
use std::sync::Arc;
use tmdb_client::{CatalogClient, MovieRecord};

/// Source of movie details
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Fetch one movie by its identifier
    async fn movie_detail(&self, id: &str) -> tmdb_client::Result<MovieRecord>;
}

#[async_trait]
impl MovieSource for CatalogClient {
    async fn movie_detail(&self, id: &str) -> tmdb_client::Result<MovieRecord> {
        CatalogClient::movie_detail(self, id).await
    }
}

/// Single-shot loader for the detail screen
#[derive(Clone)]
pub struct DetailLoader {
    source: Arc<dyn MovieSource>,
}

impl DetailLoader {
    /// Create a loader over a movie source
    pub fn new(source: Arc<dyn MovieSource>) -> Self {
        Self { source }
    }

    /// Create a loader backed by the catalog client
    pub fn from_client(client: CatalogClient) -> Self {
        Self::new(Arc::new(client))
    }

    /// Fetch one movie and settle its load state
    ///
    /// Performs exactly one request. The identifier is not validated.
    pub async fn fetch_movie_detail(&self, id: &str) -> LoadState<MovieRecord> {
        match self.source.movie_detail(id).await {
            Ok(record) => {
                tracing::debug!(id, title = %record.title, "movie detail loaded");
                LoadState::Loaded(record)
            }
            Err(e) => {
                tracing::warn!(id, decode = e.is_decode(), "Failed to fetch movie detail: {}", e);
                LoadState::Failed
            }
        }
    }
}

impl std::fmt::Debug for DetailLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailLoader").finish_non_exhaustive()
    }
}
