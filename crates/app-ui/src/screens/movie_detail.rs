//! Movie detail screen
//!
//! Mounting the screen spawns the detail fetch exactly once. Until the fetch
//! settles the screen renders a loading placeholder; afterwards it renders
//! either the full detail layout or, on failure, the configured failure
//! presentation. Unmounting cancels the fetch so a late response is never
//! written.

use crate::components::{
    CoverType, ErrorNotice, FactGrid, HeroImage, LoadingPlaceholder, RelatedListDescriptor,
};
use crate::navigation::{MovieDetailParams, NavigationError, Navigator, Route};
use app_state::{DetailLoader, LoadPhase, LoadState, MountedFetch};
use serde::{Deserialize, Serialize};
use tmdb_client::MovieRecord;
use tokio::sync::watch;

/// How a failed load is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailurePresentation {
    /// Keep showing the loading placeholder
    #[default]
    Placeholder,
    /// Show an error notice
    ErrorNotice,
}

/// Detail screen options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetailScreenOptions {
    /// Failure presentation
    pub failure: FailurePresentation,
}

/// Full layout of a loaded movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetailLayout {
    /// Hero banner
    pub hero: HeroImage,
    /// Plot overview
    pub overview: String,
    /// Fact grid
    pub facts: FactGrid,
    /// Related-content section
    pub related: Vec<RelatedListDescriptor>,
}

/// What the detail screen currently shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DetailView {
    /// Loading placeholder
    Loading(LoadingPlaceholder),
    /// Loaded layout
    Detail(MovieDetailLayout),
    /// Error notice
    Failed(ErrorNotice),
}

impl DetailView {
    /// Check if this is the loading placeholder
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailView::Loading(_))
    }
}

/// Related-content sections of a movie
pub fn related_lists_for(id: &str) -> Vec<RelatedListDescriptor> {
    vec![RelatedListDescriptor::new(
        "Recommendations",
        format!("/movie/{}/recommendations", id),
        CoverType::Poster,
    )]
}

/// Render a load state
pub fn render_state(
    id: &str,
    state: &LoadState<MovieRecord>,
    failure: FailurePresentation,
) -> DetailView {
    match (state, failure) {
        (LoadState::Pending, _) | (LoadState::Failed, FailurePresentation::Placeholder) => {
            DetailView::Loading(LoadingPlaceholder::default())
        }
        (LoadState::Failed, FailurePresentation::ErrorNotice) => {
            DetailView::Failed(ErrorNotice::new("Could not load this movie."))
        }
        (LoadState::Loaded(movie), _) => DetailView::Detail(MovieDetailLayout {
            hero: HeroImage::for_movie(movie),
            overview: movie.overview.clone(),
            facts: FactGrid::for_movie(movie),
            related: related_lists_for(id),
        }),
    }
}

/// The `MovieDetail` screen
#[derive(Debug)]
pub struct MovieDetailScreen {
    params: MovieDetailParams,
    options: DetailScreenOptions,
    fetch: MountedFetch<MovieRecord>,
}

impl MovieDetailScreen {
    /// Mount the screen for a route, validating its parameters
    ///
    /// Must be called within a Tokio runtime.
    pub fn mount(
        route: &Route,
        loader: DetailLoader,
        options: DetailScreenOptions,
    ) -> Result<Self, NavigationError> {
        let params = MovieDetailParams::from_route(route)?;
        Ok(Self::mount_with_params(params, loader, options))
    }

    /// Mount the screen with already validated parameters
    pub fn mount_with_params(
        params: MovieDetailParams,
        loader: DetailLoader,
        options: DetailScreenOptions,
    ) -> Self {
        let id = params.id.clone();
        let fetch = MountedFetch::spawn(format!("movie-detail:{}", id), async move {
            loader.fetch_movie_detail(&id).await
        });

        Self {
            params,
            options,
            fetch,
        }
    }

    /// Movie identifier
    pub fn id(&self) -> &str {
        &self.params.id
    }

    /// Current load state
    pub fn load_state(&self) -> LoadState<MovieRecord> {
        self.fetch.state()
    }

    /// Current load phase
    pub fn phase(&self) -> LoadPhase {
        self.fetch.phase()
    }

    /// Subscribe to load state changes
    pub fn subscribe(&self) -> watch::Receiver<LoadState<MovieRecord>> {
        self.fetch.subscribe()
    }

    /// Related-content descriptors for this movie
    pub fn related_lists(&self) -> Vec<RelatedListDescriptor> {
        related_lists_for(self.id())
    }

    /// Render the current state
    pub fn render(&self) -> DetailView {
        self.fetch
            .with_state(|state| render_state(self.id(), state, self.options.failure))
    }

    /// Wait for the fetch to settle, then render
    pub async fn render_settled(&self) -> DetailView {
        let state = self.fetch.settled().await;
        render_state(self.id(), &state, self.options.failure)
    }

    /// Pop this screen
    pub fn go_back(&self, navigator: &mut dyn Navigator) -> bool {
        navigator.go_back()
    }

    /// Tear down the screen, discarding any in-flight fetch
    pub fn unmount(mut self) {
        self.fetch.cancel();
    }
}
