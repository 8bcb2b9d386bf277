//! Application screens
//!
//! [`mount`] is the screen registry: it turns the route on top of the stack
//! into a mounted screen, validating route parameters on the way.

pub mod home;
pub mod movie_detail;

pub use home::{HomeScreen, HomeView};
pub use movie_detail::{
    DetailScreenOptions, DetailView, FailurePresentation, MovieDetailLayout, MovieDetailScreen,
};

use crate::navigation::{NavigationError, Route};
use app_state::DetailLoader;

/// Dependencies shared by all screens
#[derive(Debug, Clone)]
pub struct ScreenContext {
    /// Loader for the detail screen
    pub loader: DetailLoader,
    /// Detail screen options
    pub detail_options: DetailScreenOptions,
}

impl ScreenContext {
    /// Create a context with default options
    pub fn new(loader: DetailLoader) -> Self {
        Self {
            loader,
            detail_options: DetailScreenOptions::default(),
        }
    }

    /// Set the detail screen options
    pub fn with_detail_options(mut self, options: DetailScreenOptions) -> Self {
        self.detail_options = options;
        self
    }
}

/// A mounted screen
#[derive(Debug)]
pub enum Screen {
    /// Home screen
    Home(HomeScreen),
    /// Movie detail screen
    MovieDetail(MovieDetailScreen),
}

impl Screen {
    /// Registered name of the screen
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Home(_) => "Home",
            Screen::MovieDetail(_) => "MovieDetail",
        }
    }
}

/// Mount the screen registered for `route`
///
/// Must be called within a Tokio runtime, since mounting the detail screen
/// spawns its fetch.
pub fn mount(route: &Route, ctx: &ScreenContext) -> Result<Screen, NavigationError> {
    match route {
        Route::Home => Ok(Screen::Home(HomeScreen::new())),
        Route::MovieDetail { .. } => {
            MovieDetailScreen::mount(route, ctx.loader.clone(), ctx.detail_options)
                .map(Screen::MovieDetail)
        }
        Route::NotFound => Err(NavigationError::UnknownRoute(route.to_path())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_state::MovieSource;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tmdb_client::MovieRecord;

    struct Unreachable;

    #[async_trait]
    impl MovieSource for Unreachable {
        async fn movie_detail(&self, id: &str) -> tmdb_client::Result<MovieRecord> {
            Err(tmdb_client::Error::Config(format!("no source for {}", id)))
        }
    }

    fn ctx() -> ScreenContext {
        ScreenContext::new(DetailLoader::new(Arc::new(Unreachable)))
    }

    #[test]
    fn test_mount_home() {
        let screen = mount(&Route::Home, &ctx()).unwrap();
        assert_eq!(screen.name(), "Home");
    }

    #[test]
    fn test_mount_not_found() {
        let err = mount(&Route::NotFound, &ctx()).unwrap_err();
        assert_eq!(err, NavigationError::UnknownRoute("/404".to_string()));
    }

    #[tokio::test]
    async fn test_mount_movie_detail() {
        let route = Route::MovieDetail { id: "42".to_string() };
        let screen = mount(&route, &ctx()).unwrap();
        assert_eq!(screen.name(), route.screen_name());
    }
}
