//! Home screen

use crate::navigation::{Navigator, Route};
use serde::{Deserialize, Serialize};

/// What the home screen shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeView {
    /// Screen heading
    pub heading: String,
    /// Label of the "open a movie" action
    pub open_movie_label: String,
}

/// The `Home` screen, root of the stack
#[derive(Debug, Clone, Default)]
pub struct HomeScreen;

impl HomeScreen {
    /// Create the home screen
    pub fn new() -> Self {
        Self
    }

    /// Render the screen
    pub fn render(&self) -> HomeView {
        HomeView {
            heading: "Home".to_string(),
            open_movie_label: "Go to Movie Detail".to_string(),
        }
    }

    /// Push the detail screen of a movie
    pub fn open_movie(&self, navigator: &mut dyn Navigator, id: impl Into<String>) {
        navigator.navigate(Route::MovieDetail { id: id.into() });
    }
}
