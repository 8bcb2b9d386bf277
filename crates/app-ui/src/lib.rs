//! User interface for cinema-deck
//!
//! This crate provides the UI layer: navigation, view components, and the
//! screens. Rendering is headless; screens return serializable view
//! descriptions for a frontend to paint.
//!
//! # Modules
//!
//! - [`navigation`] - Routes, typed parameters, navigation stack, router
//! - [`components`] - View components (hero image, rating, fact grid, ...)
//! - [`screens`] - The `Home` and `MovieDetail` screens
//!
//! # Example
//!
//! ```rust
//! use app_ui::navigation::{NavigationState, Navigator, Route, Router};
//!
//! let mut nav = NavigationState::new();
//! let route = Router::new().match_path("/movie/27205");
//! nav.navigate(route);
//! assert_eq!(nav.current_route().screen_name(), "MovieDetail");
//!
//! nav.go_back();
//! assert_eq!(*nav.current_route(), Route::Home);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod screens;

// Re-export commonly used types
pub use components::{
    format_rating, CoverType, FactCell, FactGrid, HeroImage, ImageSource, RelatedListDescriptor,
    StarRating,
};

pub use navigation::{
    MovieDetailParams, NavigationError, NavigationStack, NavigationState, Navigator, Route,
    RouteParams, Router, StackEntry,
};

pub use screens::{
    DetailScreenOptions, DetailView, FailurePresentation, HomeScreen, MovieDetailScreen, Screen,
    ScreenContext,
};
