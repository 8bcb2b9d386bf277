//! Navigation system for cinema-deck
//!
//! This module provides a type-safe navigation framework with:
//! - Route definitions for the registered screens (`Home`, `MovieDetail`)
//! - Typed, validated screen parameters
//! - Navigation stack management
//! - The [`Navigator`] seam screens use to push and pop
//! - Path routing for deep links

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

// =============================================================================
// Route Parameters
// =============================================================================

/// Untyped parameters for a route, as carried by a deep link
pub type RouteParams = HashMap<String, String>;

/// Navigation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// A required route parameter is absent or empty
    #[error("Missing route parameter: {0}")]
    MissingParam(String),

    /// No screen is registered for the route
    #[error("No screen registered for route: {0}")]
    UnknownRoute(String),
}

/// Validated parameters of the `MovieDetail` screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetailParams {
    /// Catalog identifier of the movie (opaque, not validated further)
    pub id: String,
}

impl MovieDetailParams {
    /// Validate raw route parameters
    pub fn from_params(params: &RouteParams) -> Result<Self, NavigationError> {
        let id = params
            .get("id")
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| NavigationError::MissingParam("id".to_string()))?;

        Ok(Self { id: id.clone() })
    }

    /// Extract the parameters from a route
    pub fn from_route(route: &Route) -> Result<Self, NavigationError> {
        Self::from_params(&route.params())
    }
}

// =============================================================================
// Route Definitions
// =============================================================================

/// All possible routes in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    /// Home screen (stack root)
    Home,
    /// Detail screen of one movie
    MovieDetail {
        /// Movie identifier
        id: String,
    },
    /// Unmatched deep link
    NotFound,
}

impl Default for Route {
    fn default() -> Self {
        Route::Home
    }
}

impl Route {
    /// Get the URL path for this route
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::MovieDetail { id } => format!("/movie/{}", urlencoding::encode(id)),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Name the screen is registered under
    pub fn screen_name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::MovieDetail { .. } => "MovieDetail",
            Route::NotFound => "NotFound",
        }
    }

    /// Get the header title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::MovieDetail { .. } => "Movie Detail",
            Route::NotFound => "Not Found",
        }
    }

    /// Whether the stack header is visible on this screen
    pub fn header_shown(&self) -> bool {
        !matches!(self, Route::Home)
    }

    /// Get the route parameters as an untyped map
    pub fn params(&self) -> RouteParams {
        let mut params = RouteParams::new();
        if let Route::MovieDetail { id } = self {
            params.insert("id".to_string(), id.clone());
        }
        params
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// Navigation operations available to screens
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    /// Push a route onto the stack
    fn navigate(&mut self, route: Route);

    /// Pop the current screen (returns true if popped)
    fn go_back(&mut self) -> bool;
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Navigation stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Stack entries (bottom to top); never empty
    entries: Vec<StackEntry>,
    /// Root route for this stack
    root: Route,
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            entries: vec![StackEntry::new(root.clone())],
            root,
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        self.entries.last().map_or(&self.root, |entry| &entry.route)
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Get all entries
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Animation type for navigation transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationAnimation {
    /// Push animation (slide in from right)
    #[default]
    Push,
    /// Pop animation (slide out to right)
    Pop,
}

/// Pending navigation action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingNavigation {
    /// Target route
    pub route: Route,
    /// Animation type
    pub animation: NavigationAnimation,
}

/// Complete navigation state: one stack rooted at `Home`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// The screen stack
    pub stack: NavigationStack,
    /// Pending navigation (for animations)
    #[serde(skip)]
    pub pending: Option<PendingNavigation>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            stack: NavigationStack::new(Route::Home),
            pending: None,
        }
    }
}

impl NavigationState {
    /// Create a new navigation state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current route
    pub fn current_route(&self) -> &Route {
        self.stack.current()
    }

    /// Navigate to a route with animation
    pub fn navigate_with_animation(&mut self, route: Route, animation: NavigationAnimation) {
        self.pending = Some(PendingNavigation {
            route: route.clone(),
            animation,
        });
        self.stack.push(route);
    }

    /// Complete the pending navigation
    pub fn complete_navigation(&mut self) {
        self.pending = None;
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.stack.can_go_back()
    }
}

impl Navigator for NavigationState {
    fn navigate(&mut self, route: Route) {
        self.navigate_with_animation(route, NavigationAnimation::Push);
    }

    fn go_back(&mut self) -> bool {
        if self.stack.pop() {
            self.pending = Some(PendingNavigation {
                route: self.current_route().clone(),
                animation: NavigationAnimation::Pop,
            });
            true
        } else {
            false
        }
    }
}

// =============================================================================
// Router
// =============================================================================

/// Route pattern for matching
struct RoutePattern {
    /// Pattern segments
    segments: Vec<PatternSegment>,
    /// Route builder
    builder: fn(RouteParams) -> Option<Route>,
}

/// Segment type in a pattern
#[derive(Debug, Clone)]
enum PatternSegment {
    /// Literal segment
    Literal(String),
    /// Parameter segment
    Param(String),
}

/// URL Router for parsing paths to routes
pub struct Router {
    /// Route patterns
    patterns: Vec<RoutePattern>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a new router with all routes
    pub fn new() -> Self {
        let mut router = Self {
            patterns: Vec::new(),
        };

        router.add_route("/", |_| Some(Route::Home));
        router.add_route("/movie/:id", |params| {
            MovieDetailParams::from_params(&params)
                .ok()
                .map(|p| Route::MovieDetail { id: p.id })
        });

        router
    }

    /// Add a route pattern
    fn add_route(&mut self, pattern: &str, builder: fn(RouteParams) -> Option<Route>) {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if let Some(param) = s.strip_prefix(':') {
                    PatternSegment::Param(param.to_string())
                } else {
                    PatternSegment::Literal(s.to_string())
                }
            })
            .collect();

        self.patterns.push(RoutePattern { segments, builder });
    }

    /// Match a path to a route; any query string is ignored
    pub fn match_path(&self, path: &str) -> Route {
        let pathname = path.split_once('?').map_or(path, |(pathname, _)| pathname);
        let path_segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

        for pattern in &self.patterns {
            if let Some(params) = self.match_pattern(&pattern.segments, &path_segments) {
                if let Some(route) = (pattern.builder)(params) {
                    return route;
                }
            }
        }

        Route::NotFound
    }

    /// Match a pattern against path segments
    fn match_pattern(
        &self,
        pattern: &[PatternSegment],
        path: &[&str],
    ) -> Option<RouteParams> {
        if pattern.len() != path.len() {
            return None;
        }

        let mut params = RouteParams::new();

        for (segment, actual) in pattern.iter().zip(path.iter()) {
            match segment {
                PatternSegment::Literal(expected) => {
                    if expected != *actual {
                        return None;
                    }
                }
                PatternSegment::Param(name) => {
                    params.insert(
                        name.clone(),
                        urlencoding::decode(actual).ok()?.into_owned(),
                    );
                }
            }
        }

        Some(params)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(id: &str) -> Route {
        Route::MovieDetail { id: id.to_string() }
    }

    #[test]
    fn test_route_to_path() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(detail("42").to_path(), "/movie/42");
    }

    #[test]
    fn test_screen_names() {
        assert_eq!(Route::Home.screen_name(), "Home");
        assert_eq!(detail("42").screen_name(), "MovieDetail");
    }

    #[test]
    fn test_route_title_and_header() {
        assert_eq!(detail("1").title(), "Movie Detail");
        assert!(detail("1").header_shown());
        assert!(!Route::Home.header_shown());
    }

    #[test]
    fn test_detail_params_from_route() {
        let params = MovieDetailParams::from_route(&detail("42")).unwrap();
        assert_eq!(params.id, "42");
    }

    #[test]
    fn test_detail_params_missing_id() {
        assert_eq!(
            MovieDetailParams::from_params(&RouteParams::new()),
            Err(NavigationError::MissingParam("id".to_string()))
        );
        assert_eq!(
            MovieDetailParams::from_route(&Route::Home),
            Err(NavigationError::MissingParam("id".to_string()))
        );
    }

    #[test]
    fn test_detail_params_blank_id() {
        let err = MovieDetailParams::from_route(&detail("  ")).unwrap_err();
        assert_eq!(err.to_string(), "Missing route parameter: id");
    }

    #[test]
    fn test_router_match_home() {
        let router = Router::new();
        assert_eq!(router.match_path("/"), Route::Home);
    }

    #[test]
    fn test_router_match_movie() {
        let router = Router::new();
        assert_eq!(router.match_path("/movie/27205"), detail("27205"));
        assert_eq!(router.match_path("/movie/27205?language=en"), detail("27205"));
    }

    #[test]
    fn test_router_round_trips_encoded_id() {
        let router = Router::new();
        let route = detail("a b/c");
        assert_eq!(route.to_path(), "/movie/a%20b%2Fc");
        assert_eq!(router.match_path(&route.to_path()), route);
    }

    #[test]
    fn test_router_not_found() {
        let router = Router::new();
        assert_eq!(router.match_path("/movie"), Route::NotFound);
        assert_eq!(router.match_path("/tv/1"), Route::NotFound);
    }

    #[test]
    fn test_navigation_stack_push_pop() {
        let mut stack = NavigationStack::new(Route::Home);
        assert_eq!(stack.depth(), 1);
        assert!(!stack.can_go_back());

        stack.push(detail("42"));
        assert_eq!(stack.depth(), 2);
        assert!(stack.can_go_back());
        assert_eq!(*stack.current(), detail("42"));

        assert!(stack.pop());
        assert_eq!(*stack.current(), Route::Home);

        // Can't pop past root
        assert!(!stack.pop());
    }

    #[test]
    fn test_stack_entries_have_unique_keys() {
        let mut stack = NavigationStack::new(Route::Home);
        stack.push(detail("1"));
        stack.push(detail("1"));
        let keys: Vec<_> = stack.entries().iter().map(|e| e.key.clone()).collect();
        assert_ne!(keys[1], keys[2]);
    }

    #[test]
    fn test_navigation_state_navigate_and_back() {
        let mut state = NavigationState::new();
        assert_eq!(*state.current_route(), Route::Home);

        state.navigate(detail("42"));
        assert_eq!(*state.current_route(), detail("42"));
        assert_eq!(
            state.pending.as_ref().map(|p| p.animation),
            Some(NavigationAnimation::Push)
        );

        assert!(state.go_back());
        assert_eq!(*state.current_route(), Route::Home);
        assert_eq!(
            state.pending.as_ref().map(|p| p.animation),
            Some(NavigationAnimation::Pop)
        );

        assert!(!state.go_back());
    }

    #[test]
    fn test_complete_navigation_clears_pending() {
        let mut state = NavigationState::new();
        state.navigate(detail("1"));
        state.navigate(detail("2"));
        assert!(state.go_back());
        assert!(state.can_go_back());
        state.complete_navigation();
        assert!(state.pending.is_none());
    }

    #[test]
    fn test_route_serialization() {
        let route = detail("42");
        let json = serde_json::to_string(&route).unwrap();
        assert_eq!(json, r#"{"route":"MovieDetail","params":{"id":"42"}}"#);
        let parsed: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(route, parsed);
    }
}
