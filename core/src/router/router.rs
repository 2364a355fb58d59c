//! Router implementation for managing navigation state
//!
//! This module provides the core router functionality including
//! state management, navigation, and route resolution.

use super::route::{Route, RoutePath};
use std::collections::HashMap;
use tracing::debug;

/// Structured error type for router operations
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("No routes configured")]
    NoRoutes,

    #[error("Route '{0}' not found")]
    RouteNotFound(String),

    #[error("Initial route '{0}' not found in configuration")]
    InitialRouteMissing(String),
}

/// Type alias for router operation results
pub type RouterResult<T> = Result<T, RouterError>;

/// Current state of the router
#[derive(Debug, Clone)]
pub struct RouterState {
    /// Currently active route path
    pub current_route: RoutePath,
    /// Navigation history (most recent first)
    pub history: Vec<RoutePath>,
    /// Maximum number of history entries to keep
    pub max_history: usize,
}

impl RouterState {
    /// Create a new router state with the given initial route
    pub fn new(initial_route: RoutePath) -> Self {
        Self {
            current_route: initial_route,
            history: Vec::new(),
            max_history: 50, // Default history limit
        }
    }

    /// Navigate to a new route
    pub fn navigate_to(&mut self, path: RoutePath) {
        // Add current route to history if it's different
        if self.current_route != path {
            self.history.insert(0, self.current_route.clone());

            // Trim history if it exceeds max size
            if self.history.len() > self.max_history {
                self.history.truncate(self.max_history);
            }
        }

        self.current_route = path;
    }

    /// Go back to the previous route in history
    pub fn go_back(&mut self) -> bool {
        if let Some(previous_route) = self.history.first().cloned() {
            self.history.remove(0);
            self.current_route = previous_route;
            true
        } else {
            false
        }
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Get the current route path
    pub fn current_route(&self) -> &RoutePath {
        &self.current_route
    }
}

/// Configuration for the router
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// All available routes
    pub routes: HashMap<RoutePath, Route>,
    /// Default route to use when no route is specified
    pub default_route: Option<RoutePath>,
    /// Whether to enable navigation history
    pub enable_history: bool,
    /// Maximum number of history entries
    pub max_history: usize,
}

impl RouterConfig {
    /// Create a new router configuration
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            default_route: None,
            enable_history: true,
            max_history: 50,
        }
    }

    /// Add a route to the configuration
    pub fn add_route(mut self, route: Route) -> Self {
        let path = route.path.clone();

        // Set as default if this is marked as default and no default exists
        if route.is_default && self.default_route.is_none() {
            self.default_route = Some(path.clone());
        }

        self.routes.insert(path, route);
        self
    }

    /// Set the default route
    pub fn with_default_route(mut self, path: RoutePath) -> Self {
        self.default_route = Some(path);
        self
    }

    /// Disable navigation history
    pub fn without_history(mut self) -> Self {
        self.enable_history = false;
        self
    }

    /// Set maximum history size
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    /// Get a route by path
    pub fn get_route(&self, path: &RoutePath) -> Option<&Route> {
        self.routes.get(path)
    }

    /// Get the default route path
    pub fn default_route(&self) -> Option<&RoutePath> {
        self.default_route.as_ref()
    }

    /// Get all routes
    pub fn routes(&self) -> &HashMap<RoutePath, Route> {
        &self.routes
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Main router struct that manages navigation state and configuration
#[derive(Debug, Clone)]
pub struct Router {
    /// Router configuration
    config: RouterConfig,
    /// Current router state
    state: RouterState,
}

impl Router {
    /// Create a new router with the given configuration
    pub fn new(config: RouterConfig) -> RouterResult<Self> {
        // Determine initial route
        let initial_route = if let Some(default_route) = config.default_route() {
            default_route.clone()
        } else if let Some((path, _)) = config.routes().iter().next() {
            path.clone()
        } else {
            return Err(RouterError::NoRoutes);
        };

        // Validate that the initial route exists
        if !config.routes().contains_key(&initial_route) {
            return Err(RouterError::InitialRouteMissing(initial_route.0));
        }

        let mut state = RouterState::new(initial_route);
        if config.enable_history {
            state.max_history = config.max_history;
        } else {
            state.max_history = 0;
        }

        Ok(Self { config, state })
    }

    /// Navigate to a route
    pub fn navigate(&mut self, path: impl Into<RoutePath>) -> RouterResult<()> {
        let path = path.into();
        if !self.config.routes().contains_key(&path) {
            return Err(RouterError::RouteNotFound(path.0));
        }
        debug!("Navigating to {}", path);
        self.state.navigate_to(path);
        Ok(())
    }

    /// Go back to the previous route
    pub fn go_back(&mut self) -> bool {
        if self.config.enable_history {
            self.state.go_back()
        } else {
            false
        }
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.config.enable_history && self.state.can_go_back()
    }

    /// Get the current route
    pub fn current_route(&self) -> Option<&Route> {
        self.config.routes().get(self.state.current_route())
    }

    /// Get the current route path
    pub fn current_path(&self) -> &RoutePath {
        self.state.current_route()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_page_config() -> RouterConfig {
        RouterConfig::new()
            .add_route(Route::new("/demo/success", "Demo Request Received"))
            .add_route(Route::new("/start/success", "Account Creation Started"))
            .with_default_route("/demo/success".into())
    }

    #[test]
    fn test_router_starts_on_default_route() {
        let router = Router::new(two_page_config()).expect("Failed to create router");
        assert_eq!(router.current_path().as_str(), "/demo/success");
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_navigate_and_go_back() {
        let mut router = Router::new(two_page_config()).expect("Failed to create router");

        router.navigate("/start/success").expect("Failed to navigate");
        assert_eq!(router.current_path().as_str(), "/start/success");
        assert!(router.can_go_back());

        assert!(router.go_back());
        assert_eq!(router.current_path().as_str(), "/demo/success");
        assert!(!router.can_go_back());
        assert!(!router.go_back());
    }

    #[test]
    fn test_navigate_to_current_route_does_not_grow_history() {
        let mut router = Router::new(two_page_config()).expect("Failed to create router");

        router.navigate("/demo/success").expect("Failed to navigate");
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_navigate_unknown_route_is_rejected() {
        let mut router = Router::new(two_page_config()).expect("Failed to create router");

        let err = router.navigate("/does/not/exist").unwrap_err();
        assert!(matches!(err, RouterError::RouteNotFound(_)));
        assert_eq!(router.current_path().as_str(), "/demo/success");
    }

    #[test]
    fn test_history_is_bounded() {
        let config = two_page_config().with_max_history(1);
        let mut router = Router::new(config).expect("Failed to create router");

        router.navigate("/start/success").expect("Failed to navigate");
        router.navigate("/demo/success").expect("Failed to navigate");
        router.navigate("/start/success").expect("Failed to navigate");

        assert_eq!(router.state.history.len(), 1);
        assert_eq!(router.state.history[0].as_str(), "/demo/success");
    }

    #[test]
    fn test_without_history_disables_go_back() {
        let config = two_page_config().without_history();
        let mut router = Router::new(config).expect("Failed to create router");

        router.navigate("/start/success").expect("Failed to navigate");
        assert!(!router.can_go_back());
        assert!(!router.go_back());
        assert_eq!(router.current_path().as_str(), "/start/success");
    }

    #[test]
    fn test_empty_config_is_an_error() {
        let err = Router::new(RouterConfig::new()).unwrap_err();
        assert!(matches!(err, RouterError::NoRoutes));
    }

    #[test]
    fn test_missing_initial_route_is_an_error() {
        let config = RouterConfig::new()
            .add_route(Route::new("/demo/success", "Demo Request Received"))
            .with_default_route("/missing".into());

        let err = Router::new(config).unwrap_err();
        assert!(matches!(err, RouterError::InitialRouteMissing(_)));
    }

    #[test]
    fn test_router_error_display() {
        assert_eq!(RouterError::NoRoutes.to_string(), "No routes configured");
        assert_eq!(
            RouterError::RouteNotFound("/x".to_string()).to_string(),
            "Route '/x' not found"
        );
        assert_eq!(
            RouterError::InitialRouteMissing("/x".to_string()).to_string(),
            "Initial route '/x' not found in configuration"
        );
    }
}
