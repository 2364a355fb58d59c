//! Route definitions and utilities
//!
//! This module defines the core route types for the page registry:
//! URL-style paths and the metadata attached to each previewable page.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// URL-style path identifying a page, e.g. `/demo/success`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoutePath(pub String);

impl RoutePath {
    /// Create a new route path. Paths always start with `/`; a missing
    /// leading slash is added rather than rejected.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.starts_with('/') {
            Self(path)
        } else {
            Self(format!("/{path}"))
        }
    }

    /// The path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoutePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for RoutePath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RoutePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Route definition: one previewable page and its metadata
#[derive(Debug, Clone)]
pub struct Route {
    /// Path this page is served at
    pub path: RoutePath,
    /// Human-readable page title
    pub title: String,
    /// Optional one-line description of what the page shows
    pub description: Option<String>,
    /// Whether this route is the one the browser opens on
    pub is_default: bool,
}

impl Route {
    /// Create a new route with the given path and title
    pub fn new(path: impl Into<RoutePath>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            description: None,
            is_default: false,
        }
    }

    /// Set the description for this route
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark this route as the default route
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}
