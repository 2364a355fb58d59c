//! Router module for moving between the previewable pages
//!
//! The router keeps track of which page is currently shown and of the
//! navigation history, so the interactive browser can walk back through
//! previously visited pages.

pub mod route;
pub mod router;

// Re-export commonly used types
pub use route::{Route, RoutePath};
pub use router::{Router, RouterConfig, RouterError, RouterResult, RouterState};
