//! # pageproof Core
//!
//! Core library for pageproof - a terminal preview of the app's static
//! status pages.
//!
//! This library holds everything that is independent of the terminal UI:
//! the fixed content of each page, the route table that maps URL-style
//! paths to that content, and the router used to move between pages.

// Core modules
pub mod error;
pub mod pages;
pub mod router;

// Re-export commonly used types
pub use error::{Error, Result};
pub use pages::{
    page_for, site_router_config, site_routes, Banner, BannerKind, PageContent, PageLink,
};
pub use router::{Route, RoutePath, Router, RouterConfig, RouterError, RouterResult};

/// Current version of the pageproof-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
