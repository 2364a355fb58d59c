//! Error types and handling for pageproof core

use thiserror::Error;

/// Result type alias for pageproof operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pageproof core
#[derive(Error, Debug)]
pub enum Error {
    /// Routing errors
    #[error("Router error: {0}")]
    Router(#[from] crate::router::RouterError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}
