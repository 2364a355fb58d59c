//! CLI configuration

pub mod loader;

pub use loader::{PreviewConfig, PreviewConfigLoader};
