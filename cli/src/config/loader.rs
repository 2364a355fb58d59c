//! Preview configuration loader for pageproof
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file (highest priority)
//! 2. Current working directory: ./pageproof.json
//! 3. XDG config: $XDG_CONFIG_HOME/pageproof/config.json or ~/.config/pageproof/config.json
//! 4. Built-in defaults (a missing file is not an error)

use anyhow::{bail, Context, Result};
use pageproof_core::{page_for, pages, RoutePath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_width() -> u16 {
    80
}

fn default_history_limit() -> usize {
    50
}

/// Raw configuration file format (simple single-file schema)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPreviewConfig {
    /// Render width in columns
    #[serde(default = "default_width")]
    pub width: u16,
    /// Route the interactive browser opens on
    #[serde(default)]
    pub start_route: Option<String>,
    /// Navigation history bound for the browser
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for RawPreviewConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            start_route: None,
            history_limit: default_history_limit(),
        }
    }
}

/// Resolved preview configuration
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Render width in columns
    pub width: u16,
    /// Route the interactive browser opens on
    pub start_route: RoutePath,
    /// Navigation history bound for the browser
    pub history_limit: usize,
}

/// CLI configuration loader
pub struct PreviewConfigLoader {
    /// Override config file path
    config_override: Option<PathBuf>,
    /// Flag overrides
    width_override: Option<u16>,
}

impl PreviewConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            width_override: None,
        }
    }

    /// Set config file override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set render width override
    pub fn with_width_override(mut self, width: u16) -> Self {
        self.width_override = Some(width);
        self
    }

    /// Load and resolve configuration
    pub fn load(&self) -> Result<PreviewConfig> {
        // Step 1: Find and load base configuration
        let raw = if let Some(override_path) = &self.config_override {
            Self::load_from_file(override_path).with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            Self::search_and_load()?
        };

        // Step 2: Apply flag overrides
        let width = self.width_override.unwrap_or(raw.width);

        // Step 3: Resolve the start route against the page registry
        let start_route = match &raw.start_route {
            Some(path) => {
                let route = RoutePath::new(path.clone());
                if page_for(route.as_str()).is_none() {
                    bail!("start_route '{}' is not a previewable route", route);
                }
                route
            }
            None => RoutePath::new(pages::ONBOARDING_COMPLETE),
        };

        Ok(PreviewConfig {
            width,
            start_route,
            history_limit: raw.history_limit,
        })
    }

    /// Search the standard locations, falling back to defaults
    fn search_and_load() -> Result<RawPreviewConfig> {
        // Current working directory
        let cwd_config = Path::new("pageproof.json");
        if cwd_config.exists() {
            return Self::load_from_file(cwd_config)
                .context("Failed to load ./pageproof.json");
        }

        // XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("pageproof").join("config.json");
            if xdg_config.exists() {
                return Self::load_from_file(&xdg_config).with_context(|| {
                    format!("Failed to load config from {}", xdg_config.display())
                });
            }
        }

        Ok(RawPreviewConfig::default())
    }

    /// Load a single config file
    fn load_from_file(path: &Path) -> Result<RawPreviewConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let raw = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(raw)
    }
}

impl Default for PreviewConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
