//! # pageproof CLI
//!
//! Terminal preview of the app's static status pages.
//!
//! ## Usage
//!
//! - `pageproof` - Browse the pages interactively
//! - `pageproof /demo/success` - Print a single page and exit
//! - `pageproof routes` - List the previewable routes
//!
//! The previewer exists so copy changes to these pages can be proofed
//! without booting the web frontend.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod interactive;
mod render;

use commands::{browse_command, routes_command, show_command};
use config::PreviewConfigLoader;

/// pageproof - terminal preview of the app's static status pages
#[derive(Parser)]
#[command(name = "pageproof")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal preview of the app's static status pages")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render width override in columns
    #[arg(long)]
    width: Option<u16>,

    /// Print the page as JSON instead of rendered text (with a route)
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// The route to render (if provided, prints the page and exits)
    route: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the previewable routes
    Routes,
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> PreviewConfigLoader {
    let mut loader = PreviewConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(width) = cli.width {
        loader = loader.with_width_override(width);
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    pageproof_core::init_tracing_with_debug(cli.verbose);

    // Build configuration loader
    let config_loader = build_config_loader(&cli);

    match (cli.route, cli.command) {
        // If a route is provided, print that page and exit
        (Some(route), None) => show_command(route, config_loader, cli.json).await,
        // A route together with a subcommand is an error
        (Some(_), Some(_)) => {
            tracing::error!("Error: Cannot specify both a route and a subcommand");
            std::process::exit(1);
        }
        // Handle subcommands
        (None, Some(Commands::Routes)) => routes_command().await,
        // Default to the interactive browser
        (None, None) => browse_command(config_loader).await,
    }
}
