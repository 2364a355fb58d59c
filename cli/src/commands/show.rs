//! Single page rendering command

use anyhow::Result;
use pageproof_core::{page_for, RoutePath, RouterError};
use tracing::debug;

use crate::config::PreviewConfigLoader;
use crate::render::render_page_to_string;

/// Render one page to stdout and exit
pub async fn show_command(
    route: String,
    config_loader: PreviewConfigLoader,
    json: bool,
) -> Result<()> {
    let config = config_loader.load()?;
    let path = RoutePath::new(route);
    debug!("Rendering page at {}", path);

    let page = page_for(path.as_str())
        .ok_or_else(|| RouterError::RouteNotFound(path.as_str().to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print!("{}", render_page_to_string(&page, config.width));
    }

    Ok(())
}
