//! Interactive browser command

use anyhow::Result;
use tracing::debug;

use crate::config::PreviewConfigLoader;
use crate::interactive::run_browser;

/// Start the interactive page browser
pub async fn browse_command(config_loader: PreviewConfigLoader) -> Result<()> {
    let config = config_loader.load()?;
    debug!("Browser starting at {}", config.start_route);

    run_browser(config).await
}
