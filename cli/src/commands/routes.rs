//! Route listing command

use anyhow::Result;
use pageproof_core::site_routes;
use tracing::info;

/// List the previewable routes
pub async fn routes_command() -> Result<()> {
    info!("Listing previewable routes");

    println!("📄 Previewable routes\n");

    for route in site_routes() {
        println!("  {:<34}  {}", route.path, route.title);
        if let Some(description) = &route.description {
            println!("  {:<34}  {}", "", description);
        }
        println!();
    }

    println!("💡 Run `pageproof <route>` to print a page, or `pageproof` to browse.");

    Ok(())
}
