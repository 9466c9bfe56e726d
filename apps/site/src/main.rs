//! # Taproom Site Entry Point
//!
//! ```bash
//! # Default config location, port 3000
//! cargo run -p taproom-site
//!
//! # Explicit config file
//! cargo run -p taproom-site -- --config ./site.toml
//! ```

use std::path::PathBuf;

use taproom_site::config::SiteConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    taproom_site::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let config_path = args
        .iter()
        .position(|arg| arg == "--config" || arg == "-c")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from);

    info!("Starting Taproom site...");

    let config = SiteConfig::load(config_path)?;
    info!(
        addr = %config.bind_address(),
        images = config.slideshow.images.len(),
        "Configuration loaded"
    );

    taproom_site::run(config).await?;
    Ok(())
}
