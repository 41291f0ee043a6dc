//! Multiverse Catalog
//!
//! Browse, filter and inspect Rick and Morty characters.
//!
//! This is the main entry point for the Dioxus desktop application.

use anyhow::Context;
use catalog_client::{CatalogClient, ClientConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    // Initialize logging; RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .pretty()
        .init();

    let config = ClientConfig::from_env().context("invalid client configuration")?;
    info!(
        timeout_secs = config.timeout.as_secs(),
        cache_ttl_secs = config.cache_ttl.as_secs(),
        cache_capacity = config.cache_capacity,
        "Client configured"
    );

    let client = CatalogClient::new(&config).context("failed to build the HTTP client")?;

    // Launch the Dioxus desktop application
    catalog_ui::launch(client);

    Ok(())
}
