use anyhow::{Context, Result};
use quote_service::config::Config;
use quote_service::quotes::{QuoteCatalog, QuoteService};
use quote_service::server;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quote_service=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting quote service v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    // A catalog without English quotes must never serve traffic
    let catalog = match &config.quotes_file {
        Some(path) => QuoteCatalog::from_file(path),
        None => QuoteCatalog::builtin(),
    }
    .context("Failed to load quote catalog")?;

    for group in catalog.groups() {
        info!("Loaded {} '{}' quotes", group.len(), group.language());
    }

    let service = QuoteService::new(Arc::new(catalog));
    server::run(&config, service).await
}
