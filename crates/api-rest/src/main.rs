//! Standalone REST/HTML server binary.
//!
//! ## Purpose
//! Runs the Scamwatch site on its own.
//!
//! ## Intended use
//! Useful for development when iterating on pages or the JSON API. The workspace's main
//! `scamwatch-run` binary serves the same router and also loads `.env`.

use api_rest::{build_router, AppState};
use scamwatch_core::{CatalogService, CoreConfig};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the Scamwatch REST server
///
/// Starts the server on the configured address (default: 0.0.0.0:3000).
///
/// # Environment Variables
/// - `SCAMWATCH_ADDR`: Server address (default: "0.0.0.0:3000")
/// - content source variables, see [`CoreConfig::from_env`]
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(env_filter()?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("SCAMWATCH_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("-- Starting Scamwatch REST API on {}", addr);

    let cfg = Arc::new(CoreConfig::from_env()?);
    let state = AppState {
        catalogs: CatalogService::from_config(cfg)?,
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, build_router(state)).await?;

    Ok(())
}

fn env_filter() -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::from_default_env()
        .add_directive("api_rest=info".parse()?)
        .add_directive("scamwatch_core=info".parse()?)
        .add_directive("cms=warn".parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_includes_cms_warnings() {
        let filter = env_filter().expect("directives parse").to_string().to_lowercase();
        assert!(filter.contains("cms=warn"), "{filter}");
    }
}
