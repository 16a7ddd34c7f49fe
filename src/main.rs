use std::sync::Arc;

use api_rest::{AppState, build_router};
use scamwatch_core::{CatalogService, ContentSource, CoreConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the Scamwatch application
///
/// Serves the catalog pages, the JSON API and the Swagger UI from a single HTTP server
/// (default `0.0.0.0:3000`). Loads `.env` first so local development can keep CMS settings
/// out of the shell.
///
/// # Environment Variables
/// - `SCAMWATCH_ADDR`: HTTP server address (default: "0.0.0.0:3000")
/// - `CMS_BASE_URL`, `CMS_API_KEY`, `CMS_TIMEOUT_SECS`: hosted CMS access
/// - `CMS_FIXTURE_DIR`: serve collections from local files instead (default: `content/`)
/// - `CMS_SCAMS_COLLECTION`, `CMS_TACTICS_COLLECTION`: collection name overrides
///
/// # Returns
/// * `Ok(())` - If the server shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration is invalid or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(env_filter()?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("SCAMWATCH_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let cfg = Arc::new(CoreConfig::from_env()?);
    match cfg.content_source() {
        ContentSource::Http { base_url, .. } => {
            tracing::info!("++ Reading content from CMS at {}", base_url)
        }
        ContentSource::Fixtures { dir } => {
            tracing::info!("++ Reading content from fixtures in {}", dir.display())
        }
    }

    let state = AppState {
        catalogs: CatalogService::from_config(cfg)?,
    };

    tracing::info!("++ Starting Scamwatch on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Scamwatch stopped");
    Ok(())
}

/// `RUST_LOG` plus the default directives; `cms=warn` surfaces skipped CMS items.
fn env_filter() -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::from_default_env()
        .add_directive("scamwatch=info".parse()?)
        .add_directive("api_rest=info".parse()?)
        .add_directive("cms=warn".parse()?))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
