use anyhow::Context;
use ecotour_backend::api;
use ecotour_backend::catalog::handlers::AppState;
use ecotour_backend::config::Settings;
use ecotour_backend::sparql::{SparqlClient, SparqlClientConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load().context("loading configuration")?;

    tracing::info!("connecting to triple store at {}", settings.store.query_url);
    let store = SparqlClient::new(SparqlClientConfig {
        query_url: settings.store.query_url.clone(),
        update_url: settings.store.update_url.clone(),
        timeout: Duration::from_millis(settings.store.timeout_ms),
    })?;

    let app = api::build_router(AppState {
        store: Arc::new(store),
    });

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    tracing::info!("starting eco-tourism backend on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
