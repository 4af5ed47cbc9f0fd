//! Workflow history gateway entry point.

use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use workflow_history_api::config::Config;
use workflow_history_api::error::AppError;
use workflow_history_api::state::AppState;
use workflow_history_http::HttpHistoryClient;
use workflow_history_services::domain::normalizer::StandardNormalizer;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting workflow history gateway");

    let config = Config::from_env()?;

    // One client serves both history pages and counts.
    let client = Arc::new(HttpHistoryClient::new(config.client_config())?);
    let app_state = AppState::new(client.clone(), client, Arc::new(StandardNormalizer));

    // TODO: Replace CorsLayer::permissive() with the presentation layer's origin.
    let app = workflow_history_api::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.socket_addr()?;
    tracing::info!(upstream = %config.upstream_url, "Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
