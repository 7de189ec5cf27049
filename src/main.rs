use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use hearth::config::AppConfig;
use hearth::handlers;
use hearth::services::backend::http::HttpBackend;
use hearth::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    tracing::info!(backend = %config.backend_url, "using household backend");
    let backend = HttpBackend::new(config.backend_url.clone(), config.backend_token.clone());

    let state = Arc::new(AppState {
        config: config.clone(),
        backend: Box::new(backend),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/capture", post(handlers::capture::capture))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
