mod analyze;
mod config;
mod errors;
mod extract;
mod llm_client;
mod models;
mod resumes;
mod routes;
mod state;
mod store;
mod upload;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analyze::analyzer::LlmAnalyzer;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::JsonFileStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting rescore API v{}", env!("CARGO_PKG_VERSION"));

    // Record store (runs the one-time legacy migration)
    let store = JsonFileStore::open(&config.data_dir)?;
    info!("Record store ready under {}", config.data_dir.display());

    // Analyzer
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; analysis requests will fail until it is");
    }
    let llm = LlmClient::new(config.openai_api_key.clone(), config.openai_model.clone());
    info!("Analyzer initialized (model: {})", llm.model());

    let state = AppState {
        store: Arc::new(store),
        analyzer: Arc::new(LlmAnalyzer(llm)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
