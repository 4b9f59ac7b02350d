mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod publish;
mod routes;
mod sessions;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::generator::ContentGenerator;
use crate::llm_client::LlmClient;
use crate::publish::github::GitHubStore;
use crate::publish::publisher::Publisher;
use crate::routes::build_router;
use crate::sessions::workflow::SiteBuilder;
use crate::sessions::SessionRegistry;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; a missing credential stops us before any client exists
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting site builder API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone(), config.gemini_api_url.as_str())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize remote file store
    let store = GitHubStore::new(
        config.github_token.clone(),
        config.github_repo.clone(),
        config.github_api_url.as_str(),
    )?;
    info!("File store initialized (repo: {})", config.github_repo);

    let builder = SiteBuilder::new(
        ContentGenerator::new(Arc::new(llm)),
        Publisher::new(Arc::new(store), config.hosting_domain.as_str()),
    );
    info!("Publishing to {}", config.hosting_domain);

    // Build app state
    let state = AppState {
        builder,
        sessions: SessionRegistry::new(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the form frontend has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
