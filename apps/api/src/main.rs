mod catalog;
mod config;
mod errors;
mod generation;
mod llm_client;
mod oracle;
mod routes;
mod state;
mod store;
mod telegram;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::limiter::UsageLimiter;
use crate::generation::profile;
use crate::generation::replicate::ReplicateClient;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{KvStore, MemoryStore};
use crate::telegram::TelegramNotifier;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values only; missing
    // provider credentials degrade per-endpoint instead).
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Topordorf Oracle API v{}", env!("CARGO_PKG_VERSION"));

    // Resolve the sketch provider profile
    let profile = profile::by_name(&config.sketch_profile)
        .with_context(|| format!("unknown sketch profile '{}'", config.sketch_profile))?;
    info!(
        "Sketch profile: {} ({}, blocking: {})",
        profile.name, profile.model, profile.block_until_done
    );

    // Initialize provider clients where credentials allow
    let replicate = config.replicate_api_token.clone().map(ReplicateClient::new);
    if replicate.is_none() {
        warn!("REPLICATE_API_TOKEN is not set; sketch generation is disabled");
    }

    let llm = config.gemini_api_key.clone().map(LlmClient::new);
    if llm.is_some() {
        info!("LLM client initialized (model: {})", llm_client::MODEL);
    }

    let telegram = config.telegram_bot_token.clone().map(TelegramNotifier::new);
    if telegram.is_none() {
        warn!("TELEGRAM_BOT_TOKEN is not set; webhook replies are disabled");
    }

    // Per-day state store and the usage cap over it
    let store: Arc<dyn KvStore> = Arc::new(MemoryStore::default());
    let limiter = UsageLimiter::new(Arc::clone(&store), config.sketch_daily_limit);

    // Build app state
    let state = AppState {
        config: config.clone(),
        replicate,
        llm,
        telegram,
        store,
        limiter,
        profile,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the storefront is served from another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
