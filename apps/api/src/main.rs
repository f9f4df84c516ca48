mod auth;
mod chat;
mod config;
mod content;
mod db;
mod errors;
mod journal;
mod llm_client;
mod models;
mod routes;
mod state;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::PgSessionProvider;
use crate::chat::store::PgChatStore;
use crate::config::Config;
use crate::db::create_pool;
use crate::journal::cache::RedisJournalCache;
use crate::journal::store::PgJournalStore;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting MindMate API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize Redis (journal listing cache)
    let redis = redis::Client::open(config.redis_url.clone())?;
    info!("Redis client initialized");

    // Initialize LLM client
    let llm = GeminiClient::new(config.gemini_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        sessions: Arc::new(PgSessionProvider::new(db.clone())),
        chats: Arc::new(PgChatStore::new(db.clone())),
        journal: Arc::new(PgJournalStore::new(db)),
        journal_cache: Arc::new(RedisJournalCache::new(
            redis,
            config.journal_cache_ttl_secs,
        )),
        session_cookie_name: config.session_cookie_name.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the web frontend's domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
