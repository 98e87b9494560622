mod config;
mod engine;
mod errors;
mod extraction;
mod render;
mod routes;
mod scan;
mod state;
mod usage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::usage::{InMemoryUsageStore, RedisUsageStore, UsageStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Rexa ATS API v{}", env!("CARGO_PKG_VERSION"));

    let usage = build_usage_store(&config)?;

    let state = AppState {
        config: config.clone(),
        usage,
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

/// Redis when REDIS_URL is set, otherwise a process-local counter.
fn build_usage_store(config: &Config) -> Result<Arc<dyn UsageStore>> {
    match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str())?;
            info!("Usage counter backed by Redis");
            Ok(Arc::new(RedisUsageStore::new(client)))
        }
        None => {
            warn!("REDIS_URL not set; usage counts are kept in memory and reset on restart");
            Ok(Arc::new(InMemoryUsageStore::new()))
        }
    }
}
