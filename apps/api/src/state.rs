use std::sync::Arc;

use crate::config::Config;
use crate::usage::UsageStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no scan results and no payment flags; those travel with each request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable usage counter. Default: RedisUsageStore, in-memory when REDIS_URL is unset.
    pub usage: Arc<dyn UsageStore>,
}
