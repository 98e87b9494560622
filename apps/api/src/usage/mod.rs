//! Usage counter: detailed scans per calendar month.
//!
//! Pluggable, trait-based store. Default: `RedisUsageStore`.
//! `InMemoryUsageStore` backs tests and Redis-less local runs.
//! Only the display layer consults it; the scoring engine never does.

pub mod handlers;
mod month;

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use redis::AsyncCommands;
use thiserror::Error;
use tracing::debug;

pub use month::{MonthKey, MonthKeyError};

const KEY_PREFIX: &str = "rexa:usage";

#[derive(Debug, Error)]
pub enum UsageError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("usage store lock poisoned")]
    Poisoned,
}

/// Monthly counter store. Unknown months read as 0; a new month starts from 0.
#[async_trait]
pub trait UsageStore: Send + Sync {
    /// Bumps the month's counter and returns the new value.
    async fn increment(&self, month: &MonthKey) -> Result<u64, UsageError>;

    async fn read(&self, month: &MonthKey) -> Result<u64, UsageError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Redis
// ────────────────────────────────────────────────────────────────────────────

pub struct RedisUsageStore {
    client: redis::Client,
}

impl RedisUsageStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }

    fn key(month: &MonthKey) -> String {
        format!("{KEY_PREFIX}:{month}")
    }
}

#[async_trait]
impl UsageStore for RedisUsageStore {
    async fn increment(&self, month: &MonthKey) -> Result<u64, UsageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let count: u64 = conn.incr(Self::key(month), 1u64).await?;
        debug!(%month, count, "usage counter incremented");
        Ok(count)
    }

    async fn read(&self, month: &MonthKey) -> Result<u64, UsageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let count: Option<u64> = conn.get(Self::key(month)).await?;
        Ok(count.unwrap_or(0))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryUsageStore {
    counts: Mutex<HashMap<MonthKey, u64>>,
}

impl InMemoryUsageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UsageStore for InMemoryUsageStore {
    async fn increment(&self, month: &MonthKey) -> Result<u64, UsageError> {
        let mut counts = self.counts.lock().map_err(|_| UsageError::Poisoned)?;
        let count = counts.entry(*month).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    async fn read(&self, month: &MonthKey) -> Result<u64, UsageError> {
        let counts = self.counts.lock().map_err(|_| UsageError::Poisoned)?;
        Ok(counts.get(month).copied().unwrap_or(0))
    }
}
