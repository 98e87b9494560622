use anyhow::{Context, Result};

const DEFAULT_USAGE_WARNING_THRESHOLD: u64 = 5;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_MAX_EXTRACTED_BYTES: usize = 32 * 1024 * 1024;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Usage counter backend. Unset → in-memory counter (lost on restart).
    pub redis_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Detailed scans per month above which the Pro Suite notice is shown.
    pub usage_warning_threshold: u64,
    pub max_upload_bytes: usize,
    /// Ceiling on decompressed document content, independent of the upload size.
    pub max_extracted_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            redis_url: optional_env("REDIS_URL"),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            usage_warning_threshold: parse_env(
                "USAGE_WARNING_THRESHOLD",
                DEFAULT_USAGE_WARNING_THRESHOLD,
            )?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            max_extracted_bytes: parse_env("MAX_EXTRACTED_BYTES", DEFAULT_MAX_EXTRACTED_BYTES)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: None,
            port: 8080,
            rust_log: "info".to_string(),
            usage_warning_threshold: DEFAULT_USAGE_WARNING_THRESHOLD,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_extracted_bytes: DEFAULT_MAX_EXTRACTED_BYTES,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
