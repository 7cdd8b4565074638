use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_CONTENT_API_URL: &str = "http://localhost:3060";
const DEFAULT_METADATA_API_URL: &str = "http://localhost:4000";
const DEFAULT_ANIZONE_API_URL: &str = "http://localhost:4001";

/// Runtime configuration, read from the environment (after `.env` is loaded)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub bind_address: SocketAddr,
    /// Content-metadata provider: primary episode lists and episode images
    pub content_api_url: String,
    /// Episode-metadata / anime-info service
    pub metadata_api_url: String,
    /// Secondary episode-list provider
    pub anizone_api_url: String,
    pub cache_ttl: Duration,
    pub cache_max_entries: usize,
    pub image_fetch_timeout: Duration,
    /// `None` leaves upstream calls unbounded
    pub upstream_timeout: Option<Duration>,
    pub upstream_requests_per_second: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 3000))),
            content_api_url: DEFAULT_CONTENT_API_URL.to_string(),
            metadata_api_url: DEFAULT_METADATA_API_URL.to_string(),
            anizone_api_url: DEFAULT_ANIZONE_API_URL.to_string(),
            cache_ttl: Duration::from_secs(3600),
            cache_max_entries: 1000,
            image_fetch_timeout: Duration::from_millis(2000),
            upstream_timeout: None,
            upstream_requests_per_second: 10.0,
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to defaults
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let config = Self {
            bind_address: parse_or(get("BIND_ADDRESS"), "BIND_ADDRESS", defaults.bind_address)?,
            content_api_url: base_url(get("CONTENT_API_URL"), defaults.content_api_url),
            metadata_api_url: base_url(get("METADATA_API_URL"), defaults.metadata_api_url),
            anizone_api_url: base_url(get("ANIZONE_API_URL"), defaults.anizone_api_url),
            cache_ttl: Duration::from_secs(parse_or(
                get("EPISODES_CACHE_TTL_SECS"),
                "EPISODES_CACHE_TTL_SECS",
                defaults.cache_ttl.as_secs(),
            )?),
            cache_max_entries: parse_or(
                get("CACHE_MAX_ENTRIES"),
                "CACHE_MAX_ENTRIES",
                defaults.cache_max_entries,
            )?,
            image_fetch_timeout: Duration::from_millis(parse_or(
                get("IMAGE_FETCH_TIMEOUT_MS"),
                "IMAGE_FETCH_TIMEOUT_MS",
                defaults.image_fetch_timeout.as_millis() as u64,
            )?),
            upstream_timeout: get("UPSTREAM_TIMEOUT_SECS")
                .map(|raw| parse_value::<u64>(&raw, "UPSTREAM_TIMEOUT_SECS"))
                .transpose()?
                .map(Duration::from_secs),
            upstream_requests_per_second: parse_or(
                get("UPSTREAM_REQUESTS_PER_SECOND"),
                "UPSTREAM_REQUESTS_PER_SECOND",
                defaults.upstream_requests_per_second,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.cache_ttl.is_zero() {
            return Err(AppError::ConfigError(
                "EPISODES_CACHE_TTL_SECS must be greater than zero".to_string(),
            ));
        }

        if !(self.upstream_requests_per_second > 0.0) {
            return Err(AppError::ConfigError(
                "UPSTREAM_REQUESTS_PER_SECOND must be greater than zero".to_string(),
            ));
        }

        for (name, url) in [
            ("CONTENT_API_URL", &self.content_api_url),
            ("METADATA_API_URL", &self.metadata_api_url),
            ("ANIZONE_API_URL", &self.anizone_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AppError::ConfigError(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }

        Ok(())
    }
}

fn base_url(value: Option<String>, default: String) -> String {
    value
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_string()
}

fn parse_or<T: FromStr>(value: Option<String>, key: &str, default: T) -> AppResult<T> {
    match value {
        Some(raw) => parse_value(&raw, key),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(raw: &str, key: &str) -> AppResult<T> {
    raw.parse::<T>()
        .map_err(|_| AppError::ConfigError(format!("Invalid value for {}: '{}'", key, raw)))
}
