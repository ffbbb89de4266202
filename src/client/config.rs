//! Client configuration.
//!
//! A [`ClientConfig`] is built once and shared (behind an `Arc`) by every call
//! made through an [`AccountClient`](crate::client::AccountClient).

use crate::client::backoff::BackoffPolicy;
use crate::error::{ApiError, Result};
use crate::protocol::constants::MEDIA_TYPE;
use serde::Deserialize;
use std::time::Duration;

/// Environment variable holding the service base URL.
pub const HOST_ADDRESS_ENV: &str = "HOST_ADDRESS";
/// Environment variable overriding [`ClientConfig::timeout_ms`].
pub const TIMEOUT_ENV: &str = "ACCOUNT_CLIENT_TIMEOUT_MS";
/// Environment variable setting [`ClientConfig::max_attempts`].
pub const MAX_ATTEMPTS_ENV: &str = "ACCOUNT_CLIENT_MAX_ATTEMPTS";

/// Default service location.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Default total timeout of a logical operation, retries included.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Configuration for the account client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Service root, e.g. `http://localhost:8080`
    pub base_url: String,
    /// Deadline for one logical operation including every retry; 0 disables it
    pub timeout_ms: u64,
    /// Timeout applied by the transport to each attempt; 0 (the default)
    /// leaves attempts bounded only by `timeout_ms`
    pub request_timeout_ms: u64,
    /// Optional ceiling on transport calls per operation; `None` retries until
    /// a terminal response or cancellation
    pub max_attempts: Option<u32>,
    /// Delay between retryable attempts
    pub backoff: BackoffPolicy,
    /// Media type sent in `Content-Type` and `Accept`
    pub content_type: String,
    /// Proxy for all requests; empty means none
    pub proxy_url: String,
    /// Idle connections kept per host
    pub pool_max_idle_per_host: usize,
    /// Emit tracing events from the retry engine
    pub enable_logging: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            request_timeout_ms: 0,
            max_attempts: None,
            backoff: BackoffPolicy::default(),
            content_type: MEDIA_TYPE.to_string(),
            proxy_url: String::new(),
            pool_max_idle_per_host: 32,
            enable_logging: true,
        }
    }
}

impl ClientConfig {
    /// Create a default configuration pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Load configuration from the process environment.
    ///
    /// Reads [`HOST_ADDRESS_ENV`], [`TIMEOUT_ENV`] and [`MAX_ATTEMPTS_ENV`];
    /// unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ClientConfig::default();

        if let Some(host) = lookup(HOST_ADDRESS_ENV) {
            config.base_url = host;
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            config.timeout_ms = raw
                .trim()
                .parse()
                .map_err(|_| ApiError::Config(format!("{}={:?} is not a number", TIMEOUT_ENV, raw)))?;
        }
        if let Some(raw) = lookup(MAX_ATTEMPTS_ENV) {
            let attempts: u32 = raw.trim().parse().map_err(|_| {
                ApiError::Config(format!("{}={:?} is not a number", MAX_ATTEMPTS_ENV, raw))
            })?;
            config.max_attempts = (attempts > 0).then_some(attempts);
        }

        Ok(config)
    }

    /// Total timeout per operation, `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }

    /// Per-attempt transport timeout, `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_ms > 0).then(|| Duration::from_millis(self.request_timeout_ms))
    }
}
