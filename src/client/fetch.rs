//! Main account client implementation.
//!
//! Provides [`AccountClient`], the CRUD facade over the retry engine.
//!
//! # Examples
//!
//! ## Fetching an account
//!
//! ```ignore
//! use account_api_client::AccountClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AccountClient::new()?;
//!     let account = client.get_by_id("ad27e265-9605-4b4b-a0e5-3003ea9cc4dc").await?;
//!     println!("version: {}", account.version);
//!     Ok(())
//! }
//! ```
//!
//! ## Per-call cancellation
//!
//! ```ignore
//! use account_api_client::AccountClient;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//!
//! let token = CancellationToken::new();
//! let scoped = client
//!     .with_cancellation(token.clone())
//!     .with_timeout(Duration::from_secs(2));
//!
//! // From elsewhere: token.cancel();
//! let result = scoped.delete_account(&id, 0).await;
//! ```

use crate::client::config::ClientConfig;
use crate::client::race::{self, CancelSignal};
use crate::client::request::AccountRequests;
use crate::client::retry::RetryLoop;
use crate::client::transport::{ReqwestTransport, Transport};
use crate::error::{ApiError, Result};
use crate::models::AccountData;
use crate::types::{ExecutionResult, PreparedRequest};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Client for the organisation accounts resource.
///
/// Cloning is cheap; clones share the transport and configuration. All
/// methods are safe to call concurrently from many tasks.
///
/// # Features
///
/// - Retries 429/5xx responses and network failures with exponential backoff
/// - Bounded by a client-wide timeout (disabled with `timeout_ms = 0`)
/// - Per-call cancellation via [`with_cancellation`](Self::with_cancellation)
#[derive(Clone)]
pub struct AccountClient {
    engine: RetryLoop,
    requests: std::result::Result<AccountRequests, ApiError>,
    config: Arc<ClientConfig>,
    signal: CancelSignal,
}

impl AccountClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration and the reqwest transport
    ///
    /// Fails with [`ApiError::Config`] when the transport cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new(&config)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client over any [`Transport`]
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let engine = RetryLoop::from_config(transport, &config);
        let requests = AccountRequests::new(&config.base_url, config.content_type.clone());
        let signal = match config.timeout() {
            Some(timeout) => CancelSignal::new().with_timeout(timeout),
            None => CancelSignal::new(),
        };

        AccountClient {
            engine,
            requests,
            config: Arc::new(config),
            signal,
        }
    }

    /// Scoped clone whose calls also stop when `token` is cancelled.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        let mut scoped = self.clone();
        let signal = CancelSignal::from_token(token);
        scoped.signal = match self.signal.timeout() {
            Some(timeout) => signal.with_timeout(timeout),
            None => signal,
        };
        scoped
    }

    /// Scoped clone with a different total timeout; zero waits indefinitely.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        let mut scoped = self.clone();
        scoped.signal = self.signal.clone().with_timeout(timeout);
        scoped
    }

    /// Fetch an account by id
    pub async fn get_by_id(&self, account_id: &str) -> Result<AccountData> {
        let request = self.requests()?.fetch(account_id)?;
        self.execute::<AccountData>(request)
            .await?
            .ok_or(ApiError::EmptyResponse)
    }

    /// Create an account; returns the account as stored by the service
    pub async fn create_account(&self, account: &AccountData) -> Result<AccountData> {
        let request = self.requests()?.create(account)?;
        self.execute::<AccountData>(request)
            .await?
            .ok_or(ApiError::EmptyResponse)
    }

    /// Update an existing account; returns the updated account
    pub async fn update_account(&self, account: &AccountData) -> Result<AccountData> {
        let request = self.requests()?.update(account)?;
        self.execute::<AccountData>(request)
            .await?
            .ok_or(ApiError::EmptyResponse)
    }

    /// Delete an account at `version`
    pub async fn delete_account(&self, account_id: &str, version: i64) -> Result<()> {
        let request = self.requests()?.delete(account_id, version)?;
        self.execute::<serde_json::Value>(request).await.map(|_| ())
    }

    /// Run a prepared request through the retry engine under this client's
    /// cancellation signal.
    ///
    /// Returns `Ok(None)` for a success without a resource.
    pub async fn execute<T>(&self, request: PreparedRequest) -> ExecutionResult<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        race::run(self.engine.clone(), request, &self.signal).await
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The cancellation signal applied to calls made through this handle
    pub fn signal(&self) -> &CancelSignal {
        &self.signal
    }

    fn requests(&self) -> Result<&AccountRequests> {
        self.requests.as_ref().map_err(Clone::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = AccountClient::new().unwrap();
        assert!(client.config().max_attempts.is_none());
        assert_eq!(client.signal().timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_scoped_handles() {
        let client = AccountClient::new().unwrap();
        let token = CancellationToken::new();

        let scoped = client.with_cancellation(token.clone());
        assert_eq!(scoped.signal().timeout(), client.signal().timeout());

        token.cancel();
        assert!(scoped.signal().is_cancelled());
        assert!(!client.signal().is_cancelled());

        let unbounded = client.with_timeout(Duration::ZERO);
        assert!(unbounded.signal().timeout().is_none());
    }

    #[tokio::test]
    async fn test_bad_base_url_surfaces_on_call() {
        let client = AccountClient::with_config(ClientConfig::new("::not a url::")).unwrap();
        let result = client.get_by_id("x").await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[test]
    fn test_bad_proxy_fails_construction() {
        let config = ClientConfig {
            proxy_url: "not a proxy url".into(),
            ..Default::default()
        };
        assert!(matches!(
            AccountClient::with_config(config),
            Err(ApiError::Config(_))
        ));
    }
}
