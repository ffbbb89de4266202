//! The transport seam between the retry engine and the network.
//!
//! The engine only needs "send this request, give me status and bytes".
//! [`ReqwestTransport`] is the production implementation; tests plug in
//! scripted transports through the same trait.

use crate::client::config::ClientConfig;
use crate::error::{ApiError, Result as ApiResult};
use crate::types::{PreparedRequest, RawResponse};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Failure of a single transport call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection, DNS or timeout failure. Retryable.
    #[error("network error (timeout: {timeout}): {message}")]
    Network {
        /// Whether the failure was a timeout
        timeout: bool,
        /// Error description
        message: String,
    },
    /// The response body could not be read. Terminal.
    #[error("read error: {0}")]
    Read(String),
    /// The request could not be built. Terminal.
    #[error("request build error: {0}")]
    Build(String),
}

/// Performs one network round trip.
///
/// Implementations must not retry on their own; one call is one attempt.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the status code with the full body.
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError>;
}

/// [`Transport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport from client configuration.
    ///
    /// Fails with [`ApiError::Config`] on an invalid proxy URL or when the
    /// underlying client cannot be constructed.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(config.pool_max_idle_per_host);

        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        if !config.proxy_url.is_empty() {
            let proxy = reqwest::Proxy::all(&config.proxy_url).map_err(|e| {
                ApiError::Config(format!("invalid proxy_url {:?}: {}", config.proxy_url, e))
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| ApiError::Config(format!("cannot build http client: {}", e)))?;

        Ok(ReqwestTransport { client })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_client(client: reqwest::Client) -> Self {
        ReqwestTransport { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError> {
        let mut req_builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        let response = req_builder.send().await.map_err(from_send_error)?;
        let status = response.status().as_u16();

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Network {
                    timeout: true,
                    message: e.to_string(),
                }
            } else {
                TransportError::Read(e.to_string())
            }
        })?;

        Ok(RawResponse { status, body })
    }
}

fn from_send_error(e: reqwest::Error) -> TransportError {
    if e.is_builder() {
        return TransportError::Build(e.to_string());
    }
    TransportError::Network {
        timeout: e.is_timeout(),
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;
    use url::Url;

    #[test]
    fn test_invalid_proxy_is_config_error() {
        let config = ClientConfig {
            proxy_url: "not a proxy url".into(),
            ..Default::default()
        };
        assert!(matches!(
            ReqwestTransport::new(&config),
            Err(ApiError::Config(_))
        ));
    }

    #[test]
    fn test_valid_proxy_accepted() {
        let config = ClientConfig {
            proxy_url: "http://127.0.0.1:3128".into(),
            ..Default::default()
        };
        assert!(ReqwestTransport::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let transport = ReqwestTransport::new(&ClientConfig::default()).unwrap();
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let url = Url::parse(&format!("http://127.0.0.1:{}/v1/organisation/accounts", port)).unwrap();
        let result = transport.send(&PreparedRequest::new(Method::GET, url)).await;
        assert!(matches!(result, Err(TransportError::Network { .. })));
    }
}
