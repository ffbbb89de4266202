//! Account HTTP client and its retry engine.
//!
//! This module provides a client for the organisation accounts service that:
//!
//! - **Builds JSON:API requests** for each CRUD verb
//! - **Classifies responses** into success, terminal and retryable outcomes
//! - **Retries transient failures** with exponential backoff and jitter
//! - **Honors cancellation** from a caller token or a client-wide deadline
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── fetch     - AccountClient, the CRUD facade
//! ├── request   - per-verb PreparedRequest construction
//! ├── race      - cancellation race around the retry loop
//! ├── retry     - the retry loop
//! ├── backoff   - exponential backoff with jitter
//! ├── classify  - response and transport error classification
//! ├── transport - Transport trait and reqwest implementation
//! ├── config    - client configuration
//! └── utils     - status code helpers
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`AccountClient`] | CRUD client |
//! | [`RetryLoop`] | Attempt driver |
//! | [`CancelSignal`] | Token + deadline for one operation |
//! | [`BackoffPolicy`] | Inter-attempt delay |
//! | [`Transport`] | One network round trip |
//! | [`ClientConfig`] | Client configuration options |
//!
//! # Examples
//!
//! ## Creating a Client
//!
//! ```
//! use account_api_client::client::{AccountClient, ClientConfig};
//!
//! // Default configuration
//! let client = AccountClient::new()?;
//!
//! // Custom configuration
//! let config = ClientConfig {
//!     base_url: "http://accountapi:8080".to_string(),
//!     timeout_ms: 10_000,
//!     ..Default::default()
//! };
//! let client = AccountClient::with_config(config)?;
//! # Ok::<(), account_api_client::ApiError>(())
//! ```
//!
//! ## Classifying a Response
//!
//! ```
//! use account_api_client::client::classify;
//! use account_api_client::AccountData;
//!
//! let outcome = classify::<AccountData>(503, br#"{"error_message": "busy"}"#);
//! assert!(outcome.is_retryable());
//! ```

mod backoff;
mod classify;
mod config;
mod fetch;
mod race;
mod request;
mod retry;
mod transport;
mod utils;

pub use backoff::BackoffPolicy;
pub use classify::{classify, classify_attempt, classify_transport_error};
pub use config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, HOST_ADDRESS_ENV, MAX_ATTEMPTS_ENV,
    TIMEOUT_ENV,
};
pub use fetch::AccountClient;
pub use race::{run as run_cancellable, CancelSignal};
pub use request::AccountRequests;
pub use retry::RetryLoop;
pub use transport::{ReqwestTransport, Transport, TransportError};
pub use utils::*;
