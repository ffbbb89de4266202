#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Account API client
//!
//! A client for a JSON:API-style accounts service that keeps working when the
//! service does not: transient failures are retried with exponential backoff
//! and jitter, and every call is bounded by caller cancellation or a
//! client-wide deadline.
//!
//! ## Overview
//!
//! One logical operation flows through four pieces:
//!
//! 1. **Classifier** - turns `(status, body)` or a transport failure into
//!    success, terminal failure or retryable failure
//! 2. **Backoff** - `500ms * 1.5^attempt` plus up to ±50ms of jitter
//! 3. **Retry loop** - sends, classifies and backs off until a terminal outcome
//! 4. **Cancellation race** - runs the loop on its own task and returns as soon
//!    as the caller's token or deadline fires
//!
//! Retryable failures never reach the caller. A caller sees exactly one of: a
//! decoded resource, an empty acknowledgment, or one terminal [`ApiError`].
//!
//! ## Status Codes
//!
//! | Status | Outcome |
//! |--------|---------|
//! | `204` / empty 2xx | success without resource |
//! | other 2xx | success, `data` envelope decoded |
//! | `400 401 403 404 405 406 409` | [`ApiError::Client`], not retried |
//! | `429 500 502 503 504` | retried |
//! | anything else | [`ApiError::UnexpectedStatus`] |
//!
//! ## Usage
//!
//! ```ignore
//! use account_api_client::{AccountClient, AccountData, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AccountClient::with_config(ClientConfig::from_env()?)?;
//!
//!     let created = client.create_account(&AccountData {
//!         id: "ad27e265-9605-4b4b-a0e5-3003ea9cc4dc".into(),
//!         organisation_id: "eb0bd6f5-c3f5-44b2-b677-acd23cdde73c".into(),
//!         resource_type: "accounts".into(),
//!         ..Default::default()
//!     }).await?;
//!
//!     client.delete_account(&created.id, created.version).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - **[client]** - AccountClient, retry engine, transport and configuration
//! - **[error]** - Error types and result handling
//! - **[types]** - Prepared requests, raw responses and outcomes
//! - **[models]** - Account resource model
//! - **[protocol]** - Media type, headers and envelopes
//! - **[logging]** - tracing subscriber setup

pub mod client;
pub mod error;
pub mod logging;
pub mod models;
pub mod protocol;
pub mod types;

pub use client::{AccountClient, BackoffPolicy, CancelSignal, ClientConfig, RetryLoop, Transport};
pub use error::{ApiError, Result};
pub use models::{AccountAttributes, AccountData};
pub use types::{ClassifiedOutcome, ExecutionResult, PreparedRequest, RawResponse};
