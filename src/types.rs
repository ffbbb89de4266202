//! Core request/response types shared by the transport, classifier and engine.
//!
//! | Type | Lifetime |
//! |------|----------|
//! | [`PreparedRequest`] | Built once per logical operation, read by every attempt |
//! | [`RawResponse`] | Produced per attempt, dropped after classification |
//! | [`ClassifiedOutcome`] | Verdict for one attempt |
//! | [`ExecutionResult`] | Final value handed back to the caller |

use crate::error::{ApiError, Result};
use bytes::Bytes;
use http::{HeaderMap, Method};
use url::Url;

/// A fully-formed request, immutable once handed to the engine.
///
/// The body is held as [`Bytes`], so every attempt re-sends the same buffer
/// without copying.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute target URL, query included
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Optional request body
    pub body: Option<Bytes>,
}

impl PreparedRequest {
    /// Create a request without headers or body.
    pub fn new(method: Method, url: Url) -> Self {
        PreparedRequest {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Replace the header map.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Attach a body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// URL path, used as the endpoint key in log events.
    pub fn endpoint(&self) -> &str {
        self.url.path()
    }
}

/// Status code and body bytes returned by one transport call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Complete response body
    pub body: Bytes,
}

impl RawResponse {
    /// Create a raw response.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        RawResponse {
            status,
            body: body.into(),
        }
    }
}

/// Verdict for a single attempt.
///
/// Exactly one variant is active: a success never carries an error and a
/// failure never carries a payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedOutcome<T> {
    /// 2xx response, with the decoded resource when the body had one
    Success(Option<T>),
    /// Failure that ends the retry loop
    Terminal(ApiError),
    /// Transient failure; the loop backs off and tries again
    Retryable(ApiError),
}

impl<T> ClassifiedOutcome<T> {
    /// Check if this outcome ends the retry loop.
    pub fn is_terminal(&self) -> bool {
        !self.is_retryable()
    }

    /// Check if this outcome triggers another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClassifiedOutcome::Retryable(_))
    }
}

/// Final result of one logical operation: a decoded resource, an empty
/// acknowledgment (`Ok(None)`, e.g. a delete), or a single terminal error.
pub type ExecutionResult<T> = Result<Option<T>>;
