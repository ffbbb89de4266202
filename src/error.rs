//! Error types for the account client.
//!
//! Every failure the engine can surface to a caller is a variant of [`ApiError`].
//! Retryable variants ([`ApiError::Transport`], [`ApiError::Server`]) are absorbed
//! by the retry loop and only escape wrapped in [`ApiError::AttemptsExhausted`]
//! when an attempt ceiling is configured.
//!
//! Payloads are owned strings so errors can be cloned and compared; callers
//! should match on the variant rather than on the rendered message.

use std::time::Duration;
use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors produced while building, executing or decoding a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network failure or transport timeout while talking to the service.
    #[error("request to {endpoint} failed (timeout: {timeout}): {message}")]
    Transport {
        /// Path of the endpoint being called
        endpoint: String,
        /// Whether the transport reported a timeout
        timeout: bool,
        /// Transport error description
        message: String,
    },

    /// The response arrived but its body could not be read locally.
    #[error("got an error while reading the response body: {0}")]
    Read(String),

    /// The request could not be constructed (bad base URL, invalid header, ...).
    #[error("got an error while creating the request: {0}")]
    InvalidRequest(String),

    /// The request payload could not be serialized.
    #[error("could not json encode request body: {0}")]
    Encode(String),

    /// A success response carried a body that is not a valid envelope.
    #[error("cannot decode response body: {0}")]
    Decode(String),

    /// The service rejected the request (4xx family). Never retried.
    #[error("response status code {status} with error message: {message}")]
    Client {
        /// HTTP status code
        status: u16,
        /// `error_message` from the error envelope, empty when absent
        message: String,
    },

    /// The service failed transiently (429 / 5xx family).
    #[error("response status code {status} with error message: {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// `error_message` from the error envelope, empty when absent
        message: String,
    },

    /// A status code outside every known family.
    #[error("unexpected response status code: {0}")]
    UnexpectedStatus(u16),

    /// A 2xx response without a resource where one was required.
    #[error("response did not contain a resource")]
    EmptyResponse,

    /// The configured attempt ceiling was reached on retryable failures.
    #[error("gave up after {attempts} attempts: {last}")]
    AttemptsExhausted {
        /// Number of transport calls made
        attempts: u32,
        /// The last retryable failure observed
        last: Box<ApiError>,
    },

    /// The caller's cancellation token fired first.
    #[error("request cancelled")]
    Cancelled,

    /// The client-wide deadline elapsed first.
    #[error("exceeded {0:?} client's total timeout")]
    DeadlineExceeded(Duration),

    /// The retry worker ended without handing back a result.
    #[error("retry worker terminated without producing a result")]
    WorkerLost,

    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Check if the error describes a transient condition worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Transport { .. } | ApiError::Server { .. })
    }

    /// Check if the error was raised by the cancellation race.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, ApiError::Cancelled | ApiError::DeadlineExceeded(_))
    }

    /// HTTP status attached to the error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Client { status, .. } | ApiError::Server { status, .. } => Some(*status),
            ApiError::UnexpectedStatus(status) => Some(*status),
            ApiError::AttemptsExhausted { last, .. } => last.status(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Encode(e.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(e: url::ParseError) -> Self {
        ApiError::InvalidRequest(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_kinds() {
        let server = ApiError::Server {
            status: 503,
            message: String::new(),
        };
        let transport = ApiError::Transport {
            endpoint: "/v1".into(),
            timeout: true,
            message: "timed out".into(),
        };
        assert!(server.is_retryable());
        assert!(transport.is_retryable());
        assert!(!ApiError::UnexpectedStatus(302).is_retryable());
        assert!(!ApiError::Cancelled.is_retryable());
        assert!(ApiError::Cancelled.is_cancellation());
        assert!(ApiError::DeadlineExceeded(Duration::from_millis(50)).is_cancellation());
        assert!(!server.is_cancellation());
    }

    #[test]
    fn test_wire_messages() {
        assert_eq!(
            ApiError::UnexpectedStatus(302).to_string(),
            "unexpected response status code: 302"
        );
        let err = ApiError::Client {
            status: 409,
            message: "duplicate".into(),
        };
        assert_eq!(
            err.to_string(),
            "response status code 409 with error message: duplicate"
        );
        assert!(ApiError::Decode("eof".into())
            .to_string()
            .starts_with("cannot decode response body"));
    }

    #[test]
    fn test_status_through_exhaustion() {
        let err = ApiError::AttemptsExhausted {
            attempts: 3,
            last: Box::new(ApiError::Server {
                status: 502,
                message: String::new(),
            }),
        };
        assert_eq!(err.status(), Some(502));
        assert!(!err.is_retryable());
    }
}
