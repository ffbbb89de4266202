//! Classify transport results and HTTP responses into retry outcomes.
//!
//! Both functions are pure: the same input always yields the same
//! [`ClassifiedOutcome`].

use crate::client::transport::TransportError;
use crate::client::utils::{
    is_client_error_status, is_no_content_status, is_retryable_status, is_success_status,
};
use crate::error::ApiError;
use crate::protocol::{decode_data, decode_error_message};
use crate::types::{ClassifiedOutcome, RawResponse};
use serde::de::DeserializeOwned;

/// Classify a status code and body.
///
/// - 204, or any 2xx with an empty body, is `Success(None)`.
/// - Any other 2xx decodes the `data` envelope; a malformed body is terminal.
/// - 400/401/403/404/405/406/409 are terminal client errors.
/// - 429/500/502/503/504 are retryable server errors.
/// - Everything else is a terminal unexpected status.
pub fn classify<T: DeserializeOwned>(status: u16, body: &[u8]) -> ClassifiedOutcome<T> {
    if is_success_status(status) {
        if is_no_content_status(status) || body.is_empty() {
            return ClassifiedOutcome::Success(None);
        }
        return match decode_data(body) {
            Ok(payload) => ClassifiedOutcome::Success(payload),
            Err(e) => ClassifiedOutcome::Terminal(e),
        };
    }

    if is_client_error_status(status) {
        return ClassifiedOutcome::Terminal(ApiError::Client {
            status,
            message: decode_error_message(body),
        });
    }

    if is_retryable_status(status) {
        return ClassifiedOutcome::Retryable(ApiError::Server {
            status,
            message: decode_error_message(body),
        });
    }

    ClassifiedOutcome::Terminal(ApiError::UnexpectedStatus(status))
}

/// Classify a transport failure. Network errors and timeouts are retryable,
/// local read and build failures are terminal.
pub fn classify_transport_error<T>(error: &TransportError, endpoint: &str) -> ClassifiedOutcome<T> {
    match error {
        TransportError::Network { timeout, message } => {
            ClassifiedOutcome::Retryable(ApiError::Transport {
                endpoint: endpoint.to_string(),
                timeout: *timeout,
                message: message.clone(),
            })
        }
        TransportError::Read(message) => ClassifiedOutcome::Terminal(ApiError::Read(message.clone())),
        TransportError::Build(message) => {
            ClassifiedOutcome::Terminal(ApiError::InvalidRequest(message.clone()))
        }
    }
}

/// Classify the result of one attempt.
pub fn classify_attempt<T: DeserializeOwned>(
    result: &Result<RawResponse, TransportError>,
    endpoint: &str,
) -> ClassifiedOutcome<T> {
    match result {
        Ok(response) => classify(response.status, &response.body),
        Err(e) => classify_transport_error(e, endpoint),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountData;

    fn outcome(status: u16, body: &str) -> ClassifiedOutcome<AccountData> {
        classify(status, body.as_bytes())
    }

    #[test]
    fn no_content_is_empty_success() {
        assert_eq!(outcome(204, ""), ClassifiedOutcome::Success(None));
        assert_eq!(outcome(200, ""), ClassifiedOutcome::Success(None));
    }

    #[test]
    fn success_decodes_payload() {
        match outcome(201, r#"{"data": {"id": "x"}}"#) {
            ClassifiedOutcome::Success(Some(account)) => assert_eq!(account.id, "x"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn malformed_success_body_is_terminal_decode() {
        assert!(matches!(
            outcome(200, "{not json"),
            ClassifiedOutcome::Terminal(ApiError::Decode(_))
        ));
    }

    #[test]
    fn client_errors_are_terminal_with_message() {
        for status in [400, 401, 403, 404, 405, 406, 409] {
            assert_eq!(
                outcome(status, r#"{"error_message": "bad"}"#),
                ClassifiedOutcome::Terminal(ApiError::Client {
                    status,
                    message: "bad".into()
                })
            );
        }
        assert_eq!(
            outcome(404, ""),
            ClassifiedOutcome::Terminal(ApiError::Client {
                status: 404,
                message: String::new()
            })
        );
    }

    #[test]
    fn server_errors_are_retryable() {
        for status in [429, 500, 502, 503, 504] {
            assert_eq!(
                outcome(status, r#"{"error_message": "busy"}"#),
                ClassifiedOutcome::Retryable(ApiError::Server {
                    status,
                    message: "busy".into()
                })
            );
        }
    }

    #[test]
    fn other_statuses_are_unexpected() {
        for status in [100, 302, 410, 418, 501, 505] {
            assert_eq!(
                outcome(status, ""),
                ClassifiedOutcome::Terminal(ApiError::UnexpectedStatus(status))
            );
        }
    }

    #[test]
    fn classification_is_idempotent() {
        let cases = [
            (200, r#"{"data": {"id": "x"}}"#),
            (500, r#"{"error_message": "A"}"#),
            (409, "garbage"),
            (302, ""),
        ];
        for (status, body) in cases {
            assert_eq!(outcome(status, body), outcome(status, body));
        }
    }

    #[test]
    fn transport_errors() {
        let network = TransportError::Network {
            timeout: true,
            message: "timed out".into(),
        };
        let retry: ClassifiedOutcome<AccountData> = classify_transport_error(&network, "/v1");
        assert_eq!(
            retry,
            ClassifiedOutcome::Retryable(ApiError::Transport {
                endpoint: "/v1".into(),
                timeout: true,
                message: "timed out".into()
            })
        );

        let read: ClassifiedOutcome<AccountData> =
            classify_transport_error(&TransportError::Read("reset".into()), "/v1");
        assert!(matches!(read, ClassifiedOutcome::Terminal(ApiError::Read(_))));
    }
}
