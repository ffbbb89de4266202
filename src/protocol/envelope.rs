//! JSON envelopes wrapping resources and errors.
//!
//! Success bodies look like `{ "data": <resource> }`, failure bodies like
//! `{ "error_message": "<text>" }`. Both are parsed defensively: a missing
//! field yields `None` / an empty string instead of an error.
//!
//! # Examples
//!
//! ```
//! use account_api_client::protocol::{decode_data, decode_error_message};
//! use account_api_client::AccountData;
//!
//! let data: Option<AccountData> = decode_data(br#"{"data": {"id": "x"}}"#).unwrap();
//! assert_eq!(data.unwrap().id, "x");
//!
//! assert_eq!(decode_error_message(br#"{"error_message": "nope"}"#), "nope");
//! assert_eq!(decode_error_message(b"<html>"), "");
//! ```

use crate::error::{ApiError, Result};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// `{ "data": ... }` wrapper used for request and response bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    /// Wrapped resource, `None` when the field is missing
    pub data: Option<T>,
}

/// `{ "error_message": ... }` wrapper returned on failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorEnvelope {
    /// Human-readable server error
    #[serde(default)]
    pub error_message: String,
}

/// Decode a success body.
///
/// Returns `Ok(None)` when the envelope has no `data` field.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body is not a JSON object of the expected shape.
pub fn decode_data<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>> {
    serde_json::from_slice::<DataEnvelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Extract the server's error message, or an empty string when absent or malformed.
pub fn decode_error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error_message)
        .unwrap_or_default()
}

/// Serialize a resource inside a `data` envelope.
///
/// # Errors
///
/// Returns [`ApiError::Encode`] if the resource cannot be serialized.
pub fn encode_data<T: Serialize>(resource: &T) -> Result<Bytes> {
    #[derive(Serialize)]
    struct Outgoing<'a, T> {
        data: &'a T,
    }

    let encoded = serde_json::to_vec(&Outgoing { data: resource })?;
    Ok(Bytes::from(encoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountData;

    #[test]
    fn test_decode_missing_data() {
        let data: Option<AccountData> = decode_data(b"{}").unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_decode_malformed_body() {
        let result: Result<Option<AccountData>> = decode_data(b"not json");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_error_message_defaults_to_empty() {
        assert_eq!(decode_error_message(b""), "");
        assert_eq!(decode_error_message(br#"{"other": 1}"#), "");
    }

    #[test]
    fn test_encode_wraps_in_data() {
        let account = AccountData {
            id: "abc".into(),
            ..Default::default()
        };
        let body = encode_data(&account).unwrap();
        assert_eq!(&body[..], br#"{"data":{"id":"abc"}}"#);
    }
}
