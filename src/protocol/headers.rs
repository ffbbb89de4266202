//! JSON:API header construction.
//!
//! Every request sent to the account service declares the JSON:API media type
//! in both directions:
//!
//! | Header | Value |
//! |--------|-------|
//! | Content-Type | `application/vnd.api+json` |
//! | Accept | `application/vnd.api+json` |
//!
//! # Examples
//!
//! ```
//! use account_api_client::protocol::{constants::MEDIA_TYPE, json_api_headers};
//!
//! let headers = json_api_headers(MEDIA_TYPE).unwrap();
//! assert_eq!(headers["content-type"], MEDIA_TYPE);
//! assert_eq!(headers["accept"], MEDIA_TYPE);
//! ```

use crate::error::{ApiError, Result};
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue};

/// Build the header map carried by every request.
///
/// # Arguments
///
/// * `media_type` - Media type announced in `Content-Type` and `Accept`
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] if `media_type` is not a valid header value.
pub fn json_api_headers(media_type: &str) -> Result<HeaderMap> {
    let value = HeaderValue::from_str(media_type).map_err(|_| {
        ApiError::InvalidRequest(format!("invalid media type header: {:?}", media_type))
    })?;

    let mut headers = HeaderMap::with_capacity(2);
    headers.insert(CONTENT_TYPE, value.clone());
    headers.insert(ACCEPT, value);
    Ok(headers)
}
