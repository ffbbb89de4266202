//! Status code helpers for the account client.
//!
//! The account service documents a fixed set of failure codes. Anything
//! outside these sets is treated as unexpected by the classifier.
//!
//! | Family | Codes | Retried |
//! |--------|-------|---------|
//! | Success | 2xx | - |
//! | Client error | 400, 401, 403, 404, 405, 406, 409 | no |
//! | Server error | 429, 500, 502, 503, 504 | yes |

/// Status codes returned when the request itself is invalid.
pub const CLIENT_ERROR_STATUSES: [u16; 7] = [400, 401, 403, 404, 405, 406, 409];

/// Status codes returned on transient server-side failures.
pub const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Check if status code indicates success
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Check if status code indicates success with no content to decode
pub fn is_no_content_status(status: u16) -> bool {
    status == 204
}

/// Check if status code indicates a documented client error
pub fn is_client_error_status(status: u16) -> bool {
    CLIENT_ERROR_STATUSES.contains(&status)
}

/// Check if status code indicates retryable error
pub fn is_retryable_status(status: u16) -> bool {
    RETRYABLE_STATUSES.contains(&status)
}
