//! Wire-level contracts of the account service.
//!
//! - **[headers]** - JSON:API `Content-Type` / `Accept` header construction
//! - **[envelope]** - `data` / `error_message` envelope decoding
//! - **[constants]** - media type, resource path and query key

pub mod envelope;
pub mod headers;

pub use envelope::{decode_data, decode_error_message, encode_data, DataEnvelope, ErrorEnvelope};
pub use headers::json_api_headers;

/// Protocol constants.
pub mod constants {
    /// JSON:API media type used for both request and response bodies.
    pub const MEDIA_TYPE: &str = "application/vnd.api+json";

    /// Path segments of the accounts collection, relative to the base URL.
    pub const ACCOUNTS_PATH: [&str; 3] = ["v1", "organisation", "accounts"];

    /// Query parameter carrying the optimistic-concurrency version on delete.
    pub const VERSION_QUERY_KEY: &str = "version";
}
