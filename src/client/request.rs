//! Per-verb [`PreparedRequest`] construction for the accounts resource.
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | fetch | GET | `/v1/organisation/accounts/{id}` |
//! | create | POST | `/v1/organisation/accounts` |
//! | update | PATCH | `/v1/organisation/accounts/{id}` |
//! | delete | DELETE | `/v1/organisation/accounts/{id}?version={version}` |

use crate::error::{ApiError, Result};
use crate::models::AccountData;
use crate::protocol::constants::{ACCOUNTS_PATH, VERSION_QUERY_KEY};
use crate::protocol::{encode_data, json_api_headers};
use crate::types::PreparedRequest;
use http::Method;
use url::Url;

/// Builds requests against a fixed base URL.
#[derive(Debug, Clone)]
pub struct AccountRequests {
    base: Url,
    media_type: String,
}

impl AccountRequests {
    /// Create a builder for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if the URL cannot be parsed or
    /// cannot carry a path.
    pub fn new(base_url: &str, media_type: impl Into<String>) -> Result<Self> {
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidRequest(format!(
                "base url cannot carry a path: {}",
                base_url
            )));
        }
        Ok(AccountRequests {
            base,
            media_type: media_type.into(),
        })
    }

    /// `GET` one account.
    pub fn fetch(&self, account_id: &str) -> Result<PreparedRequest> {
        self.prepare(Method::GET, Some(account_id))
    }

    /// `POST` a new account.
    pub fn create(&self, account: &AccountData) -> Result<PreparedRequest> {
        let body = encode_data(account)?;
        Ok(self.prepare(Method::POST, None)?.with_body(body))
    }

    /// `PATCH` an existing account, addressed by its id.
    pub fn update(&self, account: &AccountData) -> Result<PreparedRequest> {
        if account.id.is_empty() {
            return Err(ApiError::InvalidRequest(
                "cannot update an account without an id".to_string(),
            ));
        }
        let body = encode_data(account)?;
        Ok(self.prepare(Method::PATCH, Some(&account.id))?.with_body(body))
    }

    /// `DELETE` an account at a given version.
    pub fn delete(&self, account_id: &str, version: i64) -> Result<PreparedRequest> {
        let mut request = self.prepare(Method::DELETE, Some(account_id))?;
        request
            .url
            .query_pairs_mut()
            .append_pair(VERSION_QUERY_KEY, &version.to_string());
        Ok(request)
    }

    fn prepare(&self, method: Method, account_id: Option<&str>) -> Result<PreparedRequest> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidRequest("base url cannot carry a path".into()))?;
            segments.pop_if_empty().extend(ACCOUNTS_PATH);
            if let Some(id) = account_id {
                segments.push(id);
            }
        }

        let headers = json_api_headers(&self.media_type)?;
        Ok(PreparedRequest::new(method, url).with_headers(headers))
    }
}
