//! Account resource model.
//!
//! Field names follow the `organisation/accounts` JSON:API resource. Empty
//! fields are skipped on serialization and every field defaults on decode, so
//! partial documents from the service never fail to parse.

use serde::{Deserialize, Serialize};

/// Maximum number of entries in [`AccountAttributes::name`].
pub const MAX_NAMES: usize = 4;

/// Maximum length of [`AccountAttributes::bank_id_code`].
pub const MAX_BANK_CODE_LENGTH: usize = 16;

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// An account resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountData {
    /// Account attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AccountAttributes>,
    /// Resource id (UUID)
    #[serde(default)]
    pub id: String,
    /// Owning organisation id (UUID)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub organisation_id: String,
    /// Resource type, `accounts`
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub resource_type: String,
    /// Optimistic-concurrency version
    #[serde(default, skip_serializing_if = "is_zero")]
    pub version: i64,
}

/// Attributes of an account resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountAttributes {
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub account_classification: String,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "is_false")]
    pub account_matching_opt_out: bool,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub account_number: String,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternative_names: Vec<String>,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bank_id: String,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bank_id_code: String,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub base_currency: String,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bic: String,
    /// ISO 3166-1 alpha-2 country code
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub iban: String,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "is_false")]
    pub joint_account: bool,
    /// Account holder names, at most [`MAX_NAMES`]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<String>,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub secondary_identification: String,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "is_false")]
    pub switched: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_are_skipped() {
        let account = AccountData {
            id: "abc".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(json, r#"{"id":"abc"}"#);
    }

    #[test]
    fn test_decode_partial_document() {
        let account: AccountData = serde_json::from_str(
            r#"{"id":"x","type":"accounts","attributes":{"country":"GB","name":["A"]}}"#,
        )
        .unwrap();
        assert_eq!(account.resource_type, "accounts");
        let attributes = account.attributes.unwrap();
        assert_eq!(attributes.country, "GB");
        assert_eq!(attributes.name, vec!["A".to_string()]);
        assert!(attributes.iban.is_empty());
    }
}
