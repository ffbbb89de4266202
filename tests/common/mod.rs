//! Shared helpers for integration tests: randomized account data.

#![allow(dead_code)]

use account_api_client::models::{MAX_BANK_CODE_LENGTH, MAX_NAMES};
use account_api_client::{AccountAttributes, AccountData, ClientConfig};
use rand::seq::IndexedRandom;
use rand::Rng;
use uuid::Uuid;

const NAME_PREFIXES: [&str; MAX_NAMES] = ["First name", "Last name", "Third name", "Fourth name"];
const COUNTRIES: [&str; 7] = ["GB", "RO", "DK", "FR", "CH", "BE", "CA"];
const BANK_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A fresh account with random ids, names, country and bank code.
pub fn account() -> AccountData {
    let mut rng = rand::rng();

    let name_count = rng.random_range(1..=MAX_NAMES);
    let name = NAME_PREFIXES[..name_count]
        .iter()
        .map(|prefix| format!("{} {}", prefix, rng.random_range(0..1000)))
        .collect();

    let code_len = rng.random_range(0..=MAX_BANK_CODE_LENGTH);
    let bank_id_code = (0..code_len)
        .map(|_| char::from(BANK_CODE_ALPHABET[rng.random_range(0..BANK_CODE_ALPHABET.len())]))
        .collect();

    let country = COUNTRIES.choose(&mut rng).copied().unwrap_or("GB");

    AccountData {
        id: Uuid::new_v4().to_string(),
        organisation_id: Uuid::new_v4().to_string(),
        resource_type: "accounts".to_string(),
        version: 0,
        attributes: Some(AccountAttributes {
            name,
            country: country.to_string(),
            bank_id_code,
            ..Default::default()
        }),
    }
}

/// Configuration for the live service, honouring `HOST_ADDRESS`.
pub fn live_config() -> ClientConfig {
    ClientConfig::from_env().expect("invalid client environment")
}
