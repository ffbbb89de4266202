//! Tests against a running account service.
//!
//! Ignored by default. Start the service, point `HOST_ADDRESS` at it
//! (default `http://localhost:8080`) and run `cargo test -- --ignored`.

mod common;

use account_api_client::{AccountClient, ApiError};

#[tokio::test]
#[ignore = "requires a running account service"]
async fn create_fetch_delete_round_trip() {
    let client = AccountClient::with_config(common::live_config()).unwrap();
    let account = common::account();

    let created = client.create_account(&account).await.unwrap();
    assert_eq!(created.id, account.id);

    let fetched = client.get_by_id(&account.id).await.unwrap();
    assert_eq!(fetched.id, account.id);
    assert_eq!(fetched.organisation_id, account.organisation_id);

    client.delete_account(&account.id, fetched.version).await.unwrap();

    let gone = client.get_by_id(&account.id).await;
    assert!(matches!(gone, Err(ApiError::Client { status: 404, .. })));
}

#[tokio::test]
#[ignore = "requires a running account service"]
async fn duplicate_create_conflicts() {
    let client = AccountClient::with_config(common::live_config()).unwrap();
    let account = common::account();

    client.create_account(&account).await.unwrap();
    let duplicate = client.create_account(&account).await;
    assert!(matches!(duplicate, Err(ApiError::Client { status: 409, .. })));

    client.delete_account(&account.id, 0).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running account service"]
async fn delete_with_wrong_version_is_rejected() {
    let client = AccountClient::with_config(common::live_config()).unwrap();
    let account = common::account();

    client.create_account(&account).await.unwrap();
    let result = client.delete_account(&account.id, 99).await;
    assert!(matches!(result, Err(ApiError::Client { .. })));

    client.delete_account(&account.id, 0).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running account service"]
async fn fetch_unknown_id_is_not_found() {
    let client = AccountClient::with_config(common::live_config()).unwrap();
    let result = client.get_by_id(&uuid::Uuid::new_v4().to_string()).await;
    assert!(matches!(result, Err(ApiError::Client { status: 404, .. })));
}
