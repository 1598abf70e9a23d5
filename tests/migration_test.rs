//! Migration of a real-world version 15 record
//!
//! `fixtures/v15_production.json` is a full record as written by a v15
//! build, with a mixed activity log, legacy token aliases and one swap
//! offer whose `address` alias is blank.
//!
//! Run with: cargo test --test migration_test -- --nocapture

use account_storage::clog::RotationType;
use account_storage::{
    parse_account, serialize_account, Account, Clog, StorageVersion, StoredAccount,
    LATEST_STORAGE_VERSION,
};
use alloy_primitives::{address, U256};
use serde_json::{json, Value};

const V15_PRODUCTION: &str = include_str!("fixtures/v15_production.json");

fn load_production() -> Account {
    let _ = env_logger::builder().is_test(true).try_init();
    parse_account(Some(V15_PRODUCTION))
        .expect("production record should migrate")
        .expect("production record should not be dropped")
}

#[test]
fn test_production_identity_survives() {
    let account = load_production();

    assert_eq!(account.name, "rosalind");
    assert_eq!(account.enclave_key_name, "wallet-enclave-key");
    assert_eq!(
        account.address,
        address!("ef4396d9ff8107086d215a1c9f8866c54795d7c7")
    );
    assert_eq!(account.home_chain_id, 8453);
    assert_eq!(
        account.home_coin_address,
        address!("833589fCD6eDb6E08f4c7C32D4f71b54bdA02913")
    );
    assert_eq!(account.last_balance, U256::from(1_234_567_890u64));
    assert_eq!(
        account.push_token.as_deref(),
        Some("ExponentPushToken[xxxxxxxxxxxxxxxxxxxxxx]")
    );
    assert!(account.is_onboarded);
    assert_eq!(account.last_read_notif_timestamp, 1714060000);
}

#[test]
fn test_production_collections_keep_their_size() {
    let account = load_production();

    assert_eq!(account.recent_transfers.len(), 24);
    assert_eq!(account.named_accounts.len(), 10);
    assert_eq!(account.account_keys.len(), 2);
    assert_eq!(account.recommended_exchanges.len(), 2);
    assert_eq!(account.dismissed_action_ids.len(), 2);
    assert_eq!(account.invitees.len(), 2);
    assert_eq!(account.notification_request_statuses.len(), 1);
    assert_eq!(account.exchange_rates.len(), 2);
    assert_eq!(account.sent_payment_links.len(), 1);
    assert!(account.landline_accounts.is_empty());
    assert_eq!(account.landline_session_url, "");

    assert_eq!(account.exchange_rates[0].currency, "EUR");
    assert_eq!(account.exchange_rates[0].rate_usd, 0.9216);
}

#[test]
fn test_production_activity_log_keeps_order_and_kinds() {
    let account = load_production();

    let kinds: Vec<&str> = account
        .recent_transfers
        .iter()
        .map(|c| match c {
            Clog::Transfer(_) => "transfer",
            Clog::CreateLink(_) => "createLink",
            Clog::ClaimLink(_) => "claimLink",
            Clog::KeyRotation(_) => "keyRotation",
        })
        .collect();
    let expected: Vec<&str> = ["transfer", "transfer", "transfer", "createLink", "claimLink", "keyRotation"]
        .iter()
        .copied()
        .cycle()
        .take(24)
        .collect();
    assert_eq!(kinds, expected);

    assert!(account
        .recent_transfers
        .windows(2)
        .all(|w| w[0].timestamp() <= w[1].timestamp()));

    if let Clog::KeyRotation(rotation) = &account.recent_transfers[5] {
        assert!(matches!(
            rotation.rotation_type,
            RotationType::Add | RotationType::Remove
        ));
    } else {
        panic!("expected a key rotation at index 5");
    }
}

#[test]
fn test_production_pre_swap_token_alias_resolves() {
    let account = load_production();

    let Clog::Transfer(transfer) = &account.recent_transfers[6] else {
        panic!("expected a transfer at index 6");
    };
    let pre_swap = transfer
        .pre_swap_transfer
        .as_ref()
        .expect("DEGEN pre-swap should survive");
    assert_eq!(
        pre_swap.coin.address,
        address!("4ed4e862860bed51a9570b96d89af5e1b0efefed")
    );
    assert_eq!(pre_swap.coin.symbol, "DEGEN");
    assert_eq!(
        pre_swap.amount,
        U256::from(2_500_000_000_000_000_000_000u128)
    );
}

#[test]
fn test_production_pre_swap_without_alias_is_dropped() {
    let account = load_production();

    // The transfer itself stays, only the unusable sub-record goes
    let Clog::Transfer(transfer) = &account.recent_transfers[12] else {
        panic!("expected a transfer at index 12");
    };
    assert_eq!(transfer.pre_swap_transfer, None);
    assert_eq!(transfer.amount, 3970000);
    assert_eq!(transfer.memo.as_deref(), Some("thanks!"));
}

#[test]
fn test_production_swap_with_blank_address_uses_token() {
    let account = load_production();

    assert_eq!(account.proposed_swaps.len(), 1);
    let swap = &account.proposed_swaps[0];
    assert_eq!(
        swap.from_coin.address,
        address!("4ed4e862860bed51a9570b96d89af5e1b0efefed")
    );
    assert_eq!(
        swap.from_amount,
        U256::from(12_500_000_000_000_000_000_000u128)
    );
    assert_eq!(swap.to_amount, 98765);
    assert_eq!(
        swap.from_coin.logo_uri.as_deref(),
        Some("https://assets.example.com/degen.png")
    );
}

#[test]
fn test_production_migration_is_stable_after_one_write() {
    let account = load_production();

    let first = serialize_account(Some(&account)).unwrap();
    let reloaded = parse_account(Some(&first)).unwrap().unwrap();
    assert_eq!(reloaded, account);

    // A second write produces the same bytes
    assert_eq!(serialize_account(Some(&reloaded)).unwrap(), first);

    let value: Value = serde_json::from_str(&first).unwrap();
    assert_eq!(value["storageVersion"], json!(LATEST_STORAGE_VERSION));
    assert_eq!(value["proposedSwaps"][0]["fromCoin"].get("token"), None);
    assert_eq!(
        value["proposedSwaps"][0]["fromCoin"]["address"]
            .as_str()
            .map(str::to_lowercase)
            .as_deref(),
        Some("0x4ed4e862860bed51a9570b96d89af5e1b0efefed")
    );
}

#[test]
fn test_production_decodes_as_version_15_shape() {
    let value: Value = serde_json::from_str(V15_PRODUCTION).unwrap();
    let stored = StoredAccount::decode(StorageVersion::V15, value).unwrap();
    assert_eq!(stored.version(), StorageVersion::V15);
}

#[test]
fn test_v15_swaps_missing_alias_are_filtered() {
    let mut value: Value = serde_json::from_str(V15_PRODUCTION).unwrap();
    let good = value["proposedSwaps"][0].clone();
    let mut bad = good.clone();
    bad["fromCoin"] = json!({ "chainId": 8453, "symbol": "HIGHER", "decimals": 18 });
    value["proposedSwaps"] = json!([bad, good]);

    let account = parse_account(Some(&value.to_string())).unwrap().unwrap();
    assert_eq!(account.proposed_swaps.len(), 1);
    assert_eq!(account.proposed_swaps[0].from_coin.symbol, "DEGEN");
}

#[test]
fn test_v15_address_alias_wins_over_token() {
    let mut value: Value = serde_json::from_str(V15_PRODUCTION).unwrap();
    value["proposedSwaps"][0]["fromCoin"]["address"] =
        json!("0x833589fcd6edb6e08f4c7c32d4f71b54bda02913");

    let account = parse_account(Some(&value.to_string())).unwrap().unwrap();
    assert_eq!(
        account.proposed_swaps[0].from_coin.address,
        address!("833589fCD6eDb6E08f4c7C32D4f71b54bdA02913")
    );
}

#[test]
fn test_v15_null_and_missing_swaps_are_empty() {
    let mut value: Value = serde_json::from_str(V15_PRODUCTION).unwrap();
    value["proposedSwaps"] = Value::Null;
    let account = parse_account(Some(&value.to_string())).unwrap().unwrap();
    assert!(account.proposed_swaps.is_empty());

    value.as_object_mut().unwrap().remove("proposedSwaps");
    let account = parse_account(Some(&value.to_string())).unwrap().unwrap();
    assert!(account.proposed_swaps.is_empty());
}

#[test]
fn test_v15_malformed_alias_is_error() {
    let mut value: Value = serde_json::from_str(V15_PRODUCTION).unwrap();
    value["proposedSwaps"][0]["fromCoin"]["token"] = json!("0xnot-an-address");
    assert!(parse_account(Some(&value.to_string())).is_err());
}
