//! Public entry points: raw JSON string to [`Account`] and back
//!
//! Both directions are pure. The caller owns reading and writing the raw
//! string (see [`crate::store`]).

use crate::account::Account;
use crate::account_migrations::migrate_account;
use crate::error::AccountStorageError;
use crate::stored_account::{StoredV16Account, LATEST_STORAGE_VERSION};
use serde_json::Value;

/// Parse a persisted account, migrating it forward if needed.
///
/// `Ok(None)` for an absent or empty string, and for records too old to
/// migrate. Malformed JSON and unknown versions are errors.
///
/// # Example
///
/// ```
/// use account_storage::parse_account;
///
/// assert!(parse_account(None).unwrap().is_none());
/// assert!(parse_account(Some("")).unwrap().is_none());
/// assert!(parse_account(Some(r#"{"storageVersion": 9999}"#)).is_err());
/// ```
pub fn parse_account(raw: Option<&str>) -> Result<Option<Account>, AccountStorageError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(None),
    };
    let value: Value = serde_json::from_str(raw)?;
    migrate_account(value)
}

/// Serialize an account as the latest stored shape.
///
/// `None` serializes to the empty string, which `parse_account` reads back
/// as `None`.
pub fn serialize_account(account: Option<&Account>) -> Result<String, AccountStorageError> {
    let Some(account) = account else {
        return Ok(String::new());
    };
    let stored = to_stored(account);
    Ok(serde_json::to_string(&stored)?)
}

fn to_stored(a: &Account) -> StoredV16Account {
    StoredV16Account {
        storage_version: LATEST_STORAGE_VERSION,
        enclave_key_name: a.enclave_key_name.clone(),
        enclave_pub_key: a.enclave_pub_key.clone(),
        name: a.name.clone(),
        address: a.address.to_checksum(None),
        home_chain_id: a.home_chain_id,
        home_coin_address: a.home_coin_address.to_checksum(None),

        last_balance: a.last_balance.to_string(),
        last_block: a.last_block,
        last_block_timestamp: a.last_block_timestamp,
        last_finalized_block: a.last_finalized_block,

        chain_gas_constants: a.chain_gas_constants.clone(),
        push_token: a.push_token.clone(),

        recent_transfers: a.recent_transfers.clone(),
        named_accounts: a.named_accounts.clone(),
        account_keys: a.account_keys.clone(),
        pending_key_rotation: a.pending_key_rotation.clone(),

        recommended_exchanges: a.recommended_exchanges.clone(),
        suggested_actions: a.suggested_actions.clone(),
        dismissed_action_ids: a.dismissed_action_ids.clone(),

        linked_accounts: a.linked_accounts.clone(),
        invite_link_status: a.invite_link_status.clone(),
        invitees: a.invitees.clone(),

        is_onboarded: a.is_onboarded,

        notification_request_statuses: a.notification_request_statuses.clone(),
        last_read_notif_timestamp: a.last_read_notif_timestamp,

        exchange_rates: a.exchange_rates.clone(),
        sent_payment_links: a.sent_payment_links.clone(),

        proposed_swaps: a.proposed_swaps.clone(),

        landline_session_url: Some(a.landline_session_url.clone()),
        landline_accounts: Some(a.landline_accounts.clone()),
    }
}
