//! Migration chain: upgrades any supported stored account to the current
//! logical [`Account`]
//!
//! Each legacy version has exactly one upgrade step to its successor
//! (`From<StoredVnAccount> for StoredVn+1Account`), so `migrate_vN` is the
//! step followed by `migrate_vN+1`. The last hop, `migrate_v16`, is the
//! typed decode of the latest shape. Backfilled defaults:
//!
//! | Field                         | Introduced | Default         |
//! |-------------------------------|------------|-----------------|
//! | `pendingKeyRotation`          | 9          | `[]`            |
//! | `recommendedExchanges`        | 10         | `[]`            |
//! | `suggestedActions`            | 10         | `[]`            |
//! | `dismissedActionIDs`          | 10         | `[]`            |
//! | `linkedAccounts`              | 11         | `[]`            |
//! | `inviteLinkStatus`            | 11         | `null`          |
//! | `invitees`                    | 11         | `[]`            |
//! | `isOnboarded`                 | 12         | `true`          |
//! | `notificationRequestStatuses` | 13         | `[]`            |
//! | `lastReadNotifTimestamp`      | 13         | `0`             |
//! | `exchangeRates`               | 14         | `[]`            |
//! | `sentPaymentLinks`            | 14         | `[]`            |
//! | `proposedSwaps`               | 15         | `[]`            |
//! | `landlineSessionURL`          | 16         | `""`            |
//! | `landlineAccounts`            | 16         | `[]`            |
//!
//! Accounts from before the onboarding flag existed had all finished
//! onboarding, hence `isOnboarded = true`.

use crate::account::Account;
use crate::encoding::{parse_address, parse_decimal};
use crate::error::AccountStorageError;
use crate::stored_account::{
    read_storage_version, StorageVersion, StoredAccount, StoredV10Account, StoredV11Account,
    StoredV12Account, StoredV13Account, StoredV14Account, StoredV15Account, StoredV16Account,
    StoredV8Account, StoredV9Account, OLDEST_SUPPORTED_VERSION,
};
use crate::type_migrations::{migrate_v15_clog, migrate_v15_proposed_swaps};
use serde_json::Value;

/// Migrate a decoded JSON record of any version.
///
/// - 0 through 7: `Ok(None)`, the account is unsupported and the user
///   re-onboards
/// - 8 through 16: `Ok(Some(account))`
/// - anything else, negative included: `UnknownStorageVersion`
pub fn migrate_account(value: Value) -> Result<Option<Account>, AccountStorageError> {
    let number = read_storage_version(&value)?;
    if (0..OLDEST_SUPPORTED_VERSION).contains(&number) {
        log::info!("Dropping unsupported v{} account", number);
        return Ok(None);
    }
    let version = StorageVersion::from_number(number)
        .ok_or(AccountStorageError::UnknownStorageVersion(number))?;

    let stored = StoredAccount::decode(version, value)?;
    migrate_stored_account(stored).map(Some)
}

/// Migrate an already-decoded stored account
pub fn migrate_stored_account(stored: StoredAccount) -> Result<Account, AccountStorageError> {
    if stored.version() != StorageVersion::LATEST {
        log::debug!(
            "Migrating account from v{} to v{}",
            stored.version().number(),
            StorageVersion::LATEST.number()
        );
    }
    match stored {
        StoredAccount::V8(a) => migrate_v8(a),
        StoredAccount::V9(a) => migrate_v9(a),
        StoredAccount::V10(a) => migrate_v10(a),
        StoredAccount::V11(a) => migrate_v11(a),
        StoredAccount::V12(a) => migrate_v12(a),
        StoredAccount::V13(a) => migrate_v13(a),
        StoredAccount::V14(a) => migrate_v14(a),
        StoredAccount::V15(a) => migrate_v15(a),
        StoredAccount::V16(a) => migrate_v16(a),
    }
}

fn migrate_v8(a: StoredV8Account) -> Result<Account, AccountStorageError> {
    migrate_v9(a.into())
}

fn migrate_v9(a: StoredV9Account) -> Result<Account, AccountStorageError> {
    migrate_v10(a.into())
}

fn migrate_v10(a: StoredV10Account) -> Result<Account, AccountStorageError> {
    migrate_v11(a.into())
}

fn migrate_v11(a: StoredV11Account) -> Result<Account, AccountStorageError> {
    migrate_v12(a.into())
}

fn migrate_v12(a: StoredV12Account) -> Result<Account, AccountStorageError> {
    migrate_v13(a.into())
}

fn migrate_v13(a: StoredV13Account) -> Result<Account, AccountStorageError> {
    migrate_v14(a.into())
}

fn migrate_v14(a: StoredV14Account) -> Result<Account, AccountStorageError> {
    migrate_v15(a.into())
}

fn migrate_v15(a: StoredV15Account) -> Result<Account, AccountStorageError> {
    migrate_v16(upgrade_v15(a)?)
}

/// Decode the latest shape into the logical account
fn migrate_v16(a: StoredV16Account) -> Result<Account, AccountStorageError> {
    Ok(Account {
        enclave_key_name: a.enclave_key_name,
        enclave_pub_key: a.enclave_pub_key,
        name: a.name,
        address: parse_address(&a.address)?,
        home_chain_id: a.home_chain_id,
        home_coin_address: parse_address(&a.home_coin_address)?,

        last_balance: parse_decimal(&a.last_balance)?,
        last_block: a.last_block,
        last_block_timestamp: a.last_block_timestamp,
        last_finalized_block: a.last_finalized_block,

        chain_gas_constants: a.chain_gas_constants,
        push_token: a.push_token,

        recent_transfers: a.recent_transfers,
        named_accounts: a.named_accounts,
        account_keys: a.account_keys,
        pending_key_rotation: a.pending_key_rotation,

        recommended_exchanges: a.recommended_exchanges,
        suggested_actions: a.suggested_actions,
        dismissed_action_ids: a.dismissed_action_ids,

        linked_accounts: a.linked_accounts,
        invite_link_status: a.invite_link_status,
        invitees: a.invitees,

        is_onboarded: a.is_onboarded,

        notification_request_statuses: a.notification_request_statuses,
        last_read_notif_timestamp: a.last_read_notif_timestamp,

        exchange_rates: a.exchange_rates,
        sent_payment_links: a.sent_payment_links,

        proposed_swaps: a.proposed_swaps,

        landline_session_url: a.landline_session_url.unwrap_or_default(),
        landline_accounts: a.landline_accounts.unwrap_or_default(),
    })
}

impl From<StoredV8Account> for StoredV9Account {
    fn from(a: StoredV8Account) -> Self {
        Self {
            storage_version: 9,
            enclave_key_name: a.enclave_key_name,
            enclave_pub_key: a.enclave_pub_key,
            name: a.name,
            address: a.address,
            home_chain_id: a.home_chain_id,
            home_coin_address: a.home_coin_address,
            last_balance: a.last_balance,
            last_block: a.last_block,
            last_block_timestamp: a.last_block_timestamp,
            last_finalized_block: a.last_finalized_block,
            chain_gas_constants: a.chain_gas_constants,
            push_token: a.push_token,
            recent_transfers: a.recent_transfers,
            named_accounts: a.named_accounts,
            account_keys: a.account_keys,

            pending_key_rotation: Vec::new(),
        }
    }
}

impl From<StoredV9Account> for StoredV10Account {
    fn from(a: StoredV9Account) -> Self {
        Self {
            storage_version: 10,
            enclave_key_name: a.enclave_key_name,
            enclave_pub_key: a.enclave_pub_key,
            name: a.name,
            address: a.address,
            home_chain_id: a.home_chain_id,
            home_coin_address: a.home_coin_address,
            last_balance: a.last_balance,
            last_block: a.last_block,
            last_block_timestamp: a.last_block_timestamp,
            last_finalized_block: a.last_finalized_block,
            chain_gas_constants: a.chain_gas_constants,
            push_token: a.push_token,
            recent_transfers: a.recent_transfers,
            named_accounts: a.named_accounts,
            account_keys: a.account_keys,
            pending_key_rotation: a.pending_key_rotation,

            recommended_exchanges: Vec::new(),
            suggested_actions: Vec::new(),
            dismissed_action_ids: Vec::new(),
        }
    }
}

impl From<StoredV10Account> for StoredV11Account {
    fn from(a: StoredV10Account) -> Self {
        Self {
            storage_version: 11,
            enclave_key_name: a.enclave_key_name,
            enclave_pub_key: a.enclave_pub_key,
            name: a.name,
            address: a.address,
            home_chain_id: a.home_chain_id,
            home_coin_address: a.home_coin_address,
            last_balance: a.last_balance,
            last_block: a.last_block,
            last_block_timestamp: a.last_block_timestamp,
            last_finalized_block: a.last_finalized_block,
            chain_gas_constants: a.chain_gas_constants,
            push_token: a.push_token,
            recent_transfers: a.recent_transfers,
            named_accounts: a.named_accounts,
            account_keys: a.account_keys,
            pending_key_rotation: a.pending_key_rotation,
            recommended_exchanges: a.recommended_exchanges,
            suggested_actions: a.suggested_actions,
            dismissed_action_ids: a.dismissed_action_ids,

            linked_accounts: Vec::new(),
            invite_link_status: None,
            invitees: Vec::new(),
        }
    }
}

impl From<StoredV11Account> for StoredV12Account {
    fn from(a: StoredV11Account) -> Self {
        Self {
            storage_version: 12,
            enclave_key_name: a.enclave_key_name,
            enclave_pub_key: a.enclave_pub_key,
            name: a.name,
            address: a.address,
            home_chain_id: a.home_chain_id,
            home_coin_address: a.home_coin_address,
            last_balance: a.last_balance,
            last_block: a.last_block,
            last_block_timestamp: a.last_block_timestamp,
            last_finalized_block: a.last_finalized_block,
            chain_gas_constants: a.chain_gas_constants,
            push_token: a.push_token,
            recent_transfers: a.recent_transfers,
            named_accounts: a.named_accounts,
            account_keys: a.account_keys,
            pending_key_rotation: a.pending_key_rotation,
            recommended_exchanges: a.recommended_exchanges,
            suggested_actions: a.suggested_actions,
            dismissed_action_ids: a.dismissed_action_ids,
            linked_accounts: a.linked_accounts,
            invite_link_status: a.invite_link_status,
            invitees: a.invitees,

            is_onboarded: true,
        }
    }
}

impl From<StoredV12Account> for StoredV13Account {
    fn from(a: StoredV12Account) -> Self {
        Self {
            storage_version: 13,
            enclave_key_name: a.enclave_key_name,
            enclave_pub_key: a.enclave_pub_key,
            name: a.name,
            address: a.address,
            home_chain_id: a.home_chain_id,
            home_coin_address: a.home_coin_address,
            last_balance: a.last_balance,
            last_block: a.last_block,
            last_block_timestamp: a.last_block_timestamp,
            last_finalized_block: a.last_finalized_block,
            chain_gas_constants: a.chain_gas_constants,
            push_token: a.push_token,
            recent_transfers: a.recent_transfers,
            named_accounts: a.named_accounts,
            account_keys: a.account_keys,
            pending_key_rotation: a.pending_key_rotation,
            recommended_exchanges: a.recommended_exchanges,
            suggested_actions: a.suggested_actions,
            dismissed_action_ids: a.dismissed_action_ids,
            linked_accounts: a.linked_accounts,
            invite_link_status: a.invite_link_status,
            invitees: a.invitees,
            is_onboarded: a.is_onboarded,

            notification_request_statuses: None,
            last_read_notif_timestamp: 0,
        }
    }
}

impl From<StoredV13Account> for StoredV14Account {
    fn from(a: StoredV13Account) -> Self {
        Self {
            storage_version: 14,
            enclave_key_name: a.enclave_key_name,
            enclave_pub_key: a.enclave_pub_key,
            name: a.name,
            address: a.address,
            home_chain_id: a.home_chain_id,
            home_coin_address: a.home_coin_address,
            last_balance: a.last_balance,
            last_block: a.last_block,
            last_block_timestamp: a.last_block_timestamp,
            last_finalized_block: a.last_finalized_block,
            chain_gas_constants: a.chain_gas_constants,
            push_token: a.push_token,
            recent_transfers: a.recent_transfers,
            named_accounts: a.named_accounts,
            account_keys: a.account_keys,
            pending_key_rotation: a.pending_key_rotation,
            recommended_exchanges: a.recommended_exchanges,
            suggested_actions: a.suggested_actions,
            dismissed_action_ids: a.dismissed_action_ids,
            linked_accounts: a.linked_accounts,
            invite_link_status: a.invite_link_status,
            invitees: a.invitees,
            is_onboarded: a.is_onboarded,
            notification_request_statuses: a.notification_request_statuses,
            last_read_notif_timestamp: a.last_read_notif_timestamp,

            exchange_rates: Vec::new(),
            sent_payment_links: Vec::new(),
        }
    }
}

impl From<StoredV14Account> for StoredV15Account {
    fn from(a: StoredV14Account) -> Self {
        Self {
            storage_version: 15,
            enclave_key_name: a.enclave_key_name,
            enclave_pub_key: a.enclave_pub_key,
            name: a.name,
            address: a.address,
            home_chain_id: a.home_chain_id,
            home_coin_address: a.home_coin_address,
            last_balance: a.last_balance,
            last_block: a.last_block,
            last_block_timestamp: a.last_block_timestamp,
            last_finalized_block: a.last_finalized_block,
            chain_gas_constants: a.chain_gas_constants,
            push_token: a.push_token,
            recent_transfers: a.recent_transfers,
            named_accounts: a.named_accounts,
            account_keys: a.account_keys,
            pending_key_rotation: a.pending_key_rotation,
            recommended_exchanges: a.recommended_exchanges,
            suggested_actions: a.suggested_actions,
            dismissed_action_ids: a.dismissed_action_ids,
            linked_accounts: a.linked_accounts,
            invite_link_status: a.invite_link_status,
            invitees: a.invitees,
            is_onboarded: a.is_onboarded,
            notification_request_statuses: a.notification_request_statuses,
            last_read_notif_timestamp: a.last_read_notif_timestamp,
            exchange_rates: a.exchange_rates,
            sent_payment_links: a.sent_payment_links,

            proposed_swaps: None,
        }
    }
}

/// The one fallible step: legacy clogs and proposed swaps carry foreign-token
/// descriptors that must resolve to a real address.
fn upgrade_v15(a: StoredV15Account) -> Result<StoredV16Account, AccountStorageError> {
    let recent_transfers = a
        .recent_transfers
        .into_iter()
        .map(migrate_v15_clog)
        .collect::<Result<Vec<_>, _>>()?;
    let proposed_swaps = migrate_v15_proposed_swaps(a.proposed_swaps)?;

    Ok(StoredV16Account {
        storage_version: 16,
        enclave_key_name: a.enclave_key_name,
        enclave_pub_key: a.enclave_pub_key,
        name: a.name,
        address: a.address,
        home_chain_id: a.home_chain_id,
        home_coin_address: a.home_coin_address,
        last_balance: a.last_balance,
        last_block: a.last_block,
        last_block_timestamp: a.last_block_timestamp,
        last_finalized_block: a.last_finalized_block,
        chain_gas_constants: a.chain_gas_constants,
        push_token: a.push_token,
        recent_transfers,
        named_accounts: a.named_accounts,
        account_keys: a.account_keys,
        pending_key_rotation: a.pending_key_rotation,
        recommended_exchanges: a.recommended_exchanges,
        suggested_actions: a.suggested_actions,
        dismissed_action_ids: a.dismissed_action_ids,
        linked_accounts: a.linked_accounts,
        invite_link_status: a.invite_link_status,
        invitees: a.invitees,
        is_onboarded: a.is_onboarded,
        notification_request_statuses: a.notification_request_statuses.unwrap_or_default(),
        last_read_notif_timestamp: a.last_read_notif_timestamp,
        exchange_rates: a.exchange_rates,
        sent_payment_links: a.sent_payment_links,
        proposed_swaps,

        landline_session_url: None,
        landline_accounts: None,
    })
}
