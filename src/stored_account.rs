//! Schema registry: every account shape ever persisted
//!
//! One struct per storage version, each frozen exactly as it was written.
//! Identity addresses and the cached balance stay raw strings here; they
//! are normalized only when a record becomes a logical [`Account`].
//!
//! Only [`StoredV16Account`], the latest shape, may gain fields without a
//! version bump, and then only as `Option` with `#[serde(default)]`.
//! Adding a required field there would make every already-persisted
//! version 16 record unreadable.
//!
//! [`Account`]: crate::account::Account

use crate::clog::Clog;
use crate::clog::KeyRotationClog;
use crate::error::AccountStorageError;
use crate::stored_types::{StoredV15Clog, StoredV15ProposedSwap};
use crate::types::{
    ChainGasConstants, CurrencyExchangeRate, EAccount, InviteLinkStatus, KeyData,
    LandlineAccount, LinkedAccount, PaymentLinkNote, ProposedSwap, RecommendedExchange,
    RequestStatus, SuggestedAction,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Records older than this are early-testnet accounts and are never migrated
pub const OLDEST_SUPPORTED_VERSION: i64 = 8;

/// Version written by `serialize_account`
pub const LATEST_STORAGE_VERSION: u32 = 16;

/// Every storage version the registry can decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StorageVersion {
    V8,
    V9,
    V10,
    V11,
    V12,
    V13,
    V14,
    V15,
    V16,
}

impl StorageVersion {
    pub const LATEST: Self = Self::V16;

    pub const ALL: [Self; 9] = [
        Self::V8,
        Self::V9,
        Self::V10,
        Self::V11,
        Self::V12,
        Self::V13,
        Self::V14,
        Self::V15,
        Self::V16,
    ];

    pub fn number(self) -> u32 {
        match self {
            Self::V8 => 8,
            Self::V9 => 9,
            Self::V10 => 10,
            Self::V11 => 11,
            Self::V12 => 12,
            Self::V13 => 13,
            Self::V14 => 14,
            Self::V15 => 15,
            Self::V16 => 16,
        }
    }

    /// Look up a registered version, `None` if there is no such shape
    pub fn from_number(n: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|v| i64::from(v.number()) == n)
    }
}

/// Read the `storageVersion` tag of a decoded record
pub fn read_storage_version(value: &Value) -> Result<i64, AccountStorageError> {
    let tag = value
        .get("storageVersion")
        .ok_or(AccountStorageError::MissingStorageVersion)?;
    tag.as_i64()
        .ok_or_else(|| AccountStorageError::InvalidStorageVersion(tag.to_string()))
}

/// A persisted record, decoded into the shape its version tag names
#[derive(Debug, Clone, PartialEq)]
pub enum StoredAccount {
    V8(StoredV8Account),
    V9(StoredV9Account),
    V10(StoredV10Account),
    V11(StoredV11Account),
    V12(StoredV12Account),
    V13(StoredV13Account),
    V14(StoredV14Account),
    V15(StoredV15Account),
    V16(StoredV16Account),
}

impl StoredAccount {
    /// Decode `value` as the given version's shape
    pub fn decode(version: StorageVersion, value: Value) -> Result<Self, AccountStorageError> {
        let stored = match version {
            StorageVersion::V8 => Self::V8(serde_json::from_value(value)?),
            StorageVersion::V9 => Self::V9(serde_json::from_value(value)?),
            StorageVersion::V10 => Self::V10(serde_json::from_value(value)?),
            StorageVersion::V11 => Self::V11(serde_json::from_value(value)?),
            StorageVersion::V12 => Self::V12(serde_json::from_value(value)?),
            StorageVersion::V13 => Self::V13(serde_json::from_value(value)?),
            StorageVersion::V14 => Self::V14(serde_json::from_value(value)?),
            StorageVersion::V15 => Self::V15(serde_json::from_value(value)?),
            StorageVersion::V16 => Self::V16(serde_json::from_value(value)?),
        };
        Ok(stored)
    }

    pub fn version(&self) -> StorageVersion {
        match self {
            Self::V8(_) => StorageVersion::V8,
            Self::V9(_) => StorageVersion::V9,
            Self::V10(_) => StorageVersion::V10,
            Self::V11(_) => StorageVersion::V11,
            Self::V12(_) => StorageVersion::V12,
            Self::V13(_) => StorageVersion::V13,
            Self::V14(_) => StorageVersion::V14,
            Self::V15(_) => StorageVersion::V15,
            Self::V16(_) => StorageVersion::V16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredV8Account {
    pub storage_version: u32,

    pub enclave_key_name: String,
    pub enclave_pub_key: String,
    pub name: String,
    pub address: String,
    pub home_chain_id: u64,
    pub home_coin_address: String,

    pub last_balance: String,
    pub last_block: u64,
    pub last_block_timestamp: u64,
    pub last_finalized_block: u64,

    pub chain_gas_constants: ChainGasConstants,
    pub push_token: Option<String>,

    pub recent_transfers: Vec<StoredV15Clog>,
    pub named_accounts: Vec<EAccount>,
    pub account_keys: Vec<KeyData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredV9Account {
    pub storage_version: u32,

    pub enclave_key_name: String,
    pub enclave_pub_key: String,
    pub name: String,
    pub address: String,
    pub home_chain_id: u64,
    pub home_coin_address: String,

    pub last_balance: String,
    pub last_block: u64,
    pub last_block_timestamp: u64,
    pub last_finalized_block: u64,

    pub chain_gas_constants: ChainGasConstants,
    pub push_token: Option<String>,

    pub recent_transfers: Vec<StoredV15Clog>,
    pub named_accounts: Vec<EAccount>,
    pub account_keys: Vec<KeyData>,
    pub pending_key_rotation: Vec<KeyRotationClog>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredV10Account {
    pub storage_version: u32,

    pub enclave_key_name: String,
    pub enclave_pub_key: String,
    pub name: String,
    pub address: String,
    pub home_chain_id: u64,
    pub home_coin_address: String,

    pub last_balance: String,
    pub last_block: u64,
    pub last_block_timestamp: u64,
    pub last_finalized_block: u64,

    pub chain_gas_constants: ChainGasConstants,
    pub push_token: Option<String>,

    pub recent_transfers: Vec<StoredV15Clog>,
    pub named_accounts: Vec<EAccount>,
    pub account_keys: Vec<KeyData>,
    pub pending_key_rotation: Vec<KeyRotationClog>,

    pub recommended_exchanges: Vec<RecommendedExchange>,
    pub suggested_actions: Vec<SuggestedAction>,
    #[serde(rename = "dismissedActionIDs")]
    pub dismissed_action_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredV11Account {
    pub storage_version: u32,

    pub enclave_key_name: String,
    pub enclave_pub_key: String,
    pub name: String,
    pub address: String,
    pub home_chain_id: u64,
    pub home_coin_address: String,

    pub last_balance: String,
    pub last_block: u64,
    pub last_block_timestamp: u64,
    pub last_finalized_block: u64,

    pub chain_gas_constants: ChainGasConstants,
    pub push_token: Option<String>,

    pub recent_transfers: Vec<StoredV15Clog>,
    pub named_accounts: Vec<EAccount>,
    pub account_keys: Vec<KeyData>,
    pub pending_key_rotation: Vec<KeyRotationClog>,

    pub recommended_exchanges: Vec<RecommendedExchange>,
    pub suggested_actions: Vec<SuggestedAction>,
    #[serde(rename = "dismissedActionIDs")]
    pub dismissed_action_ids: Vec<String>,

    pub linked_accounts: Vec<LinkedAccount>,
    pub invite_link_status: Option<InviteLinkStatus>,
    pub invitees: Vec<EAccount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredV12Account {
    pub storage_version: u32,

    pub enclave_key_name: String,
    pub enclave_pub_key: String,
    pub name: String,
    pub address: String,
    pub home_chain_id: u64,
    pub home_coin_address: String,

    pub last_balance: String,
    pub last_block: u64,
    pub last_block_timestamp: u64,
    pub last_finalized_block: u64,

    pub chain_gas_constants: ChainGasConstants,
    pub push_token: Option<String>,

    pub recent_transfers: Vec<StoredV15Clog>,
    pub named_accounts: Vec<EAccount>,
    pub account_keys: Vec<KeyData>,
    pub pending_key_rotation: Vec<KeyRotationClog>,

    pub recommended_exchanges: Vec<RecommendedExchange>,
    pub suggested_actions: Vec<SuggestedAction>,
    #[serde(rename = "dismissedActionIDs")]
    pub dismissed_action_ids: Vec<String>,

    pub linked_accounts: Vec<LinkedAccount>,
    pub invite_link_status: Option<InviteLinkStatus>,
    pub invitees: Vec<EAccount>,

    pub is_onboarded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredV13Account {
    pub storage_version: u32,

    pub enclave_key_name: String,
    pub enclave_pub_key: String,
    pub name: String,
    pub address: String,
    pub home_chain_id: u64,
    pub home_coin_address: String,

    pub last_balance: String,
    pub last_block: u64,
    pub last_block_timestamp: u64,
    pub last_finalized_block: u64,

    pub chain_gas_constants: ChainGasConstants,
    pub push_token: Option<String>,

    pub recent_transfers: Vec<StoredV15Clog>,
    pub named_accounts: Vec<EAccount>,
    pub account_keys: Vec<KeyData>,
    pub pending_key_rotation: Vec<KeyRotationClog>,

    pub recommended_exchanges: Vec<RecommendedExchange>,
    pub suggested_actions: Vec<SuggestedAction>,
    #[serde(rename = "dismissedActionIDs")]
    pub dismissed_action_ids: Vec<String>,

    pub linked_accounts: Vec<LinkedAccount>,
    pub invite_link_status: Option<InviteLinkStatus>,
    pub invitees: Vec<EAccount>,

    pub is_onboarded: bool,

    // Written by some v13 builds, not others
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_request_statuses: Option<Vec<RequestStatus>>,
    pub last_read_notif_timestamp: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredV14Account {
    pub storage_version: u32,

    pub enclave_key_name: String,
    pub enclave_pub_key: String,
    pub name: String,
    pub address: String,
    pub home_chain_id: u64,
    pub home_coin_address: String,

    pub last_balance: String,
    pub last_block: u64,
    pub last_block_timestamp: u64,
    pub last_finalized_block: u64,

    pub chain_gas_constants: ChainGasConstants,
    pub push_token: Option<String>,

    pub recent_transfers: Vec<StoredV15Clog>,
    pub named_accounts: Vec<EAccount>,
    pub account_keys: Vec<KeyData>,
    pub pending_key_rotation: Vec<KeyRotationClog>,

    pub recommended_exchanges: Vec<RecommendedExchange>,
    pub suggested_actions: Vec<SuggestedAction>,
    #[serde(rename = "dismissedActionIDs")]
    pub dismissed_action_ids: Vec<String>,

    pub linked_accounts: Vec<LinkedAccount>,
    pub invite_link_status: Option<InviteLinkStatus>,
    pub invitees: Vec<EAccount>,

    pub is_onboarded: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_request_statuses: Option<Vec<RequestStatus>>,
    pub last_read_notif_timestamp: u64,

    pub exchange_rates: Vec<CurrencyExchangeRate>,
    pub sent_payment_links: Vec<PaymentLinkNote>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredV15Account {
    pub storage_version: u32,

    pub enclave_key_name: String,
    pub enclave_pub_key: String,
    pub name: String,
    pub address: String,
    pub home_chain_id: u64,
    pub home_coin_address: String,

    pub last_balance: String,
    pub last_block: u64,
    pub last_block_timestamp: u64,
    pub last_finalized_block: u64,

    pub chain_gas_constants: ChainGasConstants,
    pub push_token: Option<String>,

    pub recent_transfers: Vec<StoredV15Clog>,
    pub named_accounts: Vec<EAccount>,
    pub account_keys: Vec<KeyData>,
    pub pending_key_rotation: Vec<KeyRotationClog>,

    pub recommended_exchanges: Vec<RecommendedExchange>,
    pub suggested_actions: Vec<SuggestedAction>,
    #[serde(rename = "dismissedActionIDs")]
    pub dismissed_action_ids: Vec<String>,

    pub linked_accounts: Vec<LinkedAccount>,
    pub invite_link_status: Option<InviteLinkStatus>,
    pub invitees: Vec<EAccount>,

    pub is_onboarded: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_request_statuses: Option<Vec<RequestStatus>>,
    pub last_read_notif_timestamp: u64,

    pub exchange_rates: Vec<CurrencyExchangeRate>,
    pub sent_payment_links: Vec<PaymentLinkNote>,

    // May be null or missing entirely
    #[serde(default)]
    pub proposed_swaps: Option<Vec<StoredV15ProposedSwap>>,
}

/// Latest shape. New fields here must be `Option` with `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredV16Account {
    pub storage_version: u32,

    pub enclave_key_name: String,
    pub enclave_pub_key: String,
    pub name: String,
    pub address: String,
    pub home_chain_id: u64,
    pub home_coin_address: String,

    pub last_balance: String,
    pub last_block: u64,
    pub last_block_timestamp: u64,
    pub last_finalized_block: u64,

    pub chain_gas_constants: ChainGasConstants,
    pub push_token: Option<String>,

    pub recent_transfers: Vec<Clog>,
    pub named_accounts: Vec<EAccount>,
    pub account_keys: Vec<KeyData>,
    pub pending_key_rotation: Vec<KeyRotationClog>,

    pub recommended_exchanges: Vec<RecommendedExchange>,
    pub suggested_actions: Vec<SuggestedAction>,
    #[serde(rename = "dismissedActionIDs")]
    pub dismissed_action_ids: Vec<String>,

    pub linked_accounts: Vec<LinkedAccount>,
    pub invite_link_status: Option<InviteLinkStatus>,
    pub invitees: Vec<EAccount>,

    pub is_onboarded: bool,

    pub notification_request_statuses: Vec<RequestStatus>,
    pub last_read_notif_timestamp: u64,

    pub exchange_rates: Vec<CurrencyExchangeRate>,
    pub sent_payment_links: Vec<PaymentLinkNote>,

    pub proposed_swaps: Vec<ProposedSwap>,

    #[serde(rename = "landlineSessionURL", default)]
    pub landline_session_url: Option<String>,
    #[serde(default)]
    pub landline_accounts: Option<Vec<LandlineAccount>>,
}
