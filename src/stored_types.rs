//! Legacy nested shapes, frozen as they were written through version 15
//!
//! Before version 16 the foreign-token descriptor was inconsistent about the
//! name of its address field: some records say `token`, some say `address`,
//! some both, a few neither. Everything that embeds a descriptor has a
//! legacy twin here.

use crate::clog::{KeyRotationClog, OpStatus, PaymentLinkClog};
use crate::encoding::{checksummed, decimal};
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Foreign-token descriptor with either address alias
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredV15ForeignToken {
    pub chain_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub symbol: String,
    pub decimals: u8,
    #[serde(rename = "logoURI", default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

impl StoredV15ForeignToken {
    /// The contract address, preferring `address` over `token`.
    /// Empty strings count as absent.
    pub fn resolved_address(&self) -> Option<&str> {
        fn non_empty(alias: &Option<String>) -> Option<&str> {
            alias.as_deref().filter(|s| !s.is_empty())
        }
        non_empty(&self.address).or_else(|| non_empty(&self.token))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredV15ProposedSwap {
    pub from_coin: StoredV15ForeignToken,
    #[serde(with = "decimal")]
    pub from_amount: U256,
    pub to_amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_hash: Option<String>,
    pub received_at: u64,
    pub cache_until: u64,
    pub exec_deadline: u64,
    #[serde(with = "checksummed")]
    pub exec_to: Address,
    pub exec_value: String,
    pub exec_call_data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredV15PreSwapTransfer {
    pub coin: StoredV15ForeignToken,
    #[serde(with = "decimal")]
    pub amount: U256,
    #[serde(with = "checksummed")]
    pub from: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredV15TransferClog {
    pub status: OpStatus,
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op_hash: Option<String>,
    #[serde(with = "checksummed")]
    pub from: Address,
    #[serde(with = "checksummed")]
    pub to: Address,
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_swap_transfer: Option<StoredV15PreSwapTransfer>,
}

/// Activity-log entry as stored by versions 8 through 15.
/// Only transfers differ from the current shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StoredV15Clog {
    Transfer(StoredV15TransferClog),
    CreateLink(PaymentLinkClog),
    ClaimLink(PaymentLinkClog),
    KeyRotation(KeyRotationClog),
}
