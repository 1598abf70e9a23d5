//! Activity-log entries ("clogs")
//!
//! Each entry is tagged by `type` on the wire. Insertion order in the
//! account's `recentTransfers` is chronological.

use crate::encoding::{checksummed, decimal};
use crate::types::ForeignToken;
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpStatus {
    Pending,
    Confirmed,
    Finalized,
    Failed,
    Expired,
}

/// One activity-log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Clog {
    Transfer(TransferClog),
    CreateLink(PaymentLinkClog),
    ClaimLink(PaymentLinkClog),
    KeyRotation(KeyRotationClog),
}

impl Clog {
    pub fn status(&self) -> OpStatus {
        match self {
            Self::Transfer(c) => c.status,
            Self::CreateLink(c) | Self::ClaimLink(c) => c.status,
            Self::KeyRotation(c) => c.status,
        }
    }

    pub fn timestamp(&self) -> u64 {
        match self {
            Self::Transfer(c) => c.timestamp,
            Self::CreateLink(c) | Self::ClaimLink(c) => c.timestamp,
            Self::KeyRotation(c) => c.timestamp,
        }
    }
}

/// Home-coin transfer, optionally preceded by an inbound foreign-token
/// transfer that was swapped into it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferClog {
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
    /// Home-coin smallest units
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_swap_transfer: Option<PreSwapTransfer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreSwapTransfer {
    pub coin: ForeignToken,
    #[serde(with = "decimal")]
    pub amount: U256,
    #[serde(with = "checksummed")]
    pub from: Address,
}

/// Payment link created or claimed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLinkClog {
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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationType {
    Add,
    Remove,
}

/// Device key added to or removed from the wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyRotationClog {
    pub status: OpStatus,
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op_hash: Option<String>,
    pub slot: u8,
    pub rotation_type: RotationType,
}
