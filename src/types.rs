//! Nested record types carried by the current account shape
//!
//! Most of these have not changed shape across storage versions, so the
//! legacy account variants reuse them directly. Only the foreign-token
//! descriptor and the records embedding it have legacy twins (see
//! `stored_types`).

use crate::encoding::{self, checksummed, checksummed_opt, decimal};
use crate::error::AccountStorageError;
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// An address plus whatever we know about who it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EAccount {
    #[serde(with = "checksummed")]
    pub addr: Address,

    /// Registered name, if this is a wallet account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Well-known label (e.g. "faucet", "payment link")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ens_name: Option<String>,

    /// Registration timestamp, unix seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

impl EAccount {
    /// Create an account reference with only an address
    pub fn from_addr(addr: Address) -> Self {
        Self {
            addr,
            name: None,
            label: None,
            ens_name: None,
            timestamp: None,
        }
    }
}

/// An authorized device key on the contract wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyData {
    /// DER-encoded public key, hex
    pub pub_key: String,
    pub added_at: u64,
    pub slot: u8,
}

impl KeyData {
    /// Decode the hex public key
    pub fn pub_key_bytes(&self) -> Result<Vec<u8>, AccountStorageError> {
        encoding::decode_hex(&self.pub_key)
    }
}

/// Snapshot of chain fee parameters
///
/// Fee fields are decimal integer strings to avoid floating-point error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainGasConstants {
    #[serde(with = "checksummed")]
    pub paymaster_address: Address,
    pub max_priority_fee_per_gas: String,
    pub max_fee_per_gas: String,
    pub pre_verification_gas: String,
}

impl ChainGasConstants {
    /// Gas constants with no fee and no paymaster
    pub fn zero() -> Self {
        Self {
            paymaster_address: Address::ZERO,
            max_priority_fee_per_gas: "0".to_string(),
            max_fee_per_gas: "0".to_string(),
            pre_verification_gas: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedExchange {
    pub cta: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedAction {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub url: String,
}

/// An external identity linked to this wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LinkedAccount {
    Farcaster(FarcasterAccount),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarcasterAccount {
    pub fid: u64,
    #[serde(with = "checksummed")]
    pub custody: Address,
    /// Signed sign-in message and its signature
    pub message: String,
    pub signature: String,
    pub nonce: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pfp_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Status of this user's invite link, as inviter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteLinkStatus {
    pub link: String,
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses_left: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses_max: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<EAccount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestState {
    Created,
    Fulfilled,
    Cancelled,
    Declined,
}

/// A payment request worth notifying the user about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestStatus {
    pub link: String,
    /// On-chain request id, decimal
    pub request_id: String,
    pub recipient: EAccount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<EAccount>,
    pub status: RequestState,
    pub created_at: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfilled_by: Option<EAccount>,
}

/// A non-home token, identified by chain and contract address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignToken {
    pub chain_id: u64,
    #[serde(with = "checksummed")]
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub symbol: String,
    pub decimals: u8,
    #[serde(rename = "logoURI", default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

/// An offer to swap a received foreign token into the home coin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedSwap {
    pub from_coin: ForeignToken,
    #[serde(with = "decimal")]
    pub from_amount: U256,
    /// Expected home-coin output, smallest unit
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

/// Exchange rate for a non-USD display currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyExchangeRate {
    pub name: String,
    pub symbol: String,
    pub currency: String,
    pub decimals: u8,
    #[serde(rename = "rateUSD")]
    pub rate_usd: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteState {
    Pending,
    Confirmed,
    Claimed,
    Cancelled,
}

/// Outstanding payment link created by this user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLinkNote {
    pub id: String,
    pub link: String,
    pub status: NoteState,
    pub sender: EAccount,
    /// Dollar amount as a decimal string, e.g. "12.50"
    pub dollars: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimer: Option<EAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<u64>,
}

/// Bank account linked through the onramp/offramp provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandlineAccount {
    pub landline_account_uuid: String,
    pub bank_name: String,
    pub account_name: String,
    pub account_number_last_four: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_logo: Option<String>,
    pub created_at: u64,
    /// Address the provider pays out to, when different from the wallet
    #[serde(
        default,
        with = "checksummed_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub payout_address: Option<Address>,
}
