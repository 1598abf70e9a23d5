//! The logical, current-version account
//!
//! Unlike the stored shapes, every field here is fully populated and typed:
//! addresses are [`Address`] values (always written back checksummed) and
//! the cached balance is an exact [`U256`].

use crate::chain::ChainConfig;
use crate::clog::{Clog, KeyRotationClog};
use crate::types::{
    ChainGasConstants, CurrencyExchangeRate, EAccount, InviteLinkStatus, KeyData,
    LandlineAccount, LinkedAccount, PaymentLinkNote, ProposedSwap, RecommendedExchange,
    RequestStatus, SuggestedAction,
};
use alloy_primitives::{Address, U256};

/// One user's locally cached wallet state
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Name of the device signing key in secure storage
    pub enclave_key_name: String,
    pub enclave_pub_key: String,
    /// Registered human-readable name
    pub name: String,
    /// Contract wallet address
    pub address: Address,
    pub home_chain_id: u64,
    pub home_coin_address: Address,

    /// Home-coin balance as of `last_block`, smallest unit
    pub last_balance: U256,
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
    pub dismissed_action_ids: Vec<String>,

    pub linked_accounts: Vec<LinkedAccount>,
    /// This user's invite link, as inviter
    pub invite_link_status: Option<InviteLinkStatus>,
    pub invitees: Vec<EAccount>,

    pub is_onboarded: bool,

    pub notification_request_statuses: Vec<RequestStatus>,
    pub last_read_notif_timestamp: u64,

    pub exchange_rates: Vec<CurrencyExchangeRate>,
    pub sent_payment_links: Vec<PaymentLinkNote>,

    pub proposed_swaps: Vec<ProposedSwap>,

    /// Session URL for the linked onramp/offramp provider, empty if none
    pub landline_session_url: String,
    pub landline_accounts: Vec<LandlineAccount>,
}

/// Identity of a newly registered account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountIdentity {
    pub enclave_key_name: String,
    pub enclave_pub_key: String,
    pub name: String,
    pub address: Address,
}

/// Create a fresh, empty account for first-time onboarding
pub fn create_empty_account(identity: AccountIdentity, chain: &ChainConfig) -> Account {
    log::debug!(
        "Creating empty account {} on {} ({})",
        identity.name,
        chain.name,
        chain.chain_id
    );
    Account {
        enclave_key_name: identity.enclave_key_name,
        enclave_pub_key: identity.enclave_pub_key,
        name: identity.name,
        address: identity.address,
        home_chain_id: chain.chain_id,
        home_coin_address: chain.home_coin_address,

        last_balance: U256::ZERO,
        last_block: 0,
        last_block_timestamp: 0,
        last_finalized_block: 0,

        chain_gas_constants: ChainGasConstants::zero(),
        push_token: None,

        recent_transfers: Vec::new(),
        named_accounts: Vec::new(),
        account_keys: Vec::new(),
        pending_key_rotation: Vec::new(),

        recommended_exchanges: Vec::new(),
        suggested_actions: Vec::new(),
        dismissed_action_ids: Vec::new(),

        linked_accounts: Vec::new(),
        invite_link_status: None,
        invitees: Vec::new(),

        is_onboarded: false,

        notification_request_statuses: Vec::new(),
        last_read_notif_timestamp: 0,

        exchange_rates: Vec::new(),
        sent_payment_links: Vec::new(),

        proposed_swaps: Vec::new(),

        landline_session_url: String::new(),
        landline_accounts: Vec::new(),
    }
}

impl Account {
    /// Suggested actions the user has not dismissed
    pub fn visible_suggested_actions(&self) -> impl Iterator<Item = &SuggestedAction> {
        self.suggested_actions
            .iter()
            .filter(|a| !self.dismissed_action_ids.contains(&a.id))
    }

    /// Activity-log entries newer than the last-read notification timestamp
    pub fn unread_transfers(&self) -> impl Iterator<Item = &Clog> {
        self.recent_transfers
            .iter()
            .filter(|c| c.timestamp() > self.last_read_notif_timestamp)
    }
}
