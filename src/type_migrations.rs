//! Upgrades for nested records whose shape changed independently of the
//! account version
//!
//! A foreign-token descriptor that names no address under either alias
//! cannot be repaired. The record embedding it is dropped, not reported:
//! a handful of such records were written by an old client bug, and the
//! account is still usable without them.

use crate::clog::{Clog, PreSwapTransfer, TransferClog};
use crate::encoding::parse_address;
use crate::error::AccountStorageError;
use crate::stored_types::{
    StoredV15Clog, StoredV15ForeignToken, StoredV15PreSwapTransfer, StoredV15ProposedSwap,
};
use crate::types::{ForeignToken, ProposedSwap};

/// Upgrade a legacy foreign-token descriptor.
///
/// `Ok(None)` when neither `address` nor `token` is populated.
pub fn migrate_v15_foreign_token(
    token: StoredV15ForeignToken,
) -> Result<Option<ForeignToken>, AccountStorageError> {
    let address = match token.resolved_address() {
        Some(raw) => parse_address(raw)?,
        None => return Ok(None),
    };
    Ok(Some(ForeignToken {
        chain_id: token.chain_id,
        address,
        name: token.name,
        symbol: token.symbol,
        decimals: token.decimals,
        logo_uri: token.logo_uri,
    }))
}

/// Upgrade one legacy activity-log entry.
///
/// Non-transfer entries are unchanged. A transfer whose pre-swap sub-record
/// has an unresolvable token keeps the transfer and loses the sub-record.
pub fn migrate_v15_clog(clog: StoredV15Clog) -> Result<Clog, AccountStorageError> {
    let transfer = match clog {
        StoredV15Clog::Transfer(transfer) => transfer,
        StoredV15Clog::CreateLink(c) => return Ok(Clog::CreateLink(c)),
        StoredV15Clog::ClaimLink(c) => return Ok(Clog::ClaimLink(c)),
        StoredV15Clog::KeyRotation(c) => return Ok(Clog::KeyRotation(c)),
    };

    let pre_swap_transfer = match transfer.pre_swap_transfer {
        Some(pre_swap) => migrate_pre_swap_transfer(pre_swap)?,
        None => None,
    };

    Ok(Clog::Transfer(TransferClog {
        status: transfer.status,
        timestamp: transfer.timestamp,
        tx_hash: transfer.tx_hash,
        block_number: transfer.block_number,
        op_hash: transfer.op_hash,
        from: transfer.from,
        to: transfer.to,
        amount: transfer.amount,
        memo: transfer.memo,
        pre_swap_transfer,
    }))
}

fn migrate_pre_swap_transfer(
    pre_swap: StoredV15PreSwapTransfer,
) -> Result<Option<PreSwapTransfer>, AccountStorageError> {
    let symbol = pre_swap.coin.symbol.clone();
    match migrate_v15_foreign_token(pre_swap.coin)? {
        Some(coin) => Ok(Some(PreSwapTransfer {
            coin,
            amount: pre_swap.amount,
            from: pre_swap.from,
        })),
        None => {
            log::warn!("Dropping pre-swap transfer of {}: token has no address", symbol);
            Ok(None)
        }
    }
}

/// Upgrade a legacy proposed-swap list, which may be null or absent.
///
/// Swaps whose token resolves to no address are filtered out.
pub fn migrate_v15_proposed_swaps(
    swaps: Option<Vec<StoredV15ProposedSwap>>,
) -> Result<Vec<ProposedSwap>, AccountStorageError> {
    let mut migrated = Vec::new();
    for swap in swaps.unwrap_or_default() {
        let symbol = swap.from_coin.symbol.clone();
        let Some(from_coin) = migrate_v15_foreign_token(swap.from_coin)? else {
            log::warn!("Dropping proposed swap from {}: token has no address", symbol);
            continue;
        };
        migrated.push(ProposedSwap {
            from_coin,
            from_amount: swap.from_amount,
            to_amount: swap.to_amount,
            received_hash: swap.received_hash,
            received_at: swap.received_at,
            cache_until: swap.cache_until,
            exec_deadline: swap.exec_deadline,
            exec_to: swap.exec_to,
            exec_value: swap.exec_value,
            exec_call_data: swap.exec_call_data,
        });
    }
    Ok(migrated)
}
