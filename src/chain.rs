//! Home chain selection for new accounts

use alloy_primitives::{address, Address};

/// Chain-derived defaults for a freshly created account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    pub chain_id: u64,
    pub name: &'static str,
    /// Home coin (USDC) contract on this chain
    pub home_coin_address: Address,
}

impl ChainConfig {
    /// Base mainnet
    pub fn base() -> Self {
        Self {
            chain_id: 8453,
            name: "base",
            home_coin_address: address!("833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"),
        }
    }

    /// Base Sepolia testnet
    pub fn base_sepolia() -> Self {
        Self {
            chain_id: 84532,
            name: "baseSepolia",
            home_coin_address: address!("036CbD53842c5426634e7929541eC2318f3dCF7e"),
        }
    }

    /// Look up a supported chain by id
    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        [Self::base(), Self::base_sepolia()]
            .into_iter()
            .find(|c| c.chain_id == chain_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_chain_id() {
        assert_eq!(ChainConfig::from_chain_id(8453), Some(ChainConfig::base()));
        assert_eq!(ChainConfig::from_chain_id(84532), Some(ChainConfig::base_sepolia()));
        assert_eq!(ChainConfig::from_chain_id(1), None);
    }

    #[test]
    fn test_home_coin_checksum() {
        assert_eq!(
            ChainConfig::base().home_coin_address.to_checksum(None),
            "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"
        );
    }
}
