//! In-memory account holder that writes back on every change
//!
//! The manager is the single writer for its store: every mutation goes
//! through [`AccountManager::transform`] or [`AccountManager::set_account`],
//! and each one persists the full serialized record before returning.

use crate::account::{create_empty_account, Account, AccountIdentity};
use crate::chain::ChainConfig;
use crate::codec::{parse_account, serialize_account};
use crate::config::StorageConfig;
use crate::error::AccountStorageError;
use crate::store::AccountStore;
use alloy_primitives::Address;

pub struct AccountManager<S: AccountStore> {
    config: StorageConfig,
    store: S,
    account: Option<Account>,
}

impl<S: AccountStore> AccountManager<S> {
    /// Load whatever account the store holds.
    ///
    /// A record too old to migrate loads as no account. It stays on disk
    /// until the next write replaces it.
    pub fn load(config: StorageConfig, store: S) -> Result<Self, AccountStorageError> {
        let raw = store.load_raw()?;
        let account = parse_account(raw.as_deref())?;
        match &account {
            Some(a) => log::info!("Loaded account {} ({})", a.name, a.address),
            None => log::info!("No account stored"),
        }
        Ok(Self {
            config,
            store,
            account,
        })
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Create and persist a fresh account, signed by this build's device key
    pub fn create_account(
        &mut self,
        name: &str,
        enclave_pub_key: &str,
        address: Address,
        chain: &ChainConfig,
    ) -> Result<&Account, AccountStorageError> {
        let identity = AccountIdentity {
            enclave_key_name: self.config.enclave_key_name.clone(),
            enclave_pub_key: enclave_pub_key.to_string(),
            name: name.to_string(),
            address,
        };
        let account = create_empty_account(identity, chain);
        self.store.save_raw(&serialize_account(Some(&account))?)?;
        Ok(&*self.account.insert(account))
    }

    /// Replace the account (or remove it with `None`) and persist
    pub fn set_account(&mut self, account: Option<Account>) -> Result<(), AccountStorageError> {
        let raw = serialize_account(account.as_ref())?;
        self.store.save_raw(&raw)?;
        self.account = account;
        Ok(())
    }

    /// Apply `f` to the account and persist the result.
    ///
    /// Returns `false` without writing when there is no account.
    pub fn transform<F>(&mut self, f: F) -> Result<bool, AccountStorageError>
    where
        F: FnOnce(&mut Account),
    {
        let Some(mut account) = self.account.clone() else {
            return Ok(false);
        };
        f(&mut account);
        self.set_account(Some(account))?;
        Ok(true)
    }

    /// Forget the account, e.g. after the user deletes it
    pub fn clear(&mut self) -> Result<(), AccountStorageError> {
        log::info!("Clearing stored account");
        self.set_account(None)
    }

    pub fn dismiss_action(&mut self, action_id: &str) -> Result<bool, AccountStorageError> {
        self.transform(|a| {
            if !a.dismissed_action_ids.iter().any(|id| id == action_id) {
                a.dismissed_action_ids.push(action_id.to_string());
            }
        })
    }

    pub fn mark_notifications_read(&mut self, timestamp: u64) -> Result<bool, AccountStorageError> {
        self.transform(|a| {
            a.last_read_notif_timestamp = a.last_read_notif_timestamp.max(timestamp);
        })
    }

    pub fn set_push_token(&mut self, token: Option<String>) -> Result<bool, AccountStorageError> {
        self.transform(|a| a.push_token = token)
    }

    pub fn set_onboarded(&mut self) -> Result<bool, AccountStorageError> {
        self.transform(|a| a.is_onboarded = true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryAccountStore;
    use alloy_primitives::address;

    fn manager() -> AccountManager<MemoryAccountStore> {
        AccountManager::load(StorageConfig::default(), MemoryAccountStore::new()).unwrap()
    }

    #[test]
    fn test_transform_without_account_is_noop() {
        let mut m = manager();
        assert!(!m.set_push_token(Some("tok".to_string())).unwrap());
        assert_eq!(m.store.load_raw().unwrap(), None);
    }

    #[test]
    fn test_create_uses_configured_key_name() {
        let mut m = manager();
        let account = m
            .create_account(
                "carol",
                "0x3059",
                address!("ef4396d9ff8107086d215a1c9f8866c54795d7c7"),
                &ChainConfig::base(),
            )
            .unwrap();
        assert_eq!(account.enclave_key_name, "wallet-enclave-key");
        assert!(m.store.load_raw().unwrap().is_some());
    }

    #[test]
    fn test_mark_notifications_read_never_goes_back() {
        let mut m = manager();
        m.create_account("carol", "0x00", Address::ZERO, &ChainConfig::base())
            .unwrap();
        m.mark_notifications_read(200).unwrap();
        m.mark_notifications_read(100).unwrap();
        assert_eq!(m.account().unwrap().last_read_notif_timestamp, 200);
    }
}
