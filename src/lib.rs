//! Account Storage: versioned local wallet state with forward migrations
//!
//! This crate owns the one record a wallet app persists on device: the
//! user's account. It knows every shape that record has ever been written
//! in, and upgrades any of them to the current [`Account`].
//!
//! # Architecture
//!
//! - **Schema registry** (`stored_account`, `stored_types`): one frozen
//!   struct per storage version, 8 through 16
//! - **Nested migrators** (`type_migrations`): foreign-token descriptors
//!   inside activity-log entries and proposed swaps
//! - **Migration chain** (`account_migrations`): one upgrade step per
//!   legacy version, dispatched on `storageVersion`
//! - **Codec** (`codec`): [`parse_account`] and [`serialize_account`], the
//!   only entry points most callers need
//!
//! # Example
//!
//! ```
//! use account_storage::{
//!     create_empty_account, parse_account, serialize_account, AccountIdentity, ChainConfig,
//! };
//! use alloy_primitives::address;
//!
//! let account = create_empty_account(
//!     AccountIdentity {
//!         enclave_key_name: "wallet-enclave-key".to_string(),
//!         enclave_pub_key: "0x3059".to_string(),
//!         name: "alice".to_string(),
//!         address: address!("ef4396d9ff8107086d215a1c9f8866c54795d7c7"),
//!     },
//!     &ChainConfig::base(),
//! );
//!
//! let raw = serialize_account(Some(&account))?;
//! let parsed = parse_account(Some(&raw))?;
//! assert_eq!(parsed, Some(account));
//! # Ok::<(), account_storage::AccountStorageError>(())
//! ```

// Public modules
pub mod account;
pub mod account_migrations;
pub mod chain;
pub mod clog;
pub mod codec;
pub mod config;
pub mod encoding;
pub mod error;
pub mod manager;
pub mod store;
pub mod stored_account;
pub mod stored_types;
pub mod type_migrations;
pub mod types;

// Re-exports for convenience
pub use account::{create_empty_account, Account, AccountIdentity};
pub use chain::ChainConfig;
pub use clog::Clog;
pub use codec::{parse_account, serialize_account};
pub use config::{AppVariant, StorageConfig};
pub use error::AccountStorageError;
pub use manager::AccountManager;
pub use store::{AccountStore, FileAccountStore, MemoryAccountStore};
pub use stored_account::{StorageVersion, StoredAccount, LATEST_STORAGE_VERSION};

// Common result type
pub type Result<T> = std::result::Result<T, AccountStorageError>;
