//! Process-wide storage configuration
//!
//! Read once at startup and passed explicitly to [`AccountManager`].
//!
//! [`AccountManager`]: crate::manager::AccountManager

use std::env;
use std::path::PathBuf;

/// Build variant the app is running as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppVariant {
    Dev,
    Prod,
}

impl AppVariant {
    /// Name of the device signing key in secure storage.
    /// Dev and prod builds keep separate keys so they can coexist.
    pub fn enclave_key_name(self) -> &'static str {
        match self {
            Self::Dev => "wallet-enclave-key-dev",
            Self::Prod => "wallet-enclave-key",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub variant: AppVariant,
    pub enclave_key_name: String,
    /// Where the file-backed store keeps the account record
    pub storage_path: PathBuf,
}

impl StorageConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `APP_VARIANT`: "prod" (default) or "dev"
    /// - `ACCOUNT_STORAGE_PATH`: account file path (default `./account.json`)
    pub fn from_env() -> Self {
        let variant_str = env::var("APP_VARIANT")
            .unwrap_or_else(|_| "prod".to_string())
            .to_lowercase();
        let variant = match variant_str.as_str() {
            "dev" => AppVariant::Dev,
            "prod" | "" => AppVariant::Prod,
            other => {
                log::warn!("Unknown app variant '{}', defaulting to prod", other);
                AppVariant::Prod
            }
        };

        let storage_path = env::var("ACCOUNT_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./account.json"));

        log::info!(
            "Account storage: variant={:?}, path={}",
            variant,
            storage_path.display()
        );
        Self::new(variant, storage_path)
    }

    pub fn new(variant: AppVariant, storage_path: impl Into<PathBuf>) -> Self {
        Self {
            variant,
            enclave_key_name: variant.enclave_key_name().to_string(),
            storage_path: storage_path.into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(AppVariant::Prod, "./account.json")
    }
}
