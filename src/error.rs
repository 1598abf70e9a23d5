//! Error types for account storage operations
//!
//! Absent records and unsupported legacy versions are not errors: they
//! surface as `Ok(None)` from the codec. Everything here is a hard failure
//! the caller must see.

use thiserror::Error;

/// Core error type for parsing, migrating and persisting accounts
#[derive(Error, Debug)]
pub enum AccountStorageError {
    /// Malformed JSON, or a record missing required fields for its version
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record has no `storageVersion` tag
    #[error("Stored account has no storageVersion")]
    MissingStorageVersion,

    /// `storageVersion` is present but not an integer
    #[error("Invalid storageVersion: {0}")]
    InvalidStorageVersion(String),

    /// `storageVersion` is newer than latest or otherwise unregistered
    #[error("Unknown storageVersion: {0}")]
    UnknownStorageVersion(i64),

    /// Address is not 20 bytes of hex
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Decimal integer string could not be parsed
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Hex string could not be decoded
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Raw storage I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AccountStorageError {
    /// Create an invalid address error
    pub fn invalid_address(addr: impl Into<String>) -> Self {
        Self::InvalidAddress(addr.into())
    }

    /// Create an invalid amount error
    pub fn invalid_amount(amount: impl Into<String>) -> Self {
        Self::InvalidAmount(amount.into())
    }

    /// Whether this error came from a record we refuse to guess about
    /// (an unregistered version tag) rather than from bad field contents.
    pub fn is_version_error(&self) -> bool {
        matches!(
            self,
            Self::MissingStorageVersion
                | Self::InvalidStorageVersion(_)
                | Self::UnknownStorageVersion(_)
        )
    }
}
