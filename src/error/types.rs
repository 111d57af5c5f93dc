//! Error types
//!
//! Defines domain-specific error types for the store layer and the vault.

use std::io;
use thiserror::Error;

/// Key-value store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store file is corrupt: {0}")]
    Corrupt(String),
}

/// Vault errors shared by the account directory, file repository and session state
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("account already exists: {0}")]
    DuplicateAccount(String),

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("corrupt record under key {key}: {source}")]
    StorageCorrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl From<serde_json::Error> for VaultError {
    fn from(error: serde_json::Error) -> Self {
        VaultError::Store(StoreError::Serialization(error))
    }
}

/// Result type for vault operations.
pub type VaultResult<T> = Result<T, VaultError>;
