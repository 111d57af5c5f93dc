//! Error handlers
//!
//! Converts vault errors into the messages shown to the person using the vault.

use crate::error::types::VaultError;
use log::{debug, error};

/// Log a vault error that reached the façade boundary.
pub fn handle_error(operation: &str, err: &VaultError) {
    match err {
        VaultError::Store(_) => error!("{} failed: {}", operation, err),
        _ => debug!("{} rejected: {}", operation, err),
    }
}

/// Convert an error to the message carried by a failed response.
pub fn user_message(err: &VaultError) -> String {
    match err {
        VaultError::DuplicateAccount(_) => "User with this email already exists".into(),
        VaultError::InvalidCredentials => "Invalid email or password".into(),
        VaultError::NotFound(what) => format!("{} not found", what),
        VaultError::StorageCorrupt { .. } => "Stored data could not be read".into(),
        VaultError::InvalidInput(reason) => reason.clone(),
        VaultError::Store(_) => "Storage is unavailable, please try again".into(),
    }
}
