//! Module `session`
//!
//! Defines the `SessionRecord` persisted while an account is logged in. It is a
//! client-trusted marker, not an authentication token.

use serde::{Deserialize, Serialize};

use crate::account::Account;

/// The logged-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Account identifier; the email doubles as the id.
    pub id: String,
    pub email: String,
    pub name: String,
}

impl SessionRecord {
    pub fn for_account(account: &Account) -> Self {
        Self {
            id: account.email.clone(),
            email: account.email.clone(),
            name: account.name.clone(),
        }
    }
}
