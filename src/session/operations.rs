//! Session operations
//!
//! Handles the session record lifecycle: written on login, read to gate file
//! access, removed on logout.

use log::{info, warn};

use super::state::SessionRecord;
use crate::account::Account;
use crate::error::VaultResult;
use crate::store::{KvStore, keys::SESSION_KEY};

/// Records `account` as the logged-in account, replacing any previous session.
pub fn login<S: KvStore + ?Sized>(store: &mut S, account: &Account) -> VaultResult<SessionRecord> {
    let session = SessionRecord::for_account(account);
    store.set(SESSION_KEY, &serde_json::to_string(&session)?)?;
    info!("Session started for {}", session.email);
    Ok(session)
}

/// Returns the current session; a corrupt record counts as logged out.
pub fn current<S: KvStore + ?Sized>(store: &S) -> VaultResult<Option<SessionRecord>> {
    let Some(raw) = store.get(SESSION_KEY)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(session) => Ok(Some(session)),
        Err(e) => {
            warn!("Ignoring corrupt session record: {}", e);
            Ok(None)
        }
    }
}

/// Clears the session record. Logging out twice is not an error.
pub fn logout<S: KvStore + ?Sized>(store: &mut S) -> VaultResult<()> {
    store.delete(SESSION_KEY)?;
    info!("Session cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::Utc;

    fn account(email: &str) -> Account {
        Account {
            email: email.into(),
            name: "Ann".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_login_current_logout() {
        let mut store = MemoryStore::new();
        assert_eq!(current(&store).unwrap(), None);

        login(&mut store, &account("ann@example.com")).unwrap();
        let session = current(&store).unwrap().unwrap();
        assert_eq!(session.id, "ann@example.com");
        assert_eq!(session.name, "Ann");

        logout(&mut store).unwrap();
        logout(&mut store).unwrap();
        assert_eq!(current(&store).unwrap(), None);
    }

    #[test]
    fn test_login_replaces_previous_session() {
        let mut store = MemoryStore::new();
        login(&mut store, &account("ann@example.com")).unwrap();
        login(&mut store, &account("bob@example.com")).unwrap();
        assert_eq!(current(&store).unwrap().unwrap().email, "bob@example.com");
    }

    #[test]
    fn test_corrupt_session_reads_as_logged_out() {
        let mut store = MemoryStore::new();
        store.set(SESSION_KEY, "{\"email\": 3}").unwrap();
        assert_eq!(current(&store).unwrap(), None);
    }
}
