//! Account directory operations
//!
//! Registration and authentication over the directory, password and
//! info-document records.
//!
//! Passwords are stored and compared in plaintext. That mirrors the simulated
//! product this vault stands in for and is not fit for real credentials.

use chrono::{DateTime, Utc};
use log::{info, warn};

use super::document::{INFO_FILE_KIND, INFO_FILE_NAME, info_field, render_info_document};
use super::records::{Account, AccountSummary, DirectoryRecord, Entry, FileEntry};
use super::validator::{validate_email, validate_name, validate_password};
use crate::config::LimitsConfig;
use crate::error::{VaultError, VaultResult};
use crate::files::size::format_size;
use crate::store::{KvStore, keys};

/// Reads the directory record for `email`.
///
/// Returns `Ok(None)` when no record exists and `StorageCorrupt` when the stored
/// value is not a directory record.
pub fn read_directory<S: KvStore + ?Sized>(
    store: &S,
    email: &str,
) -> VaultResult<Option<DirectoryRecord>> {
    let key = keys::directory_key(email);
    match store.get(&key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| VaultError::StorageCorrupt { key, source }),
        None => Ok(None),
    }
}

/// Persists a directory record under its account's key.
pub fn write_directory<S: KvStore + ?Sized>(
    store: &mut S,
    record: &DirectoryRecord,
) -> VaultResult<()> {
    let raw = serde_json::to_string(record)?;
    store.set(&keys::directory_key(&record.email), &raw)?;
    Ok(())
}

/// Returns the directory record for `email`, treating a corrupt record as absent.
pub fn get_directory<S: KvStore + ?Sized>(
    store: &S,
    email: &str,
) -> VaultResult<Option<DirectoryRecord>> {
    match read_directory(store, email) {
        Err(VaultError::StorageCorrupt { key, source }) => {
            warn!("Ignoring corrupt directory record {}: {}", key, source);
            Ok(None)
        }
        other => other,
    }
}

/// Builds a replacement for a corrupt directory record.
///
/// The name and creation time are read back from the info document, which is
/// listed again at the top of the record. Uploaded files are not recovered; the
/// downloads directory starts empty.
pub fn rebuild_directory<S: KvStore + ?Sized>(
    store: &S,
    email: &str,
) -> VaultResult<DirectoryRecord> {
    let Some(doc) = store.get(&keys::info_key(email))? else {
        return Ok(DirectoryRecord::new(email, "", Utc::now()));
    };

    let name = info_field(&doc, "Name").unwrap_or_default();
    let created_at = info_field(&doc, "Account Created")
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);

    let mut record = DirectoryRecord::new(email, name, created_at);
    let entry = info_entry(&record.path, email, &doc, created_at);
    record.files.insert(0, entry);
    Ok(record)
}

fn info_entry(account_path: &str, email: &str, doc: &str, created_at: DateTime<Utc>) -> Entry {
    Entry::File(FileEntry {
        name: INFO_FILE_NAME.to_string(),
        path: format!("{}{}", account_path, INFO_FILE_NAME),
        kind: INFO_FILE_KIND.to_string(),
        size: format_size(doc.len() as u64),
        size_bytes: doc.len() as u64,
        content_key: keys::info_key(email),
        created_at,
    })
}

/// Creates a new account with its directory record, password record and info
/// document.
///
/// Fails with `DuplicateAccount` if a directory record already exists for the
/// email, corrupt or not. A corrupt account is recovered by logging in. The
/// directory record is written last, so a failed registration can be retried.
pub fn register<S: KvStore + ?Sized>(
    store: &mut S,
    limits: &LimitsConfig,
    name: &str,
    email: &str,
    password: &str,
) -> VaultResult<Account> {
    validate_name(name, limits)?;
    validate_email(email, limits)?;
    validate_password(password, limits)?;

    if store.get(&keys::directory_key(email))?.is_some() {
        warn!("Registration rejected, account exists: {}", email);
        return Err(VaultError::DuplicateAccount(email.to_string()));
    }

    let name = name.trim();
    let created_at = Utc::now();
    let info_doc = render_info_document(name, email, created_at);

    let mut record = DirectoryRecord::new(email, name, created_at);
    let entry = info_entry(&record.path, email, &info_doc, created_at);
    record.files.insert(0, entry);

    store.set(&keys::password_key(email), password)?;
    store.set(&keys::info_key(email), &info_doc)?;
    write_directory(store, &record)?;

    info!("Registered account {}", email);

    Ok(record.account())
}

/// Checks `password` against the stored password for `email`.
///
/// Unknown accounts and mismatched passwords fail with the same
/// `InvalidCredentials`. A corrupt directory record is rebuilt and saved once
/// the password matches.
pub fn authenticate<S: KvStore + ?Sized>(
    store: &mut S,
    email: &str,
    password: &str,
) -> VaultResult<Account> {
    let record = match read_directory(&*store, email) {
        Ok(Some(record)) => Some(record),
        Ok(None) => {
            info!("Login failed for {}: no such account", email);
            return Err(VaultError::InvalidCredentials);
        }
        Err(VaultError::StorageCorrupt { key, source }) => {
            warn!("Corrupt directory record {}: {}", key, source);
            None
        }
        Err(e) => return Err(e),
    };

    if store.get(&keys::password_key(email))?.as_deref() != Some(password) {
        info!("Login failed for {}: password mismatch", email);
        return Err(VaultError::InvalidCredentials);
    }

    let record = match record {
        Some(record) => record,
        None => {
            let rebuilt = rebuild_directory(&*store, email)?;
            write_directory(store, &rebuilt)?;
            warn!("Rebuilt directory record for {}", email);
            rebuilt
        }
    };

    info!("Login succeeded for {}", email);
    Ok(record.account())
}

/// Returns the rendered info document for `email`.
pub fn info_document<S: KvStore + ?Sized>(store: &S, email: &str) -> VaultResult<String> {
    store
        .get(&keys::info_key(email))?
        .ok_or_else(|| VaultError::NotFound("Account".into()))
}

/// Lists every account with a readable directory record, sorted by email.
pub fn list_accounts<S: KvStore + ?Sized>(store: &S) -> VaultResult<Vec<AccountSummary>> {
    let mut accounts = Vec::new();

    for key in store.keys()? {
        let Some(email) = keys::email_from_directory_key(&key) else {
            continue;
        };
        if let Some(record) = get_directory(store, email)? {
            accounts.push(record.summary());
        }
    }

    accounts.sort_by(|a, b| a.email.cmp(&b.email));
    Ok(accounts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn registered() -> MemoryStore {
        let mut store = MemoryStore::new();
        register(
            &mut store,
            &LimitsConfig::default(),
            "Ann",
            "ann@example.com",
            "hunter2",
        )
        .unwrap();
        store
    }

    #[test]
    fn test_register_writes_three_records() {
        let store = registered();
        assert_eq!(
            store.get(&keys::password_key("ann@example.com")).unwrap(),
            Some("hunter2".to_string())
        );
        assert!(store.get(&keys::info_key("ann@example.com")).unwrap().is_some());

        let record = read_directory(&store, "ann@example.com").unwrap().unwrap();
        assert_eq!(record.name, "Ann");
        assert_eq!(record.files.len(), 2);
        assert!(matches!(&record.files[0], Entry::File(f) if f.name == INFO_FILE_NAME));
        assert!(record.downloads().unwrap().files.is_empty());
    }

    #[test]
    fn test_register_duplicate_keeps_first_account() {
        let mut store = registered();
        let before = store.clone();

        let err = register(
            &mut store,
            &LimitsConfig::default(),
            "Impostor",
            "ann@example.com",
            "other",
        )
        .unwrap_err();

        assert!(matches!(err, VaultError::DuplicateAccount(_)));
        assert_eq!(store.keys().unwrap(), before.keys().unwrap());
        assert_eq!(
            store.get(&keys::password_key("ann@example.com")).unwrap(),
            Some("hunter2".to_string())
        );
    }

    #[test]
    fn test_register_rejects_bad_input_without_writing() {
        let mut store = MemoryStore::new();
        let limits = LimitsConfig::default();
        assert!(matches!(
            register(&mut store, &limits, "Ann", "not-an-email", "pw"),
            Err(VaultError::InvalidInput(_))
        ));
        assert!(matches!(
            register(&mut store, &limits, " ", "ann@example.com", "pw"),
            Err(VaultError::InvalidInput(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_authenticate() {
        let mut store = registered();

        let account = authenticate(&mut store, "ann@example.com", "hunter2").unwrap();
        assert_eq!(account.name, "Ann");
        assert_eq!(account.email, "ann@example.com");

        assert!(matches!(
            authenticate(&mut store, "ann@example.com", "Hunter2"),
            Err(VaultError::InvalidCredentials)
        ));
        assert!(matches!(
            authenticate(&mut store, "ann@example.com", "hunter2 "),
            Err(VaultError::InvalidCredentials)
        ));
        assert!(matches!(
            authenticate(&mut store, "bob@example.com", "hunter2"),
            Err(VaultError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_corrupt_directory_reads_as_absent() {
        let mut store = registered();
        store
            .set(&keys::directory_key("ann@example.com"), "{not json")
            .unwrap();

        assert!(matches!(
            read_directory(&store, "ann@example.com"),
            Err(VaultError::StorageCorrupt { .. })
        ));
        assert_eq!(get_directory(&store, "ann@example.com").unwrap(), None);
    }

    #[test]
    fn test_login_rebuilds_corrupt_directory() {
        let mut store = registered();
        let original = read_directory(&store, "ann@example.com").unwrap().unwrap();
        store
            .set(&keys::directory_key("ann@example.com"), "{not json")
            .unwrap();

        assert!(matches!(
            authenticate(&mut store, "ann@example.com", "wrong"),
            Err(VaultError::InvalidCredentials)
        ));
        assert!(read_directory(&store, "ann@example.com").is_err());

        let account = authenticate(&mut store, "ann@example.com", "hunter2").unwrap();
        assert_eq!(account.name, "Ann");
        assert_eq!((original.created_at - account.created_at).num_milliseconds(), 0);

        let rebuilt = read_directory(&store, "ann@example.com").unwrap().unwrap();
        assert_eq!(rebuilt.files.len(), original.files.len());
        assert!(matches!(
            &rebuilt.files[0],
            Entry::File(f) if f.name == INFO_FILE_NAME && f.content_key == keys::info_key("ann@example.com")
        ));
        assert!(rebuilt.downloads().unwrap().files.is_empty());
    }

    #[test]
    fn test_rebuild_without_info_document() {
        let mut store = registered();
        store.delete(&keys::info_key("ann@example.com")).unwrap();

        let record = rebuild_directory(&store, "ann@example.com").unwrap();
        assert_eq!(record.name, "");
        assert_eq!(record.files.len(), 1);
        assert!(record.downloads().unwrap().files.is_empty());
    }

    #[test]
    fn test_list_accounts_skips_corrupt_records() {
        let mut store = registered();
        let limits = LimitsConfig::default();
        register(&mut store, &limits, "Bob", "bob@example.com", "pw").unwrap();
        register(&mut store, &limits, "Cat", "cat@example.com", "pw").unwrap();
        store
            .set(&keys::directory_key("bob@example.com"), "null")
            .unwrap();

        let emails: Vec<_> = list_accounts(&store)
            .unwrap()
            .into_iter()
            .map(|a| a.email)
            .collect();
        assert_eq!(emails, vec!["ann@example.com", "cat@example.com"]);
    }

    #[test]
    fn test_info_document() {
        let store = registered();
        let doc = info_document(&store, "ann@example.com").unwrap();
        assert!(doc.contains("Name: Ann"));
        assert!(matches!(
            info_document(&store, "bob@example.com"),
            Err(VaultError::NotFound(_))
        ));
    }
}
