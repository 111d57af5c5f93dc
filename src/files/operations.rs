//! File repository operations
//!
//! Upload, list, download and delete over an account's downloads directory
//! and the per-file content records.
//!
//! Uploading a name that already exists replaces it: the old entry is dropped,
//! the new one is appended at the end of the listing, and the content record is
//! overwritten. Deleting removes both the entry and the content record.

use chrono::Utc;
use log::{info, warn};

use super::content::{file_kind, placeholder_content};
use super::results::StorageUsage;
use super::size::format_size;
use super::validation::{validate_filename, validate_size};
use crate::account::{self, DirectoryRecord, FileEntry};
use crate::config::LimitsConfig;
use crate::error::{VaultError, VaultResult};
use crate::store::{KvStore, keys};

/// Loads the directory record an upload will modify.
///
/// A corrupt record is rebuilt from the info document when the account still
/// has a password record; an account with neither is `NotFound`.
fn load_for_upload<S: KvStore + ?Sized>(
    store: &S,
    email: &str,
) -> VaultResult<DirectoryRecord> {
    match account::read_directory(store, email) {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(VaultError::NotFound("Account".into())),
        Err(VaultError::StorageCorrupt { key, source }) => {
            if store.get(&keys::password_key(email))?.is_none() {
                return Err(VaultError::NotFound("Account".into()));
            }
            warn!(
                "Rebuilding corrupt directory record {} before upload: {}",
                key, source
            );
            account::rebuild_directory(store, email)
        }
        Err(e) => Err(e),
    }
}

/// Stores a new file for `email` and appends it to the downloads listing.
pub fn upload<S: KvStore + ?Sized>(
    store: &mut S,
    limits: &LimitsConfig,
    email: &str,
    filename: &str,
    size: u64,
) -> VaultResult<FileEntry> {
    validate_filename(filename, limits)?;
    validate_size(size, limits)?;

    let mut record = load_for_upload(store, email)?;

    let uploaded_at = Utc::now();
    let kind = file_kind(filename);
    let size_label = format_size(size);
    let content = placeholder_content(filename, &kind, &size_label, uploaded_at);
    let content_key = keys::content_key(email, filename);

    let entry = FileEntry {
        name: filename.to_string(),
        path: keys::file_path(email, filename),
        kind,
        size: size_label,
        size_bytes: size,
        content_key: content_key.clone(),
        created_at: uploaded_at,
    };

    record.ensure_downloads(uploaded_at);
    let Some(downloads) = record.downloads_mut() else {
        return Err(VaultError::NotFound("Downloads directory".into()));
    };
    let before = downloads.files.len();
    downloads.files.retain(|f| f.name != filename);
    if downloads.files.len() != before {
        info!("Replacing existing file {} for {}", filename, email);
    }
    downloads.files.push(entry.clone());

    store.set(&content_key, &content)?;
    account::write_directory(store, &record)?;

    info!(
        "Uploaded {} ({}, {}) for {}",
        entry.name, entry.size, entry.kind, email
    );

    Ok(entry)
}

/// Returns the downloads listing for `email` in upload order.
///
/// Unknown accounts, corrupt records and accounts without a downloads
/// directory all list as empty.
pub fn list<S: KvStore + ?Sized>(store: &S, email: &str) -> VaultResult<Vec<FileEntry>> {
    let files = account::get_directory(store, email)?
        .and_then(|record| record.downloads().map(|dir| dir.files.clone()))
        .unwrap_or_default();
    Ok(files)
}

/// Returns the stored content of `filename`, matched exactly.
pub fn download<S: KvStore + ?Sized>(
    store: &S,
    email: &str,
    filename: &str,
) -> VaultResult<Option<String>> {
    if filename.is_empty() {
        return Ok(None);
    }
    Ok(store.get(&keys::content_key(email, filename))?)
}

/// Returns the listing entry for `filename`.
pub fn file_details<S: KvStore + ?Sized>(
    store: &S,
    email: &str,
    filename: &str,
) -> VaultResult<FileEntry> {
    list(store, email)?
        .into_iter()
        .find(|f| f.name == filename)
        .ok_or_else(|| VaultError::NotFound("File".into()))
}

/// Removes the first entry named `filename` and its content record.
pub fn delete<S: KvStore + ?Sized>(store: &mut S, email: &str, filename: &str) -> VaultResult<()> {
    let Some(mut record) = account::get_directory(store, email)? else {
        return Err(VaultError::NotFound("File".into()));
    };

    let Some(downloads) = record.downloads_mut() else {
        return Err(VaultError::NotFound("File".into()));
    };

    let Some(index) = downloads.files.iter().position(|f| f.name == filename) else {
        return Err(VaultError::NotFound("File".into()));
    };

    let content_key = downloads.files[index].content_key.clone();
    store.delete(&content_key)?;
    downloads.files.remove(index);
    account::write_directory(store, &record)?;

    info!("Deleted {} for {}", filename, email);
    Ok(())
}

/// Sums the declared sizes of every file in the downloads listing.
pub fn usage<S: KvStore + ?Sized>(store: &S, email: &str) -> VaultResult<StorageUsage> {
    let files = list(store, email)?;
    let total_bytes = files.iter().map(|f| f.size_bytes).sum();

    Ok(StorageUsage {
        file_count: files.len(),
        total_bytes,
        total_label: format_size(total_bytes),
    })
}
