//! Record types
//!
//! The JSON shapes persisted under the directory-record keys, plus the account
//! views handed back to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::keys;

/// Name of the directory entry that holds uploaded files.
pub const DOWNLOADS_DIR: &str = "downloads";

/// A registered account. The password lives only in its own record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// One line of the account listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub email: String,
    pub path: String,
    pub created_at: DateTime<Utc>,
}

/// One account's metadata and nested entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryRecord {
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub path: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub files: Vec<Entry>,
}

/// A node inside a directory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Directory(DirectoryEntry),
    File(FileEntry),
}

/// Tag value that marks an entry as a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectoryKind {
    #[serde(rename = "directory")]
    Directory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: DirectoryKind,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// Metadata for one stored file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    /// Uppercased extension, empty when the name has none.
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable size label such as `1.5 KB`.
    pub size: String,
    #[serde(default)]
    pub size_bytes: u64,
    pub content_key: String,
    pub created_at: DateTime<Utc>,
}

impl DirectoryRecord {
    /// A fresh record holding only the empty downloads directory.
    pub fn new(email: &str, name: &str, created_at: DateTime<Utc>) -> Self {
        let mut record = Self {
            email: email.to_string(),
            name: name.to_string(),
            path: keys::account_path(email),
            created_at,
            files: Vec::new(),
        };
        record.ensure_downloads(created_at);
        record
    }

    pub fn account(&self) -> Account {
        Account {
            email: self.email.clone(),
            name: self.name.clone(),
            created_at: self.created_at,
        }
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            email: self.email.clone(),
            path: self.path.clone(),
            created_at: self.created_at,
        }
    }

    /// The downloads directory, if one has been created.
    pub fn downloads(&self) -> Option<&DirectoryEntry> {
        self.files.iter().find_map(|entry| match entry {
            Entry::Directory(dir) if dir.name == DOWNLOADS_DIR => Some(dir),
            _ => None,
        })
    }

    pub fn downloads_mut(&mut self) -> Option<&mut DirectoryEntry> {
        self.files.iter_mut().find_map(|entry| match entry {
            Entry::Directory(dir) if dir.name == DOWNLOADS_DIR => Some(dir),
            _ => None,
        })
    }

    /// Appends an empty downloads directory unless one already exists.
    pub fn ensure_downloads(&mut self, now: DateTime<Utc>) {
        if self.files.iter().any(is_downloads) {
            return;
        }
        self.files.push(Entry::Directory(DirectoryEntry {
            name: DOWNLOADS_DIR.to_string(),
            path: keys::downloads_path(&self.email),
            kind: DirectoryKind::Directory,
            created_at: now,
            files: Vec::new(),
        }));
    }
}

fn is_downloads(entry: &Entry) -> bool {
    matches!(entry, Entry::Directory(dir) if dir.name == DOWNLOADS_DIR)
}
