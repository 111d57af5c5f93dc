//! Façade result types
//!
//! Defines the uniform response shape and the payloads carried inside it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::account::{Account, FileEntry};
use crate::error::VaultError;
use crate::error::handlers::user_message;
use crate::session::SessionRecord;

/// Outcome of a façade call: `ok` plus an optional message and payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(payload: T) -> Self {
        Self {
            ok: true,
            message: None,
            payload: Some(payload),
        }
    }

    pub fn success_with_message(message: impl Into<String>, payload: Option<T>) -> Self {
        Self {
            ok: true,
            message: Some(message.into()),
            payload,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
            payload: None,
        }
    }

    pub fn from_error(err: &VaultError) -> Self {
        Self::failure(user_message(err))
    }
}

/// A file handed to `upload_file`: its name and declared size in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUpload {
    pub name: String,
    pub size: u64,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Account as shown to the UI; never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountView {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            id: account.email.clone(),
            name: account.name.clone(),
            email: account.email.clone(),
        }
    }
}

impl From<SessionRecord> for AccountView {
    fn from(session: SessionRecord) -> Self {
        Self {
            id: session.id,
            name: session.name,
            email: session.email,
        }
    }
}

/// File metadata as shown on a file card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: String,
    pub upload_date: DateTime<Utc>,
}

impl From<FileEntry> for FileMeta {
    fn from(entry: FileEntry) -> Self {
        Self {
            id: entry.path,
            name: entry.name,
            kind: entry.kind,
            size: entry.size,
            upload_date: entry.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Download {
    pub file_name: String,
    pub content: String,
}
