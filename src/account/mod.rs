//! Account directory
//!
//! Handles registration, credential checks, and the directory record that holds
//! each account's metadata and nested file entries.

pub mod directory;
pub mod document;
pub mod records;
pub mod validator;

pub use directory::{
    authenticate, get_directory, info_document, list_accounts, read_directory, rebuild_directory,
    register, write_directory,
};
pub use records::{
    Account, AccountSummary, DirectoryEntry, DirectoryKind, DirectoryRecord, Entry, FileEntry,
    DOWNLOADS_DIR,
};
