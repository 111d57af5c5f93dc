//! Vault core
//!
//! Bundles the account directory, file repository and session state over one
//! injected key-value store. Every call round-trips through the store; nothing
//! is cached.

use log::warn;

use crate::account::{self, Account, AccountSummary, DirectoryRecord, FileEntry};
use crate::config::LimitsConfig;
use crate::error::VaultResult;
use crate::files::{self, StorageUsage};
use crate::session::{self, SessionRecord};
use crate::store::KvStore;

pub struct Vault<S: KvStore> {
    store: S,
    limits: LimitsConfig,
}

impl<S: KvStore> Vault<S> {
    pub fn new(store: S, limits: LimitsConfig) -> Self {
        warn!("Passwords are stored in plaintext; do not use real credentials");
        Self { store, limits }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // --------------------
    // Account directory
    // --------------------

    pub fn register(&mut self, name: &str, email: &str, password: &str) -> VaultResult<Account> {
        account::register(&mut self.store, &self.limits, name, email, password)
    }

    pub fn authenticate(&mut self, email: &str, password: &str) -> VaultResult<Account> {
        account::authenticate(&mut self.store, email, password)
    }

    pub fn directory(&self, email: &str) -> VaultResult<Option<DirectoryRecord>> {
        account::get_directory(&self.store, email)
    }

    pub fn info_document(&self, email: &str) -> VaultResult<String> {
        account::info_document(&self.store, email)
    }

    pub fn accounts(&self) -> VaultResult<Vec<AccountSummary>> {
        account::list_accounts(&self.store)
    }

    // --------------------
    // File repository
    // --------------------

    pub fn upload(&mut self, email: &str, filename: &str, size: u64) -> VaultResult<FileEntry> {
        files::upload(&mut self.store, &self.limits, email, filename, size)
    }

    pub fn list(&self, email: &str) -> VaultResult<Vec<FileEntry>> {
        files::list(&self.store, email)
    }

    pub fn download(&self, email: &str, filename: &str) -> VaultResult<Option<String>> {
        files::download(&self.store, email, filename)
    }

    pub fn delete(&mut self, email: &str, filename: &str) -> VaultResult<()> {
        files::delete(&mut self.store, email, filename)
    }

    pub fn file_details(&self, email: &str, filename: &str) -> VaultResult<FileEntry> {
        files::file_details(&self.store, email, filename)
    }

    pub fn usage(&self, email: &str) -> VaultResult<StorageUsage> {
        files::usage(&self.store, email)
    }

    // --------------------
    // Session state
    // --------------------

    pub fn login(&mut self, account: &Account) -> VaultResult<SessionRecord> {
        session::login(&mut self.store, account)
    }

    pub fn current_session(&self) -> VaultResult<Option<SessionRecord>> {
        session::current(&self.store)
    }

    pub fn logout(&mut self) -> VaultResult<()> {
        session::logout(&mut self.store)
    }
}
