//! CloudVault
//!
//! A local simulation of a cloud storage product: accounts, per-account file
//! upload/list/download/delete and a login session, all persisted in a
//! pluggable key-value store.

pub mod account;
pub mod api;
pub mod config;
pub mod console;
pub mod error;
pub mod files;
pub mod session;
pub mod store;
pub mod utils;
pub mod vault;

pub use api::{ApiResponse, FileUpload, VaultApi};
pub use config::VaultConfig;
pub use error::{StoreError, VaultError, VaultResult};
pub use store::{FileStore, KvStore, MemoryStore};
pub use vault::Vault;
