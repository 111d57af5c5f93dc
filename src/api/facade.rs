//! Request façade implementation
//!
//! Each operation runs as its own task: it sleeps for the operation's latency,
//! then takes the vault lock and performs its whole read-modify-write under it.
//! Awaiting the returned future is optional; dropping it does not cancel the
//! mutation.

use log::info;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use super::results::{AccountView, ApiResponse, Download, FileMeta, FileUpload};
use crate::account::AccountSummary;
use crate::config::{LatencyConfig, VaultConfig};
use crate::error::handlers::handle_error;
use crate::error::{StoreError, VaultError, VaultResult};
use crate::files::StorageUsage;
use crate::store::KvStore;
use crate::vault::Vault;

pub struct VaultApi<S: KvStore> {
    vault: Arc<Mutex<Vault<S>>>,
    latency: LatencyConfig,
}

impl<S: KvStore> Clone for VaultApi<S> {
    fn clone(&self) -> Self {
        Self {
            vault: Arc::clone(&self.vault),
            latency: self.latency.clone(),
        }
    }
}

impl<S: KvStore + 'static> VaultApi<S> {
    pub fn new(vault: Vault<S>, latency: LatencyConfig) -> Self {
        Self {
            vault: Arc::new(Mutex::new(vault)),
            latency,
        }
    }

    /// Builds a façade over `store` using the limits and latency in `config`.
    pub fn from_config(store: S, config: &VaultConfig) -> Self {
        Self::new(
            Vault::new(store, config.limits.clone()),
            config.latency.clone(),
        )
    }

    pub fn latency(&self) -> &LatencyConfig {
        &self.latency
    }

    /// Spawns `work` behind `delay` and waits for its result.
    async fn run<T, F>(&self, delay: Duration, work: F) -> VaultResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Vault<S>) -> VaultResult<T> + Send + 'static,
    {
        let vault = Arc::clone(&self.vault);
        let handle = tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let mut vault = vault.lock().await;
            work(&mut *vault)
        });

        handle.await.map_err(|e| {
            VaultError::Store(StoreError::Io(std::io::Error::other(format!(
                "vault task failed: {}",
                e
            ))))
        })?
    }

    /// Authenticates and records the session.
    pub async fn login(&self, email: &str, password: &str) -> ApiResponse<AccountView> {
        let (email, password) = (email.to_string(), password.to_string());
        let result = self
            .run(self.latency.login(), move |vault| {
                let account = vault.authenticate(&email, &password)?;
                vault.login(&account)?;
                Ok(account)
            })
            .await;

        match result {
            Ok(account) => ApiResponse::success(AccountView::from(&account)),
            Err(e) => respond_error("login", &e),
        }
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> ApiResponse<AccountView> {
        let (name, email, password) = (name.to_string(), email.to_string(), password.to_string());
        let result = self
            .run(self.latency.register(), move |vault| {
                vault.register(&name, &email, &password)
            })
            .await;

        match result {
            Ok(account) => ApiResponse::success_with_message(
                "Account created successfully",
                Some(AccountView::from(&account)),
            ),
            Err(e) => respond_error("register", &e),
        }
    }

    pub async fn upload_file(&self, email: &str, file: FileUpload) -> ApiResponse<FileMeta> {
        let email = email.to_string();
        let result = self
            .run(self.latency.upload(), move |vault| {
                vault.upload(&email, &file.name, file.size)
            })
            .await;

        match result {
            Ok(entry) => {
                let message = format!("\"{}\" uploaded successfully", entry.name);
                ApiResponse::success_with_message(message, Some(FileMeta::from(entry)))
            }
            Err(e) => respond_error("upload", &e),
        }
    }

    pub async fn download_file(&self, email: &str, filename: &str) -> ApiResponse<Download> {
        let (email, file_name) = (email.to_string(), filename.to_string());
        let lookup = file_name.clone();
        let result = self
            .run(self.latency.download(), move |vault| {
                vault.download(&email, &lookup)
            })
            .await;

        match result {
            Ok(Some(content)) => ApiResponse::success_with_message(
                "Download initiated",
                Some(Download { file_name, content }),
            ),
            Ok(None) => ApiResponse::failure("File not found"),
            Err(e) => respond_error("download", &e),
        }
    }

    pub async fn delete_file(&self, email: &str, filename: &str) -> ApiResponse<()> {
        let (email, filename) = (email.to_string(), filename.to_string());
        let result = self
            .run(self.latency.delete(), move |vault| {
                vault.delete(&email, &filename)
            })
            .await;

        match result {
            Ok(()) => ApiResponse::success_with_message("File deleted successfully", None),
            Err(e) => respond_error("delete", &e),
        }
    }

    /// Lists the account's files. Never fails: any error lists as empty.
    pub async fn list_files(&self, email: &str) -> ApiResponse<Vec<FileMeta>> {
        let email = email.to_string();
        let result = self
            .run(self.latency.list(), move |vault| vault.list(&email))
            .await;

        let files = match result {
            Ok(files) => files.into_iter().map(FileMeta::from).collect(),
            Err(e) => {
                handle_error("list", &e);
                Vec::new()
            }
        };
        ApiResponse::success(files)
    }

    pub async fn file_details(&self, email: &str, filename: &str) -> ApiResponse<FileMeta> {
        let (email, filename) = (email.to_string(), filename.to_string());
        let result = self
            .run(self.latency.download(), move |vault| {
                vault.file_details(&email, &filename)
            })
            .await;

        match result {
            Ok(entry) => ApiResponse::success(FileMeta::from(entry)),
            Err(e) => respond_error("file details", &e),
        }
    }

    pub async fn storage_usage(&self, email: &str) -> ApiResponse<StorageUsage> {
        let email = email.to_string();
        let result = self
            .run(self.latency.list(), move |vault| vault.usage(&email))
            .await;

        match result {
            Ok(usage) => ApiResponse::success(usage),
            Err(e) => respond_error("usage", &e),
        }
    }

    pub async fn list_accounts(&self) -> ApiResponse<Vec<AccountSummary>> {
        let result = self
            .run(self.latency.list(), |vault| vault.accounts())
            .await;

        match result {
            Ok(accounts) => ApiResponse::success(accounts),
            Err(e) => respond_error("list accounts", &e),
        }
    }

    pub async fn account_info(&self, email: &str) -> ApiResponse<String> {
        let email = email.to_string();
        let result = self
            .run(self.latency.list(), move |vault| vault.info_document(&email))
            .await;

        match result {
            Ok(document) => ApiResponse::success(document),
            Err(e) => respond_error("account info", &e),
        }
    }

    /// The logged-in account, if any.
    pub async fn current_user(&self) -> ApiResponse<AccountView> {
        let result = self
            .run(self.latency.session(), |vault| vault.current_session())
            .await;

        match result {
            Ok(Some(session)) => ApiResponse::success(AccountView::from(session)),
            Ok(None) => ApiResponse::failure("Not logged in"),
            Err(e) => respond_error("current user", &e),
        }
    }

    pub async fn logout(&self) -> ApiResponse<()> {
        let result = self
            .run(self.latency.session(), |vault| vault.logout())
            .await;

        match result {
            Ok(()) => {
                info!("Logged out");
                ApiResponse::success_with_message("Logged out", None)
            }
            Err(e) => respond_error("logout", &e),
        }
    }
}

fn respond_error<T>(operation: &str, err: &VaultError) -> ApiResponse<T> {
    handle_error(operation, err);
    ApiResponse::from_error(err)
}
