//! Configuration management for CloudVault
//!
//! Separates where records are stored, how much artificial latency each
//! façade operation carries, and the input limits enforced before any
//! record is touched.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Complete vault configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct VaultConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub latency: LatencyConfig,

    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Which key-value backend holds the records
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    File,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// JSON document backing the `file` backend
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> String {
    "data/cloudvault.json".to_string()
}

/// Artificial delay per façade operation, in milliseconds.
///
/// Defaults to zero everywhere; interactive builds opt into
/// [`LatencyConfig::interactive`] or set the values in `config.toml`.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LatencyConfig {
    pub login_ms: u64,
    pub register_ms: u64,
    pub upload_ms: u64,
    pub download_ms: u64,
    pub delete_ms: u64,
    pub list_ms: u64,
    pub session_ms: u64,
}

impl LatencyConfig {
    /// Timings that feel like a remote service: reads are quicker than
    /// writes and uploads are the slowest.
    pub fn interactive() -> Self {
        Self {
            login_ms: 500,
            register_ms: 500,
            upload_ms: 1000,
            download_ms: 300,
            delete_ms: 300,
            list_ms: 300,
            session_ms: 0,
        }
    }

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }

    pub fn register(&self) -> Duration {
        Duration::from_millis(self.register_ms)
    }

    pub fn upload(&self) -> Duration {
        Duration::from_millis(self.upload_ms)
    }

    pub fn download(&self) -> Duration {
        Duration::from_millis(self.download_ms)
    }

    pub fn delete(&self) -> Duration {
        Duration::from_millis(self.delete_ms)
    }

    pub fn list(&self) -> Duration {
        Duration::from_millis(self.list_ms)
    }

    pub fn session(&self) -> Duration {
        Duration::from_millis(self.session_ms)
    }
}

/// Input limits checked before any record is read or written
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_email_length: usize,
    pub max_name_length: usize,
    pub max_password_length: usize,
    pub max_filename_length: usize,
    pub max_upload_bytes: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_email_length: 254,
            max_name_length: 100,
            max_password_length: 128,
            max_filename_length: 255,
            max_upload_bytes: 1024 * 1024 * 1024 * 1024,
        }
    }
}

impl VaultConfig {
    /// Load configuration from an optional `config.toml` with environment overrides
    /// (`CLOUDVAULT__LATENCY__UPLOAD_MS=0` and so on).
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from `path` (extension optional) with environment overrides.
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("CLOUDVAULT").separator("__"))
            .build()?;

        let config: VaultConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.store.backend == StoreBackend::File && self.store.path.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "store.path cannot be empty for the file backend".into(),
            ));
        }

        let limits = &self.limits;
        if limits.max_email_length == 0
            || limits.max_name_length == 0
            || limits.max_password_length == 0
            || limits.max_filename_length == 0
        {
            return Err(config::ConfigError::Message(
                "length limits must be greater than 0".into(),
            ));
        }

        if limits.max_upload_bytes == 0 {
            return Err(config::ConfigError::Message(
                "max_upload_bytes must be greater than 0".into(),
            ));
        }

        let latency = &self.latency;
        let slowest_read = latency.download_ms.max(latency.list_ms);
        if latency.upload_ms < slowest_read {
            return Err(config::ConfigError::Message(
                "upload latency must not be lower than download or list latency".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid_and_instant() {
        let config = VaultConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.latency.upload(), Duration::ZERO);
    }

    #[test]
    fn test_interactive_latency_keeps_ordering() {
        let latency = LatencyConfig::interactive();
        assert!(latency.download() < latency.login());
        assert!(latency.list() < latency.upload());
        assert!(latency.login() < latency.upload());
        let config = VaultConfig {
            latency,
            ..VaultConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vault.toml");
        fs::write(
            &path,
            r#"
[store]
backend = "file"
path = "/tmp/vault.json"

[latency]
upload_ms = 20
list_ms = 5

[limits]
max_filename_length = 64
"#,
        )
        .unwrap();

        let config = VaultConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.store.backend, StoreBackend::File);
        assert_eq!(config.store.path, "/tmp/vault.json");
        assert_eq!(config.latency.upload_ms, 20);
        assert_eq!(config.latency.login_ms, 0);
        assert_eq!(config.limits.max_filename_length, 64);
        assert_eq!(config.limits.max_email_length, 254);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = VaultConfig::default();
        config.store.backend = StoreBackend::File;
        config.store.path = " ".into();
        assert!(config.validate().is_err());

        let mut config = VaultConfig::default();
        config.limits.max_filename_length = 0;
        assert!(config.validate().is_err());

        let mut config = VaultConfig::default();
        config.latency.download_ms = 50;
        assert!(config.validate().is_err());
    }
}
