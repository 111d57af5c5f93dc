//! Filename and size validation
//!
//! Handles the checks run before an upload or lookup touches the store.

use crate::config::LimitsConfig;
use crate::error::VaultError;

/// Validate that a filename is safe to embed in a content key
pub fn validate_filename(filename: &str, limits: &LimitsConfig) -> Result<(), VaultError> {
    if filename.trim().is_empty() {
        return Err(VaultError::InvalidInput("Empty filename".into()));
    }

    if filename.chars().count() > limits.max_filename_length {
        return Err(VaultError::InvalidInput("Filename too long".into()));
    }

    if filename.contains(['/', '\\']) || filename.contains(char::is_control) {
        return Err(VaultError::InvalidInput(format!(
            "Invalid filename: {}",
            filename.escape_default()
        )));
    }

    if filename == "." || filename == ".." {
        return Err(VaultError::InvalidInput(format!("Invalid filename: {}", filename)));
    }

    Ok(())
}

/// Validate a declared upload size against the configured ceiling
pub fn validate_size(size: u64, limits: &LimitsConfig) -> Result<(), VaultError> {
    if size > limits.max_upload_bytes {
        return Err(VaultError::InvalidInput(format!(
            "File exceeds the {} byte upload limit",
            limits.max_upload_bytes
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_filename() {
        let limits = LimitsConfig::default();
        assert!(validate_filename("report.pdf", &limits).is_ok());
        assert!(validate_filename("my report (final).pdf", &limits).is_ok());

        for bad in ["", "  ", "a/b.txt", "a\\b.txt", "tab\t.txt", ".", ".."] {
            assert!(validate_filename(bad, &limits).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_validate_filename_length() {
        let limits = LimitsConfig {
            max_filename_length: 5,
            ..LimitsConfig::default()
        };
        assert!(validate_filename("a.txt", &limits).is_ok());
        assert!(validate_filename("ab.txt", &limits).is_err());
    }

    #[test]
    fn test_validate_size() {
        let limits = LimitsConfig {
            max_upload_bytes: 10,
            ..LimitsConfig::default()
        };
        assert!(validate_size(0, &limits).is_ok());
        assert!(validate_size(10, &limits).is_ok());
        assert!(validate_size(11, &limits).is_err());
    }
}
