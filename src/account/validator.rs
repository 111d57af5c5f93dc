//! Input validation for account operations
//!
//! Rejects malformed names, emails and passwords before any record is read.

use crate::config::LimitsConfig;
use crate::error::VaultError;

/// Performs basic input sanitation shared by every account field.
fn is_valid_input(input: &str, max_length: usize) -> bool {
    !input.trim().is_empty() && input.chars().count() <= max_length && !input.contains(char::is_control)
}

/// Validates an email address used as an account key.
pub fn validate_email(email: &str, limits: &LimitsConfig) -> Result<(), VaultError> {
    if !is_valid_input(email, limits.max_email_length) {
        return Err(VaultError::InvalidInput("Invalid email format".into()));
    }

    let well_formed = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };

    if !well_formed || email.contains('/') || email.contains(char::is_whitespace) {
        return Err(VaultError::InvalidInput("Invalid email format".into()));
    }

    Ok(())
}

/// Validates a display name.
pub fn validate_name(name: &str, limits: &LimitsConfig) -> Result<(), VaultError> {
    if !is_valid_input(name, limits.max_name_length) {
        return Err(VaultError::InvalidInput("Invalid name".into()));
    }
    Ok(())
}

/// Validates a password. Only presence and length are checked.
pub fn validate_password(password: &str, limits: &LimitsConfig) -> Result<(), VaultError> {
    if password.is_empty()
        || password.chars().count() > limits.max_password_length
        || password.contains(['\r', '\n', '\0'])
    {
        return Err(VaultError::InvalidInput("Invalid password format".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        let limits = LimitsConfig::default();
        assert!(validate_email("ann@example.com", &limits).is_ok());
        assert!(validate_email("ann_b@example.co.uk", &limits).is_ok());

        for bad in ["", "   ", "ann", "@example.com", "ann@", "a@b@c", "an n@x.y", "a/b@x.y", "a@x\n"] {
            assert!(validate_email(bad, &limits).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_validate_lengths() {
        let limits = LimitsConfig {
            max_name_length: 3,
            max_password_length: 4,
            ..LimitsConfig::default()
        };
        assert!(validate_name("Ann", &limits).is_ok());
        assert!(validate_name("Anna", &limits).is_err());
        assert!(validate_password("1234", &limits).is_ok());
        assert!(validate_password("12345", &limits).is_err());
        assert!(validate_password("", &limits).is_err());
    }

    #[test]
    fn test_password_may_contain_spaces() {
        let limits = LimitsConfig::default();
        assert!(validate_password(" pass word ", &limits).is_ok());
    }
}
