//! Key layout
//!
//! Maps accounts and their files onto store keys. Emails and filenames are
//! validated to exclude `/`, which keeps every key below unambiguous.

/// Key of the single logged-in session record.
pub const SESSION_KEY: &str = "session:current";

/// Prefix shared by every directory record key.
pub const DIRECTORY_PREFIX: &str = "userdir:";

const PASSWORD_PREFIX: &str = "userpass:";
const INFO_PREFIX: &str = "userinfo:";
const CONTENT_PREFIX: &str = "userfile:";

/// Key of the JSON directory record for an account.
pub fn directory_key(email: &str) -> String {
    format!("{}{}", DIRECTORY_PREFIX, email)
}

/// Key of the password record for an account.
pub fn password_key(email: &str) -> String {
    format!("{}{}", PASSWORD_PREFIX, email)
}

/// Key of the rendered info document for an account.
pub fn info_key(email: &str) -> String {
    format!("{}{}", INFO_PREFIX, email)
}

/// Key of the content record for one uploaded file.
pub fn content_key(email: &str, filename: &str) -> String {
    format!("{}{}/{}", CONTENT_PREFIX, email, filename)
}

/// Recovers the email from a directory record key.
pub fn email_from_directory_key(key: &str) -> Option<&str> {
    key.strip_prefix(DIRECTORY_PREFIX).filter(|email| !email.is_empty())
}

/// Virtual path of an account's root directory.
pub fn account_path(email: &str) -> String {
    format!("/data/{}/", email)
}

/// Virtual path of an account's downloads directory.
pub fn downloads_path(email: &str) -> String {
    format!("/data/{}/downloads/", email)
}

/// Virtual path of an uploaded file.
pub fn file_path(email: &str, filename: &str) -> String {
    format!("{}{}", downloads_path(email), filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_families_do_not_overlap() {
        let email = "ann@example.com";
        let keys = [
            directory_key(email),
            password_key(email),
            info_key(email),
            content_key(email, "notes.txt"),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert!(!a.starts_with(b.as_str()) && !b.starts_with(a.as_str()));
            }
        }
    }

    #[test]
    fn test_email_from_directory_key() {
        assert_eq!(
            email_from_directory_key("userdir:ann@example.com"),
            Some("ann@example.com")
        );
        assert_eq!(email_from_directory_key("userdir:"), None);
        assert_eq!(email_from_directory_key("userpass:ann@example.com"), None);
    }

    #[test]
    fn test_paths() {
        assert_eq!(account_path("a@b.c"), "/data/a@b.c/");
        assert_eq!(file_path("a@b.c", "x.pdf"), "/data/a@b.c/downloads/x.pdf");
    }
}
