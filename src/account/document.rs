//! Account information document
//!
//! Renders the human-readable `information.txt` kept next to each account.

use chrono::{DateTime, SecondsFormat, Utc};

/// Name under which the info document is listed in the directory record.
pub const INFO_FILE_NAME: &str = "information.txt";

/// Type label of the info document entry.
pub const INFO_FILE_KIND: &str = "TEXT";

pub fn render_info_document(name: &str, email: &str, created_at: DateTime<Utc>) -> String {
    format!(
        "Account Information\n\
         =================\n\
         \n\
         Name: {}\n\
         Email: {}\n\
         Account Created: {}\n\
         User ID: {}\n\
         \n\
         This file contains your account details for CloudVault.",
        name,
        email,
        created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        email
    )
}

/// Reads the value of a `Label: value` line from a rendered info document.
pub fn info_field<'a>(doc: &'a str, label: &str) -> Option<&'a str> {
    doc.lines().find_map(|line| {
        line.strip_prefix(label)
            .and_then(|rest| rest.strip_prefix(": "))
            .map(str::trim)
    })
}
