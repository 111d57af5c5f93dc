//! Simulated file content
//!
//! Derives a file's type from its name and synthesizes the placeholder body
//! stored in place of real bytes.

use chrono::{DateTime, SecondsFormat, Utc};

/// Uppercased extension after the last `.`; empty when there is none.
pub fn file_kind(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_uppercase(),
        _ => String::new(),
    }
}

/// Builds the stored body for an upload.
///
/// Recognized types get a fixed body; everything else gets a generic template
/// naming the file, its size label, type and upload time.
pub fn placeholder_content(
    filename: &str,
    kind: &str,
    size_label: &str,
    uploaded_at: DateTime<Utc>,
) -> String {
    match kind {
        "PDF" => format!(
            "%PDF-1.4\n\
             % simulated PDF content for {}\n\
             % This is a simulated PDF file for demonstration purposes.",
            filename
        ),
        "JPG" | "JPEG" => " simulated JPEG content ".to_string(),
        "PNG" => " simulated PNG content ".to_string(),
        "DOCX" => format!(
            "[Content_Types].xml\n_simulated DOCX content for {}_",
            filename
        ),
        _ => format!(
            "File: {}\n\
             Size: {}\n\
             Type: {}\n\
             Upload Date: {}\n\
             \n\
             This is a simulated file content for demonstration purposes.",
            filename,
            size_label,
            kind,
            uploaded_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        ),
    }
}
