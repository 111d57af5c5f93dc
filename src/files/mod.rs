//! File repository
//!
//! Stores simulated file content per account and keeps the listing nested in
//! the account's downloads directory.

pub mod content;
pub mod operations;
pub mod results;
pub mod size;
pub mod validation;

pub use content::{file_kind, placeholder_content};
pub use operations::{delete, download, file_details, list, upload, usage};
pub use results::StorageUsage;
pub use size::format_size;
