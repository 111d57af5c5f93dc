//! File repository result types

use serde::{Deserialize, Serialize};

/// Storage consumed by one account's uploads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageUsage {
    pub file_count: usize,
    pub total_bytes: u64,
    pub total_label: String,
}
