//! Request façade
//!
//! The asynchronous operation surface UI code calls instead of touching the
//! vault directly. Every operation carries a configurable artificial delay and
//! reports its outcome as an `ApiResponse`.

pub mod facade;
pub mod results;

pub use facade::VaultApi;
pub use results::{AccountView, ApiResponse, Download, FileMeta, FileUpload};
