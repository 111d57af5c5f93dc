//! Error handling
//!
//! Defines error types and the mapping from errors to user-facing messages.

pub mod handlers;
pub mod types;

pub use types::*;
