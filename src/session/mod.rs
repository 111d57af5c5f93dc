//! Session state
//!
//! Tracks which account, if any, is logged in for this vault.

pub mod operations;
pub mod state;

pub use operations::{current, login, logout};
pub use state::SessionRecord;
