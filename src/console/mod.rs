//! Terminal console
//!
//! A line-oriented controller over the request façade: parses one command per
//! line and renders each response as JSON.

pub mod commands;
pub mod handlers;
pub mod parser;

pub use commands::{Command, CommandResult, CommandStatus};
pub use handlers::handle_command;
pub use parser::parse_command;
