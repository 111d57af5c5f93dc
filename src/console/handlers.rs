//! Console command handlers
//!
//! Dispatches parsed commands to the façade. File commands act on the
//! logged-in account and are refused without a session.

use log::debug;
use serde::Serialize;

use super::commands::{Command, CommandResult, CommandStatus, HELP_TEXT};
use crate::api::{ApiResponse, FileUpload, VaultApi};
use crate::store::KvStore;

/// Runs one command against the façade.
pub async fn handle_command<S: KvStore + 'static>(
    api: &VaultApi<S>,
    command: Command,
) -> CommandResult {
    debug!("Console command: {:?}", redact(&command));

    match command {
        Command::Register {
            email,
            password,
            name,
        } => render(&api.register(&name, &email, &password).await),
        Command::Login { email, password } => render(&api.login(&email, &password).await),
        Command::Logout => render(&api.logout().await),
        Command::Whoami => render(&api.current_user().await),
        Command::Accounts => render(&api.list_accounts().await),
        Command::Help => CommandResult::reply(HELP_TEXT),
        Command::Quit => CommandResult {
            status: CommandStatus::Quit,
            output: Some("Goodbye".into()),
        },
        Command::Empty => CommandResult::silent(),
        Command::Unknown(raw) => CommandResult::reply(format!(
            "Unrecognized command: {} (type HELP for usage)",
            raw
        )),
        command => handle_session_command(api, command).await,
    }
}

/// Commands that need a logged-in account.
async fn handle_session_command<S: KvStore + 'static>(
    api: &VaultApi<S>,
    command: Command,
) -> CommandResult {
    let email = match api.current_user().await.payload {
        Some(account) => account.email,
        None => return render(&ApiResponse::<()>::failure("Please login first")),
    };

    match command {
        Command::Upload { size, filename } => {
            render(&api.upload_file(&email, FileUpload::new(filename, size)).await)
        }
        Command::List => render(&api.list_files(&email).await),
        Command::Get(filename) => render(&api.download_file(&email, &filename).await),
        Command::Del(filename) => render(&api.delete_file(&email, &filename).await),
        Command::Stat(filename) => render(&api.file_details(&email, &filename).await),
        Command::Usage => render(&api.storage_usage(&email).await),
        Command::Profile => {
            let response = api.account_info(&email).await;
            match (response.ok, response.payload) {
                (true, Some(document)) => CommandResult::reply(document),
                _ => render(&ApiResponse::<()>::failure(
                    response.message.unwrap_or_else(|| "Account not found".into()),
                )),
            }
        }
        other => CommandResult::reply(format!("Unsupported command: {:?}", redact(&other))),
    }
}

fn render<T: Serialize>(response: &ApiResponse<T>) -> CommandResult {
    match serde_json::to_string_pretty(response) {
        Ok(json) => CommandResult::reply(json),
        Err(e) => CommandResult::reply(format!("Failed to render response: {}", e)),
    }
}

/// Debug form of a command with any password masked.
fn redact(command: &Command) -> String {
    match command {
        Command::Register { email, name, .. } => {
            format!("Register {{ email: {:?}, name: {:?}, password: \"***\" }}", email, name)
        }
        Command::Login { email, .. } => format!("Login {{ email: {:?}, password: \"***\" }}", email),
        other => format!("{:?}", other),
    }
}
