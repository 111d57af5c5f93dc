//! Module `commands`
//!
//! Defines the console commands and the result of running one.

/// A console command parsed from one input line.
///
/// Commands that are missing required arguments parse as `Unknown`.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Register {
        email: String,
        password: String,
        name: String,
    },
    Login {
        email: String,
        password: String,
    },
    Logout,
    Whoami,
    Upload {
        size: u64,
        filename: String,
    },
    List,
    Get(String),
    Del(String),
    Stat(String),
    Usage,
    Profile,
    Accounts,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Whether the console keeps reading after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandStatus {
    Continue,
    Quit,
}

/// Outcome of running a console command.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub output: Option<String>,
}

impl CommandResult {
    pub fn reply(output: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Continue,
            output: Some(output.into()),
        }
    }

    pub fn silent() -> Self {
        Self {
            status: CommandStatus::Continue,
            output: None,
        }
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  REGISTER <email> <password> <name...>   create an account
  LOGIN <email> <password>                start a session
  LOGOUT                                  end the session
  WHOAMI                                  show the logged-in account
  UPLOAD <size-bytes> <filename...>       store a simulated file
  LIST                                    list your files
  GET <filename...>                       download a file
  DEL <filename...>                       delete a file
  STAT <filename...>                      show file details
  USAGE                                   show storage used
  PROFILE                                 show your account information document
  ACCOUNTS                                list registered accounts
  HELP                                    show this text
  QUIT                                    leave the console";
