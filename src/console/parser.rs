//! Console command parser

use super::commands::Command;

/// Parses a raw input line into a `Command`.
///
/// The keyword is case-insensitive. Filenames and names take the rest of the
/// line, so they may contain spaces.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();
    let unknown = || Command::Unknown(trimmed.to_string());

    match cmd.as_str() {
        "REGISTER" => {
            let mut args = arg.splitn(3, char::is_whitespace);
            match (args.next(), args.next(), args.next().map(str::trim)) {
                (Some(email), Some(password), Some(name)) if !email.is_empty() && !name.is_empty() => {
                    Command::Register {
                        email: email.to_string(),
                        password: password.to_string(),
                        name: name.to_string(),
                    }
                }
                _ => unknown(),
            }
        }
        "LOGIN" => {
            let mut args = arg.split_whitespace();
            match (args.next(), args.next(), args.next()) {
                (Some(email), Some(password), None) => Command::Login {
                    email: email.to_string(),
                    password: password.to_string(),
                },
                _ => unknown(),
            }
        }
        "UPLOAD" => {
            let mut args = arg.splitn(2, char::is_whitespace);
            let size = args.next().and_then(|s| s.parse::<u64>().ok());
            let filename = args.next().map(str::trim).unwrap_or("");
            match size {
                Some(size) if !filename.is_empty() => Command::Upload {
                    size,
                    filename: filename.to_string(),
                },
                _ => unknown(),
            }
        }
        "GET" if !arg.is_empty() => Command::Get(arg.to_string()),
        "DEL" if !arg.is_empty() => Command::Del(arg.to_string()),
        "STAT" if !arg.is_empty() => Command::Stat(arg.to_string()),
        "LOGOUT" => Command::Logout,
        "WHOAMI" => Command::Whoami,
        "LIST" | "LS" => Command::List,
        "USAGE" => Command::Usage,
        "PROFILE" => Command::Profile,
        "ACCOUNTS" => Command::Accounts,
        "HELP" | "?" => Command::Help,
        "QUIT" | "Q" | "EXIT" => Command::Quit,
        _ => unknown(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("QUIT"), Command::Quit);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("list"), Command::List);
        assert_eq!(parse_command("LOGOUT"), Command::Logout);
        assert_eq!(parse_command("usage"), Command::Usage);
        assert_eq!(parse_command("   "), Command::Empty);
    }

    #[test]
    fn test_parse_register_and_login() {
        assert_eq!(
            parse_command("REGISTER ann@example.com pw Ann Lee"),
            Command::Register {
                email: "ann@example.com".into(),
                password: "pw".into(),
                name: "Ann Lee".into(),
            }
        );
        assert_eq!(
            parse_command("login ann@example.com pw"),
            Command::Login {
                email: "ann@example.com".into(),
                password: "pw".into(),
            }
        );
        assert_eq!(
            parse_command("LOGIN ann@example.com"),
            Command::Unknown("LOGIN ann@example.com".into())
        );
        assert_eq!(
            parse_command("REGISTER ann@example.com pw"),
            Command::Unknown("REGISTER ann@example.com pw".into())
        );
    }

    #[test]
    fn test_parse_file_commands() {
        assert_eq!(
            parse_command("UPLOAD 1536 my report.pdf"),
            Command::Upload {
                size: 1536,
                filename: "my report.pdf".into(),
            }
        );
        assert_eq!(
            parse_command("GET  my report.pdf "),
            Command::Get("my report.pdf".into())
        );
        assert_eq!(parse_command("DEL a.txt"), Command::Del("a.txt".into()));
        assert_eq!(parse_command("STAT a.txt"), Command::Stat("a.txt".into()));
    }

    #[test]
    fn test_misused_commands_are_unknown() {
        assert_eq!(
            parse_command("UPLOAD big a.txt"),
            Command::Unknown("UPLOAD big a.txt".into())
        );
        assert_eq!(parse_command("UPLOAD 12"), Command::Unknown("UPLOAD 12".into()));
        assert_eq!(parse_command("GET"), Command::Unknown("GET".into()));
        assert_eq!(parse_command("FOO bar"), Command::Unknown("FOO bar".into()));
    }
}
