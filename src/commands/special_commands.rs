//! Special commands parser for the interactive session
//!
//! Lines starting with `/` (and the bare words `exit`/`quit`) control the
//! session instead of being submitted to the active view. Commands are
//! case-insensitive; arguments such as view names keep their case.

use super::history::HistoryRef;
use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command was given an unsupported argument
    #[error("Unsupported argument for {command}: {arg}\n\nType '/help' to see valid usage")]
    UnsupportedArgument { command: String, arg: String },

    /// Command requires an argument but none was provided
    #[error("Command {command} requires an argument\n\nUsage: {usage}")]
    MissingArgument { command: String, usage: String },
}

/// Special commands that can be executed during a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Switch to a view by name; unknown names are ignored by the session
    SwitchView(String),

    /// Print the history index
    ListHistory,

    /// Reopen a history record in its detail view
    OpenHistory(HistoryRef),

    /// Save the chat in progress
    SaveChat,

    /// Leave a detail view
    Back,

    /// Generate AI usage insights from the dashboard figures
    Insights,

    /// Generate the mock investor pitch
    InvestorPitch,

    /// Write the last shown result to disk
    Export { report: bool },

    /// Display provider and session status
    ShowStatus,

    /// Display help information
    Help,

    /// Exit the interactive session
    Exit,

    /// Not a special command; submit the line to the active view
    None,
}

/// Parse a user input string into a special command
///
/// # Errors
///
/// Returns CommandError::UnknownCommand if input starts with "/" but is not a valid command.
/// Returns CommandError::UnsupportedArgument if a command receives an invalid argument.
/// Returns CommandError::MissingArgument if a command requires an argument but none was provided.
///
/// # Examples
///
/// ```
/// use marketmind::commands::special_commands::{parse_special_command, SpecialCommand};
///
/// let cmd = parse_special_command("/view Research").unwrap();
/// assert_eq!(cmd, SpecialCommand::SwitchView("Research".to_string()));
///
/// let cmd = parse_special_command("/chat").unwrap();
/// assert_eq!(cmd, SpecialCommand::SwitchView("Chat".to_string()));
///
/// let cmd = parse_special_command("what is our churn?").unwrap();
/// assert_eq!(cmd, SpecialCommand::None);
///
/// assert!(parse_special_command("/foo").is_err());
/// ```
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    if !trimmed.starts_with('/') && lower != "exit" && lower != "quit" {
        return Ok(SpecialCommand::None);
    }

    let (command, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command.to_lowercase(), rest.trim()),
        None => (lower.clone(), ""),
    };

    match command.as_str() {
        "/view" | "/go" => {
            if arg.is_empty() {
                Err(CommandError::MissingArgument {
                    command: "/view".to_string(),
                    usage: "/view <name>".to_string(),
                })
            } else {
                Ok(SpecialCommand::SwitchView(arg.to_string()))
            }
        }

        // View shorthands
        "/dashboard" | "/home" => Ok(SpecialCommand::SwitchView("Dashboard".to_string())),
        "/campaign" => Ok(SpecialCommand::SwitchView("Campaign".to_string())),
        "/sales" => Ok(SpecialCommand::SwitchView("Sales".to_string())),
        "/lead" => Ok(SpecialCommand::SwitchView("Lead".to_string())),
        "/summary" => Ok(SpecialCommand::SwitchView("Summary".to_string())),
        "/research" => Ok(SpecialCommand::SwitchView("Research".to_string())),
        "/chat" => Ok(SpecialCommand::SwitchView("Chat".to_string())),

        "/history" => Ok(SpecialCommand::ListHistory),
        "/open" => {
            if arg.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "/open".to_string(),
                    usage: "/open <t1|c1|...>".to_string(),
                });
            }
            HistoryRef::parse_str(arg)
                .map(SpecialCommand::OpenHistory)
                .map_err(|_| CommandError::UnsupportedArgument {
                    command: "/open".to_string(),
                    arg: arg.to_string(),
                })
        }

        "/save" => Ok(SpecialCommand::SaveChat),
        "/back" => Ok(SpecialCommand::Back),
        "/insights" => Ok(SpecialCommand::Insights),
        "/pitch" => Ok(SpecialCommand::InvestorPitch),

        "/export" => match arg.to_lowercase().as_str() {
            "" | "text" | "txt" => Ok(SpecialCommand::Export { report: false }),
            "report" | "md" => Ok(SpecialCommand::Export { report: true }),
            other => Err(CommandError::UnsupportedArgument {
                command: "/export".to_string(),
                arg: other.to_string(),
            }),
        },

        "/status" => Ok(SpecialCommand::ShowStatus),
        "/help" | "/?" => Ok(SpecialCommand::Help),

        "exit" | "quit" | "/exit" | "/quit" => Ok(SpecialCommand::Exit),

        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

/// Display help text for special commands
pub fn print_help() {
    println!(
        r#"
Special Commands for the MarketMind Session
===========================================

VIEWS:
  /view <name>    - Switch view (Dashboard, Campaign, Sales, Lead, Summary, Research, Chat)
  /dashboard      - Shorthand for /view Dashboard
  /campaign, /sales, /lead, /summary, /research, /chat
                  - Shorthands for the tool and chat views

INPUT:
  On a tool view, type the primary input (product, lead description,
  content, or topic). Campaign and Sales then ask for the audience or persona.
  On the Chat view, every line is a message.

HISTORY:
  /history        - List saved results, newest first
  /open <ref>     - Reopen a result, e.g. /open t1 or /open c2
  /back           - Leave a reopened result
  /save           - Save the current chat to history

DASHBOARD:
  /insights       - Ask for AI usage insights
  /pitch          - Generate a mock investor pitch

EXPORT:
  /export         - Write the last result to a text file
  /export report  - Write the last result as a Markdown report

SESSION:
  /status         - Show provider, view and history counts
  /help           - Show this help message
  exit, quit      - Leave the session
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_view_keeps_argument_case() {
        assert_eq!(
            parse_special_command("/VIEW chat-history").unwrap(),
            SpecialCommand::SwitchView("chat-history".to_string())
        );
    }

    #[test]
    fn test_parse_view_missing_argument() {
        let err = parse_special_command("/view").unwrap_err();
        assert!(matches!(err, CommandError::MissingArgument { .. }));
    }

    #[test]
    fn test_parse_view_shorthands() {
        assert_eq!(
            parse_special_command("/dashboard").unwrap(),
            SpecialCommand::SwitchView("Dashboard".to_string())
        );
        assert_eq!(
            parse_special_command("/Lead").unwrap(),
            SpecialCommand::SwitchView("Lead".to_string())
        );
    }

    #[test]
    fn test_parse_open() {
        assert_eq!(
            parse_special_command("/open t2").unwrap(),
            SpecialCommand::OpenHistory(HistoryRef::Tool(2))
        );
        assert!(matches!(
            parse_special_command("/open").unwrap_err(),
            CommandError::MissingArgument { .. }
        ));
        assert!(matches!(
            parse_special_command("/open z9").unwrap_err(),
            CommandError::UnsupportedArgument { .. }
        ));
    }

    #[test]
    fn test_parse_export_variants() {
        assert_eq!(
            parse_special_command("/export").unwrap(),
            SpecialCommand::Export { report: false }
        );
        assert_eq!(
            parse_special_command("/export report").unwrap(),
            SpecialCommand::Export { report: true }
        );
        assert!(parse_special_command("/export pdf").is_err());
    }

    #[test]
    fn test_parse_session_commands() {
        assert_eq!(parse_special_command("/save").unwrap(), SpecialCommand::SaveChat);
        assert_eq!(parse_special_command("/back").unwrap(), SpecialCommand::Back);
        assert_eq!(parse_special_command("/pitch").unwrap(), SpecialCommand::InvestorPitch);
        assert_eq!(parse_special_command("/insights").unwrap(), SpecialCommand::Insights);
        assert_eq!(parse_special_command("/status").unwrap(), SpecialCommand::ShowStatus);
        assert_eq!(parse_special_command("/?").unwrap(), SpecialCommand::Help);
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse_special_command("exit").unwrap(), SpecialCommand::Exit);
        assert_eq!(parse_special_command("QUIT").unwrap(), SpecialCommand::Exit);
        assert_eq!(parse_special_command("/quit").unwrap(), SpecialCommand::Exit);
    }

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(
            parse_special_command("exit strategy for SaaS").unwrap(),
            SpecialCommand::None
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_special_command("/mode write").unwrap_err(),
            CommandError::UnknownCommand("/mode".to_string())
        );
    }
}
