//! Command deck parsing
//!
//! Parses user input in Command mode, supporting:
//! - `:q` or `:quit` → Quit
//! - `:h` or `:help` → Help
//! - `:t` or `:tokenize` → Tokenize the input buffer
//! - `:c` or `:clear` → Clear input and output
//! - `@path` → Load a text file into the input buffer
//! - `@@` → Load the clipboard into the input buffer

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Tokenize,
    Clear,
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        match cmd.trim() {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            "t" | "tokenize" => Command::Tokenize,
            "c" | "clear" => Command::Clear,
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Tokenize => AppEvent::Tokenize,
        Command::Clear => AppEvent::Clear,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_command(":h"), Command::Help);
        assert_eq!(parse_command(":help"), Command::Help);
    }

    #[test]
    fn test_parse_tokenize_and_clear() {
        assert_eq!(parse_command(":t"), Command::Tokenize);
        assert_eq!(parse_command(" :tokenize "), Command::Tokenize);
        assert_eq!(parse_command(":c"), Command::Clear);
        assert_eq!(parse_command(":clear"), Command::Clear);
    }

    #[test]
    fn test_parse_load_file() {
        assert_eq!(
            parse_command("@input.txt"),
            Command::LoadFile("input.txt".to_string())
        );
        assert_eq!(
            parse_command("@  input.txt"),
            Command::LoadFile("input.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_clipboard() {
        assert_eq!(parse_command("@@"), Command::LoadClipboard);
        assert_eq!(parse_command("@"), Command::LoadClipboard);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(parse_command(""), Command::Unknown(_)));
        assert!(matches!(parse_command("   "), Command::Unknown(_)));
        assert!(matches!(parse_command("invalid"), Command::Unknown(_)));
        assert!(matches!(parse_command(":x"), Command::Unknown(_)));
    }

    #[test]
    fn test_command_to_app_event() {
        assert_eq!(command_to_app_event(Command::Quit), AppEvent::Quit);
        assert_eq!(command_to_app_event(Command::Help), AppEvent::Help);
        assert_eq!(command_to_app_event(Command::Tokenize), AppEvent::Tokenize);
        assert_eq!(command_to_app_event(Command::Clear), AppEvent::Clear);
        assert_eq!(
            command_to_app_event(Command::LoadFile("a.txt".to_string())),
            AppEvent::LoadFile("a.txt".to_string())
        );
        assert_eq!(
            command_to_app_event(Command::LoadClipboard),
            AppEvent::LoadClipboard
        );
        assert!(matches!(
            command_to_app_event(Command::Unknown("x".to_string())),
            AppEvent::InvalidCommand(_)
        ));
    }
}
