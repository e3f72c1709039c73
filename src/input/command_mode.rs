use crate::calendar::MonthCursor;

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Add { date: String, text: String },
    Clear,
    Goto(MonthCursor),
    Today,
    Theme(String),
    Help,
    Error(String),
}

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(command_text) = trimmed.strip_prefix(':') else {
        return Command::Error("Commands must start with ':'".to_string());
    };

    let parts: Vec<&str> = command_text.split_whitespace().collect();

    if parts.is_empty() {
        return Command::Error("Empty command".to_string());
    }

    match parts[0] {
        "q" | "quit" => Command::Quit,
        "help" => Command::Help,
        "clear" => Command::Clear,
        "today" => Command::Today,
        "add" => match add_arguments(input) {
            Some((date, text)) => Command::Add {
                date: date.to_string(),
                text: text.to_string(),
            },
            None => Command::Error("add requires a date and a description".to_string()),
        },
        "goto" => {
            if parts.len() < 2 {
                Command::Error("goto requires a month argument".to_string())
            } else if let Some(cursor) = parse_month(parts[1]) {
                Command::Goto(cursor)
            } else {
                Command::Error(format!("Invalid month: {} (use MM/YYYY)", parts[1]))
            }
        }
        "theme" => {
            if parts.len() < 2 {
                Command::Error("theme requires a theme name".to_string())
            } else {
                Command::Theme(parts[1].to_string())
            }
        }
        _ => Command::Error(format!("Unknown command: {}", parts[0])),
    }
}

// Description is the raw rest of the line after the single separator that
// follows the date.
fn add_arguments(input: &str) -> Option<(&str, &str)> {
    let rest = input.trim_start().strip_prefix(':')?.trim_start().strip_prefix("add")?;
    let (date, text) = rest.trim_start().split_once(char::is_whitespace)?;
    (!text.trim().is_empty()).then_some((date, text))
}

/// `MM/YYYY`
pub fn parse_month(input: &str) -> Option<MonthCursor> {
    let (month, year) = input.split_once('/')?;
    MonthCursor::new(year.parse().ok()?, month.parse().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_command() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn parse_add_keeps_multi_word_text() {
        let cmd = parse_command(":add 24/12/2025 Christmas market opens");
        assert_eq!(
            cmd,
            Command::Add {
                date: "24/12/2025".to_string(),
                text: "Christmas market opens".to_string(),
            }
        );
    }

    #[test]
    fn parse_add_preserves_inner_spacing() {
        let cmd = parse_command(":add 24/12/2025 Two  spaces\tand a tab");
        assert_eq!(
            cmd,
            Command::Add {
                date: "24/12/2025".to_string(),
                text: "Two  spaces\tand a tab".to_string(),
            }
        );
    }

    #[test]
    fn parse_add_keeps_edge_whitespace_of_text() {
        let cmd = parse_command(":  add   24/12/2025   Market ");
        assert_eq!(
            cmd,
            Command::Add {
                date: "24/12/2025".to_string(),
                text: "  Market ".to_string(),
            }
        );
    }

    #[test]
    fn parse_add_with_blank_text_returns_error() {
        assert!(matches!(parse_command(":add 24/12/2025    "), Command::Error(_)));
    }

    #[test]
    fn add_does_not_validate_date_itself() {
        let cmd = parse_command(":add 2025-12-24 Market");
        assert!(matches!(cmd, Command::Add { .. }));
    }

    #[test]
    fn parse_add_without_text_returns_error() {
        assert!(matches!(parse_command(":add 24/12/2025"), Command::Error(_)));
        assert!(matches!(parse_command(":add"), Command::Error(_)));
    }

    #[test]
    fn parse_goto_month() {
        let cmd = parse_command(":goto 02/2024");
        assert_eq!(cmd, Command::Goto(MonthCursor::new(2024, 2).unwrap()));
    }

    #[test]
    fn parse_goto_with_invalid_month_returns_error() {
        assert!(matches!(parse_command(":goto 13/2024"), Command::Error(_)));
        assert!(matches!(parse_command(":goto 2024"), Command::Error(_)));
        assert!(matches!(parse_command(":goto"), Command::Error(_)));
    }

    #[test]
    fn parse_clear_and_today() {
        assert_eq!(parse_command(":clear"), Command::Clear);
        assert_eq!(parse_command(":today"), Command::Today);
    }

    #[test]
    fn parse_theme_command() {
        assert_eq!(parse_command(":theme nord"), Command::Theme("nord".to_string()));
    }

    #[test]
    fn parse_unknown_command_returns_error() {
        assert!(matches!(parse_command(":unknown"), Command::Error(_)));
    }

    #[test]
    fn parse_command_without_colon_returns_error() {
        assert!(matches!(parse_command("quit"), Command::Error(_)));
    }

    #[test]
    fn parse_empty_command_returns_error() {
        assert!(matches!(parse_command(":"), Command::Error(_)));
    }
}
