use std::io::{self, BufRead, Write};

pub const REMOVE_QUESTION: &str = "Are you sure you want to remove this event?";
pub const CLEAR_QUESTION: &str =
    "Are you sure you want to clear all events? This action cannot be undone.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
    Info(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Error(m) | Notice::Info(m) => m,
        }
    }
}

/// Yes/no gate and message sink for destructive or noteworthy actions.
#[cfg_attr(test, mockall::automock)]
pub trait Prompt {
    fn confirm(&mut self, question: &str) -> bool;
    fn notify(&mut self, notice: Notice);
}

/// Replays an answer the user already gave in a dialog and keeps the notices
/// raised while acting on it.
#[derive(Debug, Default)]
pub struct AnsweredPrompt {
    answer: bool,
    pub notices: Vec<Notice>,
}

impl AnsweredPrompt {
    pub fn accepted() -> Self {
        Self { answer: true, notices: Vec::new() }
    }

    pub fn rejected() -> Self {
        Self { answer: false, notices: Vec::new() }
    }

    pub fn last_notice(self) -> Option<Notice> {
        self.notices.into_iter().last()
    }
}

impl Prompt for AnsweredPrompt {
    fn confirm(&mut self, _question: &str) -> bool {
        self.answer
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Line-based prompt for the one-shot command-line modes.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(assume_yes: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), assume_yes)
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W, assume_yes: bool) -> Self {
        Self { input, output, assume_yes }
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn confirm(&mut self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if write!(self.output, "{} [y/N] ", question).and_then(|_| self.output.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"),
            Err(e) => {
                tracing::warn!("Could not read confirmation: {}", e);
                false
            }
        }
    }

    fn notify(&mut self, notice: Notice) {
        let prefix = match notice {
            Notice::Error(_) => "Error: ",
            _ => "",
        };
        if let Err(e) = writeln!(self.output, "{}{}", prefix, notice.message()) {
            tracing::warn!("Could not print notice: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_prompt_accepts_y() {
        let mut out = Vec::new();
        let mut prompt = TerminalPrompt::new("y\n".as_bytes(), &mut out, false);

        assert!(prompt.confirm(REMOVE_QUESTION));
        drop(prompt);
        assert!(String::from_utf8(out).unwrap().contains("[y/N]"));
    }

    #[test]
    fn terminal_prompt_defaults_to_no() {
        let mut prompt = TerminalPrompt::new("\n".as_bytes(), Vec::new(), false);
        assert!(!prompt.confirm(CLEAR_QUESTION));
    }

    #[test]
    fn assume_yes_skips_reading() {
        let mut prompt = TerminalPrompt::new("".as_bytes(), Vec::new(), true);
        assert!(prompt.confirm(CLEAR_QUESTION));
    }

    #[test]
    fn errors_are_prefixed() {
        let mut out = Vec::new();
        TerminalPrompt::new("".as_bytes(), &mut out, false)
            .notify(Notice::Error("bad date".to_string()));
        assert_eq!(String::from_utf8(out).unwrap(), "Error: bad date\n");
    }

    #[test]
    fn answered_prompt_keeps_last_notice() {
        let mut prompt = AnsweredPrompt::accepted();
        prompt.notify(Notice::Info("first".to_string()));
        prompt.notify(Notice::Success("second".to_string()));

        assert_eq!(prompt.last_notice(), Some(Notice::Success("second".to_string())));
    }
}
