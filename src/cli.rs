use std::{
    env,
    io::{self, Write},
    process::{Command, Stdio},
};

use anyhow::Context;

use events_board::{
    app::AppState,
    input::command_mode::parse_month,
    prompt::TerminalPrompt,
    storage::EventStore,
    MonthCursor,
};

pub const USAGE: &str =
    "Usage: events-board [--list | --month [MM/YYYY] | --add DD/MM/YYYY TEXT... | --clear [--yes]]";

#[derive(Debug, Clone, PartialEq)]
pub enum CliMode {
    Tui,
    List,
    Month(Option<MonthCursor>),
    Add { date: String, text: String },
    Clear { assume_yes: bool },
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    parse_args(env::args().skip(1))
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<CliMode, String> {
    let mut mode = CliMode::Tui;
    let mut assume_yes = false;
    let mut args = args.peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--list" => mode = CliMode::List,
            "--month" => {
                let cursor = match args.peek() {
                    Some(next) if !next.starts_with("--") => {
                        let value = args.next().unwrap_or_default();
                        Some(parse_month(&value)
                            .ok_or_else(|| format!("Invalid month '{}'. Use MM/YYYY.", value))?)
                    }
                    _ => None,
                };
                mode = CliMode::Month(cursor);
            }
            "--add" => {
                let date = args.next().ok_or("--add requires a date")?;
                let mut words = Vec::new();
                while let Some(next) = args.peek() {
                    if next.starts_with("--") {
                        break;
                    }
                    words.extend(args.next());
                }
                mode = CliMode::Add { date, text: words.join(" ") };
            }
            "--clear" => mode = CliMode::Clear { assume_yes: false },
            "--yes" | "-y" => assume_yes = true,
            "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    if let CliMode::Clear { .. } = mode {
        mode = CliMode::Clear { assume_yes };
    }
    Ok(mode)
}

/// Runs a one-shot mode against the store. Returns `false` when the action
/// was rejected so the caller can set the exit status.
pub fn run_cli_mode(mode: CliMode, store: EventStore) -> anyhow::Result<bool> {
    let mut app = AppState::new(store);

    match mode {
        CliMode::Tui => Ok(true),
        CliMode::List => {
            display_with_pager(&app.event_list().render_text())?;
            Ok(true)
        }
        CliMode::Month(cursor) => {
            if let Some(cursor) = cursor {
                app.goto_month(cursor);
            }
            let text = format!(
                "{}\n\n{}",
                app.month_layout().render_text(),
                app.event_list().render_text()
            );
            display_with_pager(&text)?;
            Ok(true)
        }
        CliMode::Add { date, text } => {
            let mut prompt = TerminalPrompt::stdio(false);
            Ok(app.add_event(&date, &text, &mut prompt))
        }
        CliMode::Clear { assume_yes } => {
            let mut prompt = TerminalPrompt::stdio(assume_yes);
            Ok(app.clear_events(&mut prompt))
        }
    }
}

fn display_with_pager(text: &str) -> anyhow::Result<()> {
    let pager_value = env::var("PAGER").unwrap_or_else(|_| "less".to_string());
    let mut parts = pager_value.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => {
            println!("{text}");
            return Ok(());
        }
    };
    let args: Vec<&str> = parts.collect();

    match Command::new(cmd)
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin
                    .write_all(text.as_bytes())
                    .context("Failed to write to pager")?;
            }
            let _ = child.wait();
        }
        Err(e) => {
            tracing::debug!("Pager '{}' unavailable: {}", cmd, e);
            let mut stdout = io::stdout();
            writeln!(stdout, "{text}")?;
        }
    }

    Ok(())
}
