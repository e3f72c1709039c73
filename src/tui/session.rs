use std::io;
use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use events_board::{
    app::{AppState, Mode},
    input::{command_mode, insert_mode, normal_mode},
    prompt::{AnsweredPrompt, Notice},
    storage::EventStore,
    ui::theme::Theme,
};
use crate::tui::presentation::ui;

pub fn run_tui(store: EventStore, theme: Theme) -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new(store).with_theme(theme);

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("TUI loop failed: {}", err);
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        app.today = chrono::Local::now().date_naive();
        terminal.draw(|f| ui(f, app))?;

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match app.mode {
                Mode::Normal => {
                    if app.show_help {
                        handle_help_keys(key.code, app);
                    } else if key.code == KeyCode::Char('q') && app.day_details.is_none() {
                        return Ok(());
                    } else {
                        normal_mode::handle_key(key.code, app);
                    }
                }
                Mode::Command => {
                    if handle_command_mode(key.code, app) {
                        return Ok(());
                    }
                }
                Mode::Insert => handle_insert_mode(key.code, app),
                Mode::Confirm => handle_confirmation(key.code, app),
            }
        }
    }
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Esc => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        _ => {}
    }
}

fn handle_command_mode(code: KeyCode, app: &mut AppState) -> bool {
    match code {
        KeyCode::Enter => {
            let command_text = std::mem::take(&mut app.command_buffer);
            app.mode = Mode::Normal;

            match command_mode::parse_command(&command_text) {
                command_mode::Command::Quit => return true,
                command_mode::Command::Add { date, text } => {
                    let mut prompt = AnsweredPrompt::accepted();
                    app.add_event(&date, &text, &mut prompt);
                    app.notice = prompt.last_notice();
                }
                command_mode::Command::Clear => app.request_clear(),
                command_mode::Command::Goto(cursor) => app.goto_month(cursor),
                command_mode::Command::Today => app.jump_to_today(),
                command_mode::Command::Help => app.show_help = true,
                command_mode::Command::Theme(theme_name) => app.switch_theme(&theme_name),
                command_mode::Command::Error(message) => {
                    app.notice = Some(Notice::Error(message));
                }
            }
            false
        }
        KeyCode::Esc => {
            app.command_buffer.clear();
            app.mode = Mode::Normal;
            false
        }
        KeyCode::Backspace => {
            app.command_buffer.pop();
            if app.command_buffer.is_empty() {
                app.mode = Mode::Normal;
            }
            false
        }
        KeyCode::Char(c) => {
            app.command_buffer.push(c);
            false
        }
        _ => false,
    }
}

fn handle_insert_mode(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Esc => app.close_form(),
        KeyCode::Enter => {
            let mut prompt = AnsweredPrompt::accepted();
            app.submit_form(&mut prompt);
            app.notice = prompt.last_notice();
        }
        _ => insert_mode::handle_key(code, app),
    }
}

fn handle_confirmation(code: KeyCode, app: &mut AppState) {
    let mut prompt = match code {
        KeyCode::Char('y') | KeyCode::Char('Y') => AnsweredPrompt::accepted(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => AnsweredPrompt::rejected(),
        _ => return,
    };
    app.resolve_pending(&mut prompt);
    app.notice = prompt.last_notice();
}
