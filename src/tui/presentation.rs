use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use events_board::{
    app::{AppState, Focus, Mode},
    prompt::Notice,
};
use crate::tui::{calendar_views, dialogs};

pub fn ui(f: &mut Frame, app: &AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .split(main_chunks[1]);

    let title_text = format!(
        "events-board - {} - {:?} Mode",
        match app.focus {
            Focus::Calendar => "Calendar",
            Focus::List => "Event List",
        },
        app.mode
    );

    let title = Paragraph::new(title_text)
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, main_chunks[0]);

    calendar_views::month::render(f, app, content_chunks[0]);
    calendar_views::event_list::render(f, app, content_chunks[1]);

    render_status(f, app, main_chunks[2]);

    if app.show_help {
        dialogs::help::render(f, app);
    }

    if app.event_form.is_some() {
        dialogs::event_form::render(f, app);
    }

    if app.pending.is_some() {
        dialogs::confirmation::render(f, app);
    }

    if app.day_details.is_some() {
        dialogs::day_details::render(f, app);
    }
}

fn render_status(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let (status_text, status_color) = if matches!(app.mode, Mode::Command) {
        (app.command_buffer.clone(), app.theme.status_bar)
    } else if let Some(notice) = &app.notice {
        let color = match notice {
            Notice::Error(_) => app.theme.error,
            Notice::Success(_) => app.theme.success,
            Notice::Info(_) => app.theme.status_bar,
        };
        (notice.message().to_string(), color)
    } else {
        (
            format!("Events: {} | Press 'q' to quit, '?' for help", app.store.len()),
            app.theme.status_bar,
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(if matches!(app.mode, Mode::Command) { Alignment::Left } else { Alignment::Center })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}
