use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use events_board::app::{AppState, PendingAction};

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(action) = &app.pending else {
        return;
    };

    let (heading, subject) = match action {
        PendingAction::Remove(id) => (
            "Remove Event?",
            app.store
                .find(*id)
                .map(|entry| format!("{}: {}", entry.event.date, entry.event.text))
                .unwrap_or_else(|| "this event".to_string()),
        ),
        PendingAction::ClearAll => ("Clear All Events?", format!("{} events", app.store.len())),
    };

    let area = f.size();
    let dialog_width = 64;
    let dialog_height = 11;
    let x = (area.width.saturating_sub(dialog_width)) / 2;
    let y = (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = ratatui::layout::Rect {
        x,
        y,
        width: dialog_width.min(area.width),
        height: dialog_height.min(area.height),
    };

    f.render_widget(Clear, dialog_area);

    let dialog_text = vec![
        Line::from(vec![Span::styled(heading, Style::default().fg(app.theme.error).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(action.question()),
        Line::from(""),
        Line::from(vec![Span::styled(subject, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Y", Style::default().fg(Color::Green)),
            Span::raw(" = Yes | "),
            Span::styled("N", Style::default().fg(Color::Red)),
            Span::raw(" = No, cancel"),
        ]),
    ];

    let dialog_paragraph = Paragraph::new(dialog_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Confirm ")
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(dialog_paragraph, dialog_area);
}
