use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use events_board::{
    app::{AppState, FormField},
    prompt::Notice,
};

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(form) = &app.event_form else {
        return;
    };

    let area = f.size();
    let form_width = 64;
    let form_height = 12;
    let x = (area.width.saturating_sub(form_width)) / 2;
    let y = (area.height.saturating_sub(form_height)) / 2;

    let form_area = ratatui::layout::Rect {
        x,
        y,
        width: form_width.min(area.width),
        height: form_height.min(area.height),
    };

    f.render_widget(Clear, form_area);

    let active_color = app.theme.selected_bg;
    let inactive_color = Color::DarkGray;
    let label_color = |field: FormField| if form.active_field == field { active_color } else { inactive_color };

    let error_line = match &app.notice {
        Some(Notice::Error(message)) => Line::from(vec![
            Span::styled(message.clone(), Style::default().fg(app.theme.error)),
        ]),
        _ => Line::from(""),
    };

    let form_text = vec![
        Line::from(vec![Span::styled("Add Event", Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Date: ", Style::default().fg(label_color(FormField::Date))),
            Span::raw(&form.date),
            Span::styled(" (DD/MM/YYYY)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Event: ", Style::default().fg(label_color(FormField::Text))),
            Span::raw(&form.text),
        ]),
        Line::from(""),
        error_line,
        Line::from(""),
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" = Next field | "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" = Save | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" = Cancel"),
        ]),
    ];

    let form_paragraph = Paragraph::new(form_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" New Event ")
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(form_paragraph, form_area);
}
