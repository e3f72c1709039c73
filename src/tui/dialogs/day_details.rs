use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use events_board::app::AppState;

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(details) = &app.day_details else {
        return;
    };

    let mut detail_lines = details.lines();
    let heading = detail_lines.next().unwrap_or_default();

    let mut text = vec![
        Line::from(vec![Span::styled(heading, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
    ];
    text.extend(detail_lines.map(Line::from));
    text.push(Line::from(""));
    text.push(Line::from(vec![Span::styled("Press any key to close", Style::default().fg(Color::DarkGray))]));

    let area = f.size();
    let width = 60;
    let height = (text.len() as u16 + 2).min(area.height);
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;

    let dialog_area = ratatui::layout::Rect {
        x,
        y,
        width: width.min(area.width),
        height,
    };

    f.render_widget(Clear, dialog_area);

    let paragraph = Paragraph::new(text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Events ")
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, dialog_area);
}
