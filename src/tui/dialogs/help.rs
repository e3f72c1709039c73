use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use events_board::{app::AppState, ui::theme::Theme};

pub fn render(f: &mut Frame, app: &AppState) {
    let area = f.size();
    let help_width = 60;
    let help_height = 23;
    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = ratatui::layout::Rect {
        x,
        y,
        width: help_width.min(area.width),
        height: help_height.min(area.height),
    };

    f.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(vec![Span::styled("events-board Help", Style::default().fg(app.theme.help_title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![Span::styled("Calendar:", Style::default().fg(app.theme.help_section))]),
        Line::from("  h/l      - Previous/next day"),
        Line::from("  j/k      - Next/previous week"),
        Line::from("  { } p n  - Previous/next month"),
        Line::from("  t        - Jump to today"),
        Line::from("  Enter    - Show events on selected day"),
        Line::from("  Tab      - Switch between calendar and list"),
        Line::from(""),
        Line::from(vec![Span::styled("Events:", Style::default().fg(app.theme.help_section))]),
        Line::from("  a        - Add event (Tab switches field)"),
        Line::from("  j/k      - Move through the list (list focus)"),
        Line::from("  x        - Remove selected event"),
        Line::from("  C        - Clear all events"),
        Line::from(""),
        Line::from(vec![Span::styled("Commands:", Style::default().fg(app.theme.help_section))]),
        Line::from("  :q       - Quit"),
        Line::from("  :add     - Add event (:add 24/12/2025 Market)"),
        Line::from("  :clear   - Clear all events"),
        Line::from("  :goto    - Show month (:goto 12/2025)"),
        Line::from("  :today   - Back to the current month"),
        Line::from(format!("  :theme   - {}", Theme::available_themes().join(", "))),
        Line::from("  :help    - Show this help"),
        Line::from(""),
    ];

    let visible_lines = help_height.saturating_sub(3) as usize;
    let total_lines = help_text.len();
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let scroll = app.help_scroll.min(max_scroll);

    let scrolled_text: Vec<Line> = help_text
        .into_iter()
        .skip(scroll)
        .take(visible_lines)
        .collect();

    let help_paragraph = Paragraph::new(scrolled_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!(" Help (j/k to scroll, q to close) [{}/{}] ", scroll + 1, total_lines))
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}
