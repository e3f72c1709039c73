use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use events_board::{
    app::{AppState, Focus},
    ui::month_view::WEEKDAYS,
};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = app.month_layout();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("< ", Style::default().fg(Color::DarkGray)),
            Span::styled(layout.title.clone(), Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
            Span::styled(" >", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(
            WEEKDAYS
                .iter()
                .map(|d| Span::styled(format!(" {} ", d), Style::default().fg(app.theme.weekday_header)))
                .collect::<Vec<_>>(),
        ),
    ];

    for week in layout.weeks() {
        let mut day_spans = Vec::new();

        for slot in week {
            let Some(cell) = slot else {
                day_spans.push(Span::raw("     "));
                continue;
            };

            let mut style = Style::default();
            if cell.day == app.selected_day && app.focus == Focus::Calendar {
                style = style.bg(app.theme.selected_bg).fg(app.theme.selected_fg).add_modifier(Modifier::BOLD);
            } else if cell.is_today {
                style = style.fg(app.theme.today).add_modifier(Modifier::BOLD);
            }

            day_spans.push(Span::styled(format!(" {:>2}", cell.day), style));
            day_spans.push(if cell.has_events {
                Span::styled("★ ", Style::default().fg(app.theme.event_marker))
            } else {
                Span::raw("  ")
            });
        }

        lines.push(Line::from(day_spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("hjkl", Style::default().fg(Color::Cyan)),
        Span::raw(" = Navigate | "),
        Span::styled("{ }", Style::default().fg(Color::Cyan)),
        Span::raw(" = Month | "),
        Span::styled("a", Style::default().fg(Color::Green)),
        Span::raw(" = Add event | "),
        Span::styled("Enter", Style::default().fg(Color::Green)),
        Span::raw(" = Day events"),
    ]));

    let border_style = if app.focus == Focus::Calendar {
        Style::default().fg(app.theme.title)
    } else {
        Style::default()
    };

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(content, area);
}
