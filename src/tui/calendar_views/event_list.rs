use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use events_board::{
    app::{AppState, Focus},
    ui::event_list::EventListView,
};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Upcoming Events", Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    match app.event_list() {
        EventListView::Placeholder(message) => {
            lines.push(Line::from(vec![
                Span::styled(message, Style::default().fg(app.theme.placeholder)),
            ]));
        }
        EventListView::Rows(rows) => {
            let list_focused = app.focus == Focus::List;
            let selected_base = Style::default().bg(app.theme.selected_bg).add_modifier(Modifier::BOLD);

            for (idx, row) in rows.iter().enumerate() {
                let is_selected = list_focused && idx == app.selected_row;

                let (date_style, text_style) = if is_selected {
                    (selected_base.fg(app.theme.selected_fg), selected_base.fg(app.theme.selected_fg))
                } else {
                    (Style::default().fg(app.theme.list_date), Style::default())
                };

                let cursor = if is_selected { ">" } else { " " };

                lines.push(Line::from(vec![
                    Span::styled(cursor, Style::default().fg(app.theme.selected_bg)),
                    Span::styled(row.date.clone(), date_style),
                    Span::styled(": ", text_style),
                    Span::styled(row.text.clone(), text_style),
                ]));
            }

            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Tab", Style::default().fg(Color::Cyan)),
                Span::raw(" = Focus | "),
                Span::styled("x", Style::default().fg(Color::Red)),
                Span::raw(" = Remove | "),
                Span::styled("C", Style::default().fg(Color::Red)),
                Span::raw(" = Clear all"),
            ]));
        }
    }

    let border_style = if app.focus == Focus::List {
        Style::default().fg(app.theme.title)
    } else {
        Style::default()
    };

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(content, area);
}
