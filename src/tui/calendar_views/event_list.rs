use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use calview::{
    app::AppState,
    ui::{details_view::format_time_12h, theme::event_color},
};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let events = app.get_events_for_date(app.selected_date);

    let title = format!("Events on {}", app.selected_date.format("%B %-d, %Y"));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(title, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    if events.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("No events", Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("a", Style::default().fg(app.theme.success)),
            Span::raw(" = Add event"),
        ]));
    } else {
        let selected_base = Style::default().bg(app.theme.selected_bg).add_modifier(Modifier::BOLD);

        for (idx, event) in events.iter().enumerate() {
            let is_selected = idx == app.selected_event_index;

            let (time_style, title_style) = if is_selected {
                (selected_base.fg(app.theme.selected_fg), selected_base.fg(app.theme.selected_fg))
            } else {
                (Style::default().fg(app.theme.accent), Style::default())
            };

            let cursor = if is_selected { ">" } else { " " };
            let category = app.categories.lookup(&event.category);
            let priority = app.priorities.lookup(&event.priority);

            lines.push(Line::from(vec![
                Span::styled(cursor, Style::default().fg(app.theme.selected_bg)),
                Span::styled("▌", Style::default().fg(event_color(event.color))),
                Span::styled(format!("{:>8}", format_time_12h(event.time)), time_style),
                Span::raw(" "),
                Span::styled(&event.title, title_style),
            ]));

            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(category.name, Style::default().fg(event_color(category.color))),
                Span::raw(" · "),
                Span::styled(priority.name, Style::default().fg(event_color(priority.color))),
            ]));

            if !event.location.is_empty() {
                lines.push(Line::from(vec![
                    Span::raw("   @ "),
                    Span::styled(&event.location, Style::default().fg(Color::DarkGray)),
                ]));
            }

            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("j/k", Style::default().fg(app.theme.accent)),
            Span::raw(" = Select | "),
            Span::styled("Enter", Style::default().fg(app.theme.success)),
            Span::raw(" = Details | "),
            Span::styled("a", Style::default().fg(app.theme.success)),
            Span::raw(" = Add"),
        ]));
    }

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
