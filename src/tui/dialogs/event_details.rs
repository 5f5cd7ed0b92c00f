use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use calview::{
    app::AppState,
    ui::{details_view::{build_event_details, DetailSection}, theme::event_color},
};
use crate::tui::presentation::centered_rect;

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(event) = app.details_event() else {
        return;
    };

    let details = build_event_details(event, &app.categories, &app.priorities);
    let label_style = Style::default().fg(app.theme.help_section).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(event_color(details.color))),
            Span::styled(details.title.clone(), Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    for section in &details.sections {
        match section {
            DetailSection::Badges { category, priority } => {
                lines.push(Line::from(vec![
                    Span::styled(format!(" {} ", category.0), Style::default().fg(Color::Black).bg(event_color(category.1))),
                    Span::raw("  "),
                    Span::styled(format!(" {} ", priority.0), Style::default().fg(Color::Black).bg(event_color(priority.1))),
                ]));
            }
            DetailSection::Date(date) => {
                lines.push(Line::from(vec![Span::styled("Date: ", label_style), Span::raw(date.as_str())]));
            }
            DetailSection::Time { start, end, duration } => {
                let text = match end {
                    Some(end) => format!("{} - {} ({})", start, end, duration),
                    None => format!("{} ({})", start, duration),
                };
                lines.push(Line::from(vec![Span::styled("Time: ", label_style), Span::raw(text)]));
            }
            DetailSection::Location(location) => {
                lines.push(Line::from(vec![Span::styled("Location: ", label_style), Span::raw(location.as_str())]));
            }
            DetailSection::Attendees(attendees) => {
                lines.push(Line::from(Span::styled(format!("Attendees ({}):", attendees.len()), label_style)));
                lines.extend(attendees.iter().map(|a| Line::from(format!("  • {}", a))));
            }
            DetailSection::Description(description) => {
                lines.push(Line::from(Span::styled("Description:", label_style)));
                lines.extend(description.lines().map(|l| Line::from(format!("  {}", l))));
            }
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("x", Style::default().fg(app.theme.error)),
        Span::raw(" = Delete | "),
        Span::styled("Esc", Style::default().fg(app.theme.accent)),
        Span::raw(" = Close"),
    ]));

    let height = lines.len() as u16 + 2;
    let area = centered_rect(f.size(), 64, height);
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Event Details ")
            .border_style(Style::default().fg(event_color(details.color)))
            .style(Style::default().bg(app.theme.modal_bg)))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}
