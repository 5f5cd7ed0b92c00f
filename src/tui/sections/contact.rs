use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use calview::{
    app::{AppState, Mode},
    contact::ContactField,
};

const BUSINESS_HOURS: [(&str, &str); 3] = [
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 4:00 PM"),
    ("Sunday", "Closed"),
];

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    render_form(f, app, chunks[0]);
    render_hours(f, app, chunks[1]);
}

fn render_form(f: &mut Frame, app: &AppState, area: Rect) {
    let form = &app.contact_form;
    let editing = app.mode == Mode::Insert;
    let active_color = app.theme.selected_bg;
    let inactive_color = Color::DarkGray;

    let mut lines = vec![
        Line::from(Span::styled("Send us a message", Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];

    for field in ContactField::ORDER {
        let is_active = editing && form.active_field == field;
        let value = form.value(field);
        let mut spans = vec![
            Span::styled(
                format!("{}: ", field.label()),
                Style::default().fg(if is_active { active_color } else { inactive_color }),
            ),
            Span::raw(value.to_string()),
        ];
        if is_active {
            spans.push(Span::styled("_", Style::default().fg(active_color)));
        }
        lines.push(Line::from(spans));

        if let Some(error) = form.error_for(field) {
            lines.push(Line::from(Span::styled(format!("  {}", error), Style::default().fg(app.theme.error))));
        }
        lines.push(Line::from(""));
    }

    let hint = if form.submitting {
        Line::from(Span::styled("Sending...", Style::default().fg(app.theme.accent).add_modifier(Modifier::ITALIC)))
    } else if editing {
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(app.theme.accent)),
            Span::raw(" = Next field | "),
            Span::styled("Enter", Style::default().fg(app.theme.success)),
            Span::raw(" = Send | "),
            Span::styled("Esc", Style::default().fg(app.theme.error)),
            Span::raw(" = Stop editing"),
        ])
    } else {
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(app.theme.success)),
            Span::raw(" = Start writing"),
        ])
    };
    lines.push(hint);

    let mut block_style = Style::default();
    if form.submitting {
        block_style = block_style.add_modifier(Modifier::DIM);
    }

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Contact ").style(block_style));
    f.render_widget(content, area);
}

fn render_hours(f: &mut Frame, app: &AppState, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled("Business Hours", Style::default().fg(app.theme.help_section).add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];
    for (days, hours) in BUSINESS_HOURS {
        lines.push(Line::from(vec![
            Span::raw(format!("{:<16}", days)),
            Span::styled(hours, Style::default().fg(app.theme.accent)),
        ]));
    }

    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
