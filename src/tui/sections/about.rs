use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use calview::app::AppState;

const FEATURES: [(&str, &str); 4] = [
    ("Month calendar", "A month grid with day-by-day navigation and a list of the selected day's events."),
    ("Event management", "Create events with a validated form, view their details and delete them after confirmation."),
    ("Filters", "Narrow the calendar to one category or one priority at a time."),
    ("Themes", "Five color themes. The chosen theme is remembered between runs."),
];

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let heading = Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD);
    let section = Style::default().fg(app.theme.help_section).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled("About calview", heading)),
        Line::from(""),
        Line::from("A terminal calendar for keeping track of events and your schedule."),
        Line::from(""),
    ];

    for (title, description) in FEATURES {
        lines.push(Line::from(Span::styled(title, section)));
        lines.push(Line::from(format!("  {}", description)));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("Data", section)));
    lines.push(Line::from(
        "  Events live in memory for the session. Only the theme preference is written to disk.",
    ));

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" About "));
    f.render_widget(content, area);
}
