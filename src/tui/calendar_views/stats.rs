use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use calview::app::AppState;

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let stats = app.stats();
    let value_style = Style::default().fg(app.theme.accent).add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::raw("Total "),
            Span::styled(stats.total.to_string(), value_style),
            Span::raw("   This month "),
            Span::styled(stats.this_month.to_string(), value_style),
            Span::raw("   Today "),
            Span::styled(stats.today.to_string(), value_style),
        ]),
    ];

    let content = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Events "));
    f.render_widget(content, area);
}
