use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use calview::{app::AppState, ui::theme::Theme};
use crate::tui::presentation::centered_rect;

pub fn render(f: &mut Frame, app: &AppState) {
    let help_height = 23;
    let help_area = centered_rect(f.size(), 62, help_height);

    f.render_widget(Clear, help_area);

    let section = |title: &'static str| Line::from(vec![Span::styled(title, Style::default().fg(app.theme.help_section))]);

    let help_text = vec![
        Line::from(vec![Span::styled("calview Help", Style::default().fg(app.theme.help_title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        section("Sections:"),
        Line::from("  1/2/3    - Calendar / About / Contact"),
        Line::from("  Tab      - Next section"),
        Line::from(""),
        section("Navigation:"),
        Line::from("  h/l      - Previous/next day"),
        Line::from("  j/k      - Select events (or week if no events)"),
        Line::from("  t        - Jump to today"),
        Line::from("  g/G      - First/last day of month"),
        Line::from("  { / }    - Previous/next month (also H/L)"),
        Line::from(""),
        section("Events:"),
        Line::from("  a        - Add new event"),
        Line::from("  Enter/i  - View event details"),
        Line::from("  x        - Delete (from details, asks first)"),
        Line::from(""),
        section("Filters & Themes:"),
        Line::from("  c        - Cycle category filter"),
        Line::from("  p        - Cycle priority filter"),
        Line::from("  F        - Clear filters"),
        Line::from("  T        - Next theme"),
        Line::from(""),
        section("Commands:"),
        Line::from("  :q       - Quit"),
        Line::from("  :goto    - Jump to date (:goto 2025-12-25)"),
        Line::from("  :new     - Create event (:new [title])"),
        Line::from(format!("  :theme   - Change theme ({})", Theme::KEYS.join(", "))),
        Line::from("  :category / :priority <id|all> - Filter"),
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
            .style(Style::default().bg(app.theme.modal_bg)))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}
