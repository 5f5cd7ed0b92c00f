use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use calview::app::AppState;
use crate::tui::presentation::centered_rect;

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(event_id) = app.delete_confirmation_event_id else {
        return;
    };

    let event_title = app.store.get(event_id).map(|e| e.title.as_str()).unwrap_or("this event");

    let dialog_area = centered_rect(f.size(), 60, 10);

    f.render_widget(Clear, dialog_area);

    let dialog_text = vec![
        Line::from(vec![Span::styled("Delete Event?", Style::default().fg(app.theme.error).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Are you sure you want to delete "),
            Span::styled(event_title, Style::default().fg(app.theme.accent).add_modifier(Modifier::BOLD)),
            Span::raw("?"),
        ]),
        Line::from(""),
        Line::from("This action cannot be undone."),
        Line::from(""),
        Line::from(vec![
            Span::styled("Y", Style::default().fg(app.theme.success)),
            Span::raw(" = Yes, delete | "),
            Span::styled("N", Style::default().fg(app.theme.error)),
            Span::raw(" = No, cancel"),
        ]),
    ];

    let dialog_paragraph = Paragraph::new(dialog_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Confirm Delete ")
            .style(Style::default().bg(app.theme.modal_bg)))
        .alignment(Alignment::Center);

    f.render_widget(dialog_paragraph, dialog_area);
}
