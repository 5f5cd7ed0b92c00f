use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use calview::{
    app::AppState,
    calendar::{DEFAULT_CATEGORY, DEFAULT_PRIORITY},
    form::{EventForm, FormField},
    ui::theme::event_color,
};
use crate::tui::presentation::centered_rect;

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(form) = &app.event_form else {
        return;
    };

    let form_height = 2 * FormField::ORDER.len() as u16 + form.errors.len() as u16 + 5;
    let form_area = centered_rect(f.size(), 70, form_height);

    f.render_widget(Clear, form_area);

    let active_color = app.theme.selected_bg;
    let inactive_color = Color::DarkGray;

    let mut form_text = vec![
        Line::from(vec![Span::styled("Create New Event", Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
    ];

    for field in FormField::ORDER {
        let is_active = form.active_field == field;
        let label_style = Style::default().fg(if is_active { active_color } else { inactive_color });

        let mut spans = vec![Span::styled(format!("{}: ", field.label()), label_style)];
        spans.extend(field_value(app, form, field, is_active));
        if is_active && !field.is_selector() {
            spans.push(Span::styled("_", Style::default().fg(active_color)));
        }
        form_text.push(Line::from(spans));

        if let Some(error) = form.error_for(field) {
            form_text.push(Line::from(Span::styled(format!("  {}", error), Style::default().fg(app.theme.error))));
        }
        form_text.push(Line::from(""));
    }

    form_text.push(Line::from(vec![
        Span::styled("Tab", Style::default().fg(app.theme.accent)),
        Span::raw(" = Next field | "),
        Span::styled("←/→", Style::default().fg(app.theme.accent)),
        Span::raw(" = Choose | "),
        Span::styled("Enter", Style::default().fg(app.theme.success)),
        Span::raw(" = Create | "),
        Span::styled("Esc", Style::default().fg(app.theme.error)),
        Span::raw(" = Cancel"),
    ]));

    let form_paragraph = Paragraph::new(form_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" New Event ")
            .style(Style::default().bg(app.theme.modal_bg)))
        .alignment(Alignment::Left);

    f.render_widget(form_paragraph, form_area);
}

fn field_value<'a>(app: &'a AppState, form: &'a EventForm, field: FormField, is_active: bool) -> Vec<Span<'a>> {
    let hint_style = Style::default().fg(Color::DarkGray);
    match field {
        FormField::Title => vec![Span::raw(form.title.as_str())],
        FormField::Date => vec![
            Span::raw(form.date.as_str()),
            Span::styled(if is_active { " (YYYY-MM-DD)" } else { "" }, hint_style),
        ],
        FormField::Time => vec![
            Span::raw(form.time.as_str()),
            Span::styled(if is_active { " (HH:MM)" } else { "" }, hint_style),
        ],
        FormField::Duration => vec![Span::raw(form.duration.as_str())],
        FormField::Color => selector(form.color.label().to_string(), event_color(form.color), is_active),
        FormField::Category => {
            let item = app.categories.lookup(form.category.as_deref().unwrap_or(DEFAULT_CATEGORY));
            selector(item.name, event_color(item.color), is_active)
        }
        FormField::Priority => {
            let item = app.priorities.lookup(form.priority.as_deref().unwrap_or(DEFAULT_PRIORITY));
            selector(item.name, event_color(item.color), is_active)
        }
        FormField::Location => vec![Span::raw(form.location.as_str())],
        FormField::Attendees => vec![
            Span::raw(form.attendees.as_str()),
            Span::styled(if is_active { " (comma separated)" } else { "" }, hint_style),
        ],
        FormField::Description => vec![Span::raw(form.description.as_str())],
    }
}

fn selector(name: String, color: Color, is_active: bool) -> Vec<Span<'static>> {
    let arrows = Style::default().fg(if is_active { Color::White } else { Color::DarkGray });
    vec![
        Span::styled("◀ ", arrows),
        Span::styled("● ", Style::default().fg(color)),
        Span::raw(name),
        Span::styled(" ▶", arrows),
    ]
}
