use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use calview::{app::AppState, toast::ToastKind};

const TOAST_WIDTH: u16 = 40;

/// Stacks toasts in the top-right corner, oldest first.
pub fn render(f: &mut Frame, app: &AppState) {
    let area = f.size();
    let width = TOAST_WIDTH.min(area.width);
    let mut y = area.y + 1;

    for toast in app.toasts.iter() {
        let height = if toast.description.is_some() { 4 } else { 3 };
        if y + height > area.y + area.height {
            break;
        }

        let color = match toast.kind {
            ToastKind::Info => app.theme.accent,
            ToastKind::Success => app.theme.success,
            ToastKind::Error => app.theme.error,
        };

        let mut lines = vec![Line::from(Span::styled(
            toast.title.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))];
        if let Some(description) = &toast.description {
            lines.push(Line::from(description.as_str()));
        }

        let toast_area = Rect {
            x: area.x + area.width - width,
            y,
            width,
            height,
        };
        f.render_widget(Clear, toast_area);
        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(app.theme.modal_bg)));
        f.render_widget(paragraph, toast_area);

        y += height;
    }
}
