use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use chrono::{Datelike, NaiveDate};
use calview::{
    app::AppState,
    ui::{month_view::{self, DayCell}, theme::event_color},
};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let grid = month_view::calculate_layout(app);

    let month_name = NaiveDate::from_ymd_opt(grid.year, grid.month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{:02}", grid.year, grid.month));
    let title = if app.filter.is_active() {
        format!(" {} (filtered) ", month_name)
    } else {
        format!(" {} ", month_name)
    };

    let mut block_style = Style::default();
    if app.month_transition.is_some() {
        block_style = block_style.add_modifier(Modifier::DIM);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)))
        .style(block_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let weeks = grid.weeks();
    let mut row_constraints = vec![Constraint::Length(1)];
    row_constraints.extend(weeks.iter().map(|_| Constraint::Ratio(1, weeks.len().max(1) as u32)));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(inner);

    let header_cells = split_columns(rows[0]);
    for (name, cell_area) in WEEKDAYS.iter().zip(header_cells.iter()) {
        let header = Paragraph::new(*name).style(Style::default().fg(app.theme.weekday_header).add_modifier(Modifier::BOLD));
        f.render_widget(header, *cell_area);
    }

    for (week, row_area) in weeks.iter().zip(rows.iter().skip(1)) {
        for (slot, cell_area) in week.iter().zip(split_columns(*row_area).iter()) {
            match slot {
                Some(cell) => render_day(f, app, cell, *cell_area),
                None => {
                    let blank = Paragraph::new("").style(Style::default().bg(app.theme.blank_cell));
                    f.render_widget(blank, *cell_area);
                }
            }
        }
    }
}

fn split_columns(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 7); 7])
        .split(area)
        .to_vec()
}

fn render_day(f: &mut Frame, app: &AppState, cell: &DayCell, area: Rect) {
    let width = area.width.saturating_sub(1) as usize;

    let mut number_style = Style::default();
    if cell.is_selected {
        number_style = number_style.bg(app.theme.selected_bg).fg(app.theme.selected_fg).add_modifier(Modifier::BOLD);
    } else if cell.is_today {
        number_style = number_style.fg(app.theme.today).add_modifier(Modifier::BOLD);
    } else if cell.is_weekend {
        number_style = number_style.fg(app.theme.weekend);
    }

    let mut number = format!("{:>2}", cell.date.day());
    if cell.is_today {
        number.push_str(" •");
    }
    let mut lines = vec![Line::from(Span::styled(number, number_style))];

    for event in cell.visible_events() {
        let text: String = event.title.chars().take(width.saturating_sub(2)).collect();
        lines.push(Line::from(vec![
            Span::styled("▌", Style::default().fg(event_color(event.color))),
            Span::raw(text),
        ]));
    }

    if let Some(more) = cell.overflow_label() {
        lines.push(Line::from(Span::styled(more, Style::default().fg(app.theme.accent).add_modifier(Modifier::ITALIC))));
    }

    let mut paragraph = Paragraph::new(lines);
    if cell.is_selected {
        paragraph = paragraph.block(Block::default().borders(Borders::LEFT).border_style(Style::default().fg(app.theme.selected_bg)));
    }
    f.render_widget(paragraph, area);
}
