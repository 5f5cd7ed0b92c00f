use std::collections::HashMap;

use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::app::AppState;
use crate::calendar::Event;

/// Events shown inside one day cell before the "+N more" line.
pub const MAX_VISIBLE_EVENTS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid<'a> {
    pub year: i32,
    pub month: u32,
    /// Blank cells before day 1, equal to day 1's weekday counted from Sunday.
    pub leading_blanks: u32,
    pub days: Vec<DayCell<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub events: Vec<&'a Event>,
    pub is_selected: bool,
    pub is_today: bool,
    pub is_weekend: bool,
}

impl<'a> DayCell<'a> {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            events: Vec::new(),
            is_selected: false,
            is_today: false,
            is_weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
        }
    }

    pub fn with_events(mut self, events: Vec<&'a Event>) -> Self {
        self.events = events;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn with_today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn visible_events(&self) -> &[&'a Event] {
        &self.events[..self.events.len().min(MAX_VISIBLE_EVENTS)]
    }

    pub fn overflow_count(&self) -> usize {
        self.events.len().saturating_sub(MAX_VISIBLE_EVENTS)
    }

    pub fn overflow_label(&self) -> Option<String> {
        match self.overflow_count() {
            0 => None,
            n => Some(format!("+{} more", n)),
        }
    }
}

impl<'a> MonthGrid<'a> {
    /// Rows of seven slots, Sunday first; `None` marks a blank slot.
    pub fn weeks(&self) -> Vec<Vec<Option<&DayCell<'a>>>> {
        let mut slots: Vec<Option<&DayCell<'a>>> = Vec::new();
        slots.extend((0..self.leading_blanks).map(|_| None));
        slots.extend(self.days.iter().map(Some));
        while slots.len() % 7 != 0 {
            slots.push(None);
        }
        slots.chunks(7).map(|week| week.to_vec()).collect()
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell<'a>> {
        self.days.iter().find(|cell| cell.date == date)
    }
}

pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    first_of_month(year, month)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

pub fn calculate_grid<'a>(
    year: i32,
    month: u32,
    events: &[&'a Event],
    today: NaiveDate,
    selected: NaiveDate,
) -> MonthGrid<'a> {
    let Some(first_day) = first_of_month(year, month) else {
        return MonthGrid { year, month, leading_blanks: 0, days: Vec::new() };
    };

    let mut by_date: HashMap<NaiveDate, Vec<&'a Event>> = HashMap::new();
    for event in events {
        if event.date.year() == year && event.date.month() == month {
            by_date.entry(event.date).or_default().push(*event);
        }
    }

    let days = first_day
        .iter_days()
        .take(days_in_month(year, month) as usize)
        .map(|date| {
            DayCell::new(date)
                .with_events(by_date.remove(&date).unwrap_or_default())
                .with_selected(date == selected)
                .with_today(date == today)
        })
        .collect();

    MonthGrid {
        year,
        month,
        leading_blanks: first_day.weekday().num_days_from_sunday(),
        days,
    }
}

/// Grid for the month containing the selected date, over the filtered events.
pub fn calculate_layout(state: &AppState) -> MonthGrid<'_> {
    let events = state.filtered_events();
    calculate_grid(
        state.selected_date.year(),
        state.selected_date.month(),
        &events,
        state.today,
        state.selected_date,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthStats {
    pub total: usize,
    pub this_month: usize,
    pub today: usize,
}

/// Counts over the whole collection, ignoring filters.
pub fn calculate_stats(events: &[Event], year: i32, month: u32, today: NaiveDate) -> MonthStats {
    MonthStats {
        total: events.len(),
        this_month: events
            .iter()
            .filter(|e| e.date.year() == year && e.date.month() == month)
            .count(),
        today: events.iter().filter(|e| e.date == today).count(),
    }
}
