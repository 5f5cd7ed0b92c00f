use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::calendar::{
    EventColor, EventDraft, ReferenceList, DEFAULT_CATEGORY, DEFAULT_PRIORITY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Date,
    Time,
    Duration,
    Color,
    Category,
    Priority,
    Location,
    Attendees,
    Description,
}

impl FormField {
    pub const ORDER: [FormField; 10] = [
        FormField::Title,
        FormField::Date,
        FormField::Time,
        FormField::Duration,
        FormField::Color,
        FormField::Category,
        FormField::Priority,
        FormField::Location,
        FormField::Attendees,
        FormField::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Date => "Date",
            FormField::Time => "Time",
            FormField::Duration => "Duration (min)",
            FormField::Color => "Color",
            FormField::Category => "Category",
            FormField::Priority => "Priority",
            FormField::Location => "Location",
            FormField::Attendees => "Attendees",
            FormField::Description => "Description",
        }
    }

    /// Selector fields are changed with Left/Right instead of typing.
    pub fn is_selector(self) -> bool {
        matches!(self, FormField::Color | FormField::Category | FormField::Priority)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Date is required")]
    DateRequired,
    #[error("Date must be YYYY-MM-DD")]
    InvalidDate,
    #[error("Time is required")]
    TimeRequired,
    #[error("Time must be HH:MM")]
    InvalidTime,
    #[error("Duration must be positive")]
    NegativeDuration,
    #[error("Duration must be a whole number of minutes")]
    InvalidDuration,
}

impl ValidationError {
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::TitleRequired => FormField::Title,
            ValidationError::DateRequired | ValidationError::InvalidDate => FormField::Date,
            ValidationError::TimeRequired | ValidationError::InvalidTime => FormField::Time,
            ValidationError::NegativeDuration | ValidationError::InvalidDuration => FormField::Duration,
        }
    }
}

/// The event creation dialog's state. Text fields hold exactly what was
/// typed; parsing happens on submit.
#[derive(Debug, Clone)]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub color: EventColor,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub location: String,
    pub attendees: String,
    pub description: String,
    pub active_field: FormField,
    pub errors: Vec<ValidationError>,
}

impl EventForm {
    pub fn new(date: NaiveDate, title: String) -> Self {
        Self {
            title,
            date: date.format("%Y-%m-%d").to_string(),
            time: String::new(),
            duration: "60".to_string(),
            color: EventColor::default(),
            category: None,
            priority: None,
            location: String::new(),
            attendees: String::new(),
            description: String::new(),
            active_field: FormField::Title,
            errors: Vec::new(),
        }
    }

    pub fn next_field(&mut self) {
        let idx = FormField::ORDER.iter().position(|f| *f == self.active_field).unwrap_or(0);
        self.active_field = FormField::ORDER[(idx + 1) % FormField::ORDER.len()];
    }

    pub fn prev_field(&mut self) {
        let len = FormField::ORDER.len();
        let idx = FormField::ORDER.iter().position(|f| *f == self.active_field).unwrap_or(0);
        self.active_field = FormField::ORDER[(idx + len - 1) % len];
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Title => Some(&mut self.title),
            FormField::Date => Some(&mut self.date),
            FormField::Time => Some(&mut self.time),
            FormField::Duration => Some(&mut self.duration),
            FormField::Location => Some(&mut self.location),
            FormField::Attendees => Some(&mut self.attendees),
            FormField::Description => Some(&mut self.description),
            FormField::Color | FormField::Category | FormField::Priority => None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        let field = self.active_field;
        let accepted = match field {
            FormField::Date => c.is_ascii_digit() || c == '-',
            FormField::Time => c.is_ascii_digit() || c == ':',
            FormField::Duration => c.is_ascii_digit() || c == '-',
            _ => true,
        };
        if !accepted {
            return;
        }
        if let Some(text) = self.text_mut(field) {
            text.push(c);
            self.clear_error(field);
        }
    }

    pub fn backspace(&mut self) {
        let field = self.active_field;
        if let Some(text) = self.text_mut(field) {
            text.pop();
            self.clear_error(field);
        }
    }

    pub fn select_next(&mut self, categories: &ReferenceList, priorities: &ReferenceList) {
        match self.active_field {
            FormField::Color => self.color = self.color.next(),
            FormField::Category => self.category = categories.cycle(self.category.as_deref()),
            FormField::Priority => self.priority = priorities.cycle(self.priority.as_deref()),
            _ => {}
        }
    }

    pub fn select_prev(&mut self, categories: &ReferenceList, priorities: &ReferenceList) {
        match self.active_field {
            FormField::Color => self.color = self.color.prev(),
            FormField::Category => self.category = categories.cycle_back(self.category.as_deref()),
            FormField::Priority => self.priority = priorities.cycle_back(self.priority.as_deref()),
            _ => {}
        }
    }

    pub fn clear_error(&mut self, field: FormField) {
        self.errors.retain(|e| e.field() != field);
    }

    pub fn error_for(&self, field: FormField) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    pub fn validate(&self) -> Result<EventDraft, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push(ValidationError::TitleRequired);
        }

        let date = if self.date.trim().is_empty() {
            errors.push(ValidationError::DateRequired);
            None
        } else {
            let parsed = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok();
            if parsed.is_none() {
                errors.push(ValidationError::InvalidDate);
            }
            parsed
        };

        let time = if self.time.trim().is_empty() {
            errors.push(ValidationError::TimeRequired);
            None
        } else {
            let parsed = parse_time(&self.time);
            if parsed.is_none() {
                errors.push(ValidationError::InvalidTime);
            }
            parsed
        };

        let duration = match parse_duration(&self.duration) {
            Ok(minutes) => Some(minutes),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        match (date, time, duration) {
            (Some(date), Some(time), Some(duration_minutes)) if errors.is_empty() => Ok(EventDraft {
                title: title.to_string(),
                date,
                time,
                duration_minutes,
                description: self.description.trim().to_string(),
                color: self.color,
                category: self.category.clone().unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
                priority: self.priority.clone().unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
                location: self.location.trim().to_string(),
                attendees: parse_attendees(&self.attendees),
            }),
            _ => Err(errors),
        }
    }

    /// Validates and records per-field errors on failure.
    pub fn submit(&mut self) -> Option<EventDraft> {
        match self.validate() {
            Ok(draft) => {
                self.errors.clear();
                Some(draft)
            }
            Err(errors) => {
                tracing::debug!("Event form rejected: {:?}", errors);
                self.errors = errors;
                None
            }
        }
    }
}

/// Accepts `H:MM` or `HH:MM`, and without a colon `HHMM`, `HMM` or a bare hour.
pub fn parse_time(input: &str) -> Option<NaiveTime> {
    let trimmed = input.trim();
    if !trimmed.chars().all(|c| c.is_ascii_digit() || c == ':') {
        return None;
    }

    let (hour, minute) = match trimmed.split_once(':') {
        Some((hour, minute)) => {
            if !(1..=2).contains(&hour.len()) || minute.len() != 2 || minute.contains(':') {
                return None;
            }
            (hour.parse().ok()?, minute.parse().ok()?)
        }
        None => {
            let num: u32 = trimmed.parse().ok()?;
            match trimmed.len() {
                1 | 2 => (num, 0),
                3 | 4 => (num / 100, num % 100),
                _ => return None,
            }
        }
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

pub fn parse_duration(input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    let minutes: i64 = trimmed.parse().map_err(|_| ValidationError::InvalidDuration)?;
    if minutes < 0 {
        return Err(ValidationError::NegativeDuration);
    }
    u32::try_from(minutes).map_err(|_| ValidationError::InvalidDuration)
}

pub fn parse_attendees(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::ReferenceItem;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn filled_form() -> EventForm {
        let mut form = EventForm::new(date(2024, 6, 3), "Standup".to_string());
        form.time = "09:00".to_string();
        form.duration = "15".to_string();
        form
    }

    fn categories() -> ReferenceList {
        ReferenceList::new(vec![
            ReferenceItem { id: "work".into(), name: "Work".into(), color: EventColor::Blue },
            ReferenceItem { id: "personal".into(), name: "Personal".into(), color: EventColor::Purple },
        ])
    }

    #[test]
    fn valid_form_produces_draft_with_defaults() {
        let draft = filled_form().validate().unwrap();

        assert_eq!(draft.title, "Standup");
        assert_eq!(draft.date, date(2024, 6, 3));
        assert_eq!(draft.time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(draft.duration_minutes, 15);
        assert_eq!(draft.category, "personal");
        assert_eq!(draft.priority, "medium");
        assert_eq!(draft.color, EventColor::Blue);
    }

    #[test]
    fn whitespace_title_is_rejected() {
        let mut form = filled_form();
        form.title = "   ".to_string();

        let errors = form.validate().unwrap_err();

        assert_eq!(errors, vec![ValidationError::TitleRequired]);
    }

    #[test]
    fn missing_date_and_time_are_both_reported() {
        let mut form = filled_form();
        form.date.clear();
        form.time.clear();

        let errors = form.validate().unwrap_err();

        assert_eq!(errors, vec![ValidationError::DateRequired, ValidationError::TimeRequired]);
    }

    #[test]
    fn negative_duration_is_rejected() {
        let mut form = filled_form();
        form.duration = "-5".to_string();

        assert_eq!(form.validate().unwrap_err(), vec![ValidationError::NegativeDuration]);
    }

    #[test]
    fn empty_duration_counts_as_zero() {
        let mut form = filled_form();
        form.duration.clear();

        assert_eq!(form.validate().unwrap().duration_minutes, 0);
    }

    #[test]
    fn malformed_date_and_time_are_field_errors() {
        let mut form = filled_form();
        form.date = "2024-13-40".to_string();
        form.time = "25:00".to_string();

        let errors = form.validate().unwrap_err();

        assert_eq!(errors, vec![ValidationError::InvalidDate, ValidationError::InvalidTime]);
        assert_eq!(errors[0].field(), FormField::Date);
        assert_eq!(errors[1].field(), FormField::Time);
    }

    #[test]
    fn attendees_are_split_trimmed_and_empties_dropped() {
        assert_eq!(parse_attendees(" Ana, Bo ,, ,Cy "), vec!["Ana", "Bo", "Cy"]);
        assert!(parse_attendees(" , ").is_empty());
    }

    #[test]
    fn time_accepts_compact_forms() {
        assert_eq!(parse_time("930"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse_time("1430"), NaiveTime::from_hms_opt(14, 30, 0));
        assert_eq!(parse_time("7"), NaiveTime::from_hms_opt(7, 0, 0));
        assert_eq!(parse_time("12:75"), None);
        assert_eq!(parse_time("12345"), None);
    }

    #[test]
    fn colon_times_need_two_minute_digits() {
        assert_eq!(parse_time("9:05"), NaiveTime::from_hms_opt(9, 5, 0));
        assert_eq!(parse_time("09:00"), NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(parse_time("12:5"), None);
        assert_eq!(parse_time("1:230"), None);
        assert_eq!(parse_time(":30"), None);
        assert_eq!(parse_time("1:2:30"), None);
    }

    #[test]
    fn short_or_long_minutes_are_invalid_time() {
        for input in ["12:5", "1:230"] {
            let mut form = filled_form();
            form.time = input.to_string();

            assert_eq!(form.validate().unwrap_err(), vec![ValidationError::InvalidTime], "{input}");
        }
    }

    #[test]
    fn submit_records_errors_and_typing_clears_them() {
        let mut form = filled_form();
        form.title.clear();

        assert!(form.submit().is_none());
        assert_eq!(form.error_for(FormField::Title), Some(&ValidationError::TitleRequired));

        form.active_field = FormField::Title;
        form.input_char('X');

        assert!(form.error_for(FormField::Title).is_none());
    }

    #[test]
    fn time_field_ignores_letters() {
        let mut form = filled_form();
        form.time.clear();
        form.active_field = FormField::Time;

        for c in "9a:3b0".chars() {
            form.input_char(c);
        }

        assert_eq!(form.time, "9:30");
    }

    #[test]
    fn field_navigation_wraps() {
        let mut form = filled_form();
        form.prev_field();
        assert_eq!(form.active_field, FormField::Description);
        form.next_field();
        form.next_field();
        assert_eq!(form.active_field, FormField::Date);
    }

    #[test]
    fn selectors_cycle_reference_ids() {
        let mut form = filled_form();
        let categories = categories();
        let priorities = ReferenceList::default();
        form.active_field = FormField::Category;

        form.select_next(&categories, &priorities);
        assert_eq!(form.category.as_deref(), Some("work"));
        form.select_next(&categories, &priorities);
        assert_eq!(form.category.as_deref(), Some("personal"));
        form.select_next(&categories, &priorities);
        assert_eq!(form.category, None);

        form.active_field = FormField::Color;
        form.select_prev(&categories, &priorities);
        assert_eq!(form.color, EventColor::Teal);
    }

    #[test]
    fn attendees_and_trimmed_text_reach_the_draft() {
        let mut form = filled_form();
        form.attendees = "Ana, Bo".to_string();
        form.location = "  Room 4 ".to_string();

        let draft = form.validate().unwrap();

        assert_eq!(draft.attendees, vec!["Ana", "Bo"]);
        assert_eq!(draft.location, "Room 4");
    }
}
