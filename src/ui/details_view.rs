use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::calendar::{Event, EventColor, ReferenceList};

/// One block of the read-only details dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailSection {
    Badges {
        category: (String, EventColor),
        priority: (String, EventColor),
    },
    Date(String),
    /// `end` is `None` for all-day events.
    Time {
        start: String,
        end: Option<String>,
        duration: String,
    },
    Location(String),
    Attendees(Vec<String>),
    Description(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventDetails {
    pub title: String,
    pub color: EventColor,
    pub sections: Vec<DetailSection>,
}

pub fn build_event_details(event: &Event, categories: &ReferenceList, priorities: &ReferenceList) -> EventDetails {
    let category = categories.lookup(&event.category);
    let priority = priorities.lookup(&event.priority);

    let mut sections = vec![
        DetailSection::Badges {
            category: (category.name, category.color),
            priority: (priority.name, priority.color),
        },
        DetailSection::Date(format_long_date(event.date)),
        DetailSection::Time {
            start: format_time_12h(event.time),
            end: (event.duration_minutes > 0).then(|| format_time_12h(event.end_time())),
            duration: format_duration(event.duration_minutes),
        },
    ];

    if !event.location.trim().is_empty() {
        sections.push(DetailSection::Location(event.location.clone()));
    }
    if !event.attendees.is_empty() {
        sections.push(DetailSection::Attendees(event.attendees.clone()));
    }
    if !event.description.trim().is_empty() {
        sections.push(DetailSection::Description(event.description.clone()));
    }

    EventDetails {
        title: event.title.clone(),
        color: event.color,
        sections,
    }
}

/// `Monday, June 3, 2024`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// `9:00 AM`
pub fn format_time_12h(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    format!("{}:{:02} {}", hour, time.minute(), if is_pm { "PM" } else { "AM" })
}

pub fn format_duration(minutes: u32) -> String {
    if minutes == 0 {
        return "All day".to_string();
    }
    if minutes < 60 {
        return format!("{} minutes", minutes);
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("{} hour{}", hours, if hours > 1 { "s" } else { "" })
    } else {
        format!("{}h {}m", hours, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::ReferenceItem;
    use pretty_assertions::assert_eq;

    fn event() -> Event {
        Event {
            id: 1,
            title: "Standup".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            duration_minutes: 15,
            description: String::new(),
            color: EventColor::Green,
            category: "work".to_string(),
            priority: "urgent".to_string(),
            location: String::new(),
            attendees: vec![],
        }
    }

    fn categories() -> ReferenceList {
        ReferenceList::new(vec![ReferenceItem {
            id: "work".into(),
            name: "Work".into(),
            color: EventColor::Blue,
        }])
    }

    #[test]
    fn long_date_spells_out_weekday_and_month() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        assert_eq!(format_long_date(date), "Monday, June 3, 2024");
    }

    #[test]
    fn time_uses_twelve_hour_clock() {
        assert_eq!(format_time_12h(NaiveTime::from_hms_opt(9, 0, 0).unwrap()), "9:00 AM");
        assert_eq!(format_time_12h(NaiveTime::from_hms_opt(14, 5, 0).unwrap()), "2:05 PM");
        assert_eq!(format_time_12h(NaiveTime::from_hms_opt(0, 30, 0).unwrap()), "12:30 AM");
        assert_eq!(format_time_12h(NaiveTime::from_hms_opt(12, 0, 0).unwrap()), "12:00 PM");
    }

    #[test]
    fn duration_wording() {
        assert_eq!(format_duration(0), "All day");
        assert_eq!(format_duration(45), "45 minutes");
        assert_eq!(format_duration(60), "1 hour");
        assert_eq!(format_duration(120), "2 hours");
        assert_eq!(format_duration(90), "1h 30m");
    }

    #[test]
    fn unknown_priority_shows_raw_id_in_gray() {
        let details = build_event_details(&event(), &categories(), &ReferenceList::default());

        assert_eq!(
            details.sections[0],
            DetailSection::Badges {
                category: ("Work".to_string(), EventColor::Blue),
                priority: ("urgent".to_string(), EventColor::Gray),
            }
        );
    }

    #[test]
    fn time_section_shows_end_of_event() {
        let details = build_event_details(&event(), &categories(), &ReferenceList::default());

        assert_eq!(
            details.sections[2],
            DetailSection::Time {
                start: "9:00 AM".to_string(),
                end: Some("9:15 AM".to_string()),
                duration: "15 minutes".to_string(),
            }
        );
    }

    #[test]
    fn all_day_event_has_no_end_time() {
        let mut event = event();
        event.duration_minutes = 0;

        let details = build_event_details(&event, &categories(), &ReferenceList::default());

        assert_eq!(
            details.sections[2],
            DetailSection::Time {
                start: "9:00 AM".to_string(),
                end: None,
                duration: "All day".to_string(),
            }
        );
    }

    #[test]
    fn empty_optional_sections_are_omitted() {
        let details = build_event_details(&event(), &categories(), &ReferenceList::default());
        assert_eq!(details.sections.len(), 3);
    }

    #[test]
    fn filled_optional_sections_are_included() {
        let mut event = event();
        event.location = "Room 4".to_string();
        event.attendees = vec!["Ana".to_string(), "Bo".to_string()];
        event.description = "Daily sync".to_string();

        let details = build_event_details(&event, &categories(), &ReferenceList::default());

        assert_eq!(details.sections[3], DetailSection::Location("Room 4".to_string()));
        assert_eq!(
            details.sections[4],
            DetailSection::Attendees(vec!["Ana".to_string(), "Bo".to_string()])
        );
        assert_eq!(details.sections[5], DetailSection::Description("Daily sync".to_string()));
    }
}
