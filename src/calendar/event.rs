use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub type EventId = i64;

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub description: String,
    pub color: EventColor,
    pub category: String,
    pub priority: String,
    pub location: String,
    pub attendees: Vec<String>,
}

/// Everything an event carries except its id. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub description: String,
    pub color: EventColor,
    pub category: String,
    pub priority: String,
    pub location: String,
    pub attendees: Vec<String>,
}

impl EventDraft {
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            date: self.date,
            time: self.time,
            duration_minutes: self.duration_minutes,
            description: self.description,
            color: self.color,
            category: self.category,
            priority: self.priority,
            location: self.location,
            attendees: self.attendees,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    #[default]
    Blue,
    Red,
    Green,
    Purple,
    Orange,
    Pink,
    Indigo,
    Teal,
    Gray,
}

impl EventColor {
    /// Colors offered by the creation form, in picker order. Gray is reserved
    /// for fallback display of unknown categories and priorities.
    pub const PICKABLE: [EventColor; 8] = [
        EventColor::Blue,
        EventColor::Red,
        EventColor::Green,
        EventColor::Purple,
        EventColor::Orange,
        EventColor::Pink,
        EventColor::Indigo,
        EventColor::Teal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EventColor::Blue => "Ocean Blue",
            EventColor::Red => "Coral Red",
            EventColor::Green => "Forest Green",
            EventColor::Purple => "Royal Purple",
            EventColor::Orange => "Sunset Orange",
            EventColor::Pink => "Rose Pink",
            EventColor::Indigo => "Deep Indigo",
            EventColor::Teal => "Teal",
            EventColor::Gray => "Slate Gray",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::PICKABLE.iter().position(|c| *c == self).unwrap_or(0);
        Self::PICKABLE[(idx + 1) % Self::PICKABLE.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::PICKABLE.len();
        let idx = Self::PICKABLE.iter().position(|c| *c == self).unwrap_or(0);
        Self::PICKABLE[(idx + len - 1) % len]
    }
}

impl Event {
    pub fn end_time(&self) -> NaiveTime {
        let (end, _) = self
            .time
            .overflowing_add_signed(chrono::Duration::minutes(self.duration_minutes as i64));
        end
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}
