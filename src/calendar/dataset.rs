use std::path::Path;

use chrono::{Days, NaiveDate, NaiveTime};
use serde::Deserialize;
use thiserror::Error;

use super::event::{Event, EventColor, EventId};
use super::reference::{ReferenceItem, ReferenceList};

const BUNDLED: &str = include_str!("../../data/calendar.json");

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse dataset: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Event {id}: invalid date '{value}'")]
    InvalidDate { id: EventId, value: String },
    #[error("Event {id}: invalid time '{value}'")]
    InvalidTime { id: EventId, value: String },
    #[error("Duplicate event id {0}")]
    DuplicateId(EventId),
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    events: Vec<SeedEvent>,
    categories: Vec<ReferenceItem>,
    priorities: Vec<ReferenceItem>,
}

#[derive(Debug, Deserialize)]
struct SeedEvent {
    id: EventId,
    title: String,
    date: String,
    time: String,
    #[serde(default)]
    duration: u32,
    #[serde(default)]
    description: String,
    #[serde(default)]
    color: EventColor,
    #[serde(default)]
    category: String,
    #[serde(default)]
    priority: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    attendees: Vec<String>,
}

/// The startup data: seed events plus the category and priority lists.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub events: Vec<Event>,
    pub categories: ReferenceList,
    pub priorities: ReferenceList,
}

impl Dataset {
    pub fn bundled(today: NaiveDate) -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED, today)
    }

    pub fn load(path: &Path, today: NaiveDate) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content, today)
    }

    pub fn from_json(content: &str, today: NaiveDate) -> Result<Self, DatasetError> {
        let raw: RawDataset = serde_json::from_str(content)?;

        let mut events: Vec<Event> = Vec::with_capacity(raw.events.len());
        for seed in raw.events {
            if events.iter().any(|e| e.id == seed.id) {
                return Err(DatasetError::DuplicateId(seed.id));
            }
            events.push(seed.resolve(today)?);
        }

        tracing::info!(
            "Loaded dataset: {} events, {} categories, {} priorities",
            events.len(),
            raw.categories.len(),
            raw.priorities.len()
        );

        Ok(Self {
            events,
            categories: ReferenceList::new(raw.categories),
            priorities: ReferenceList::new(raw.priorities),
        })
    }
}

impl SeedEvent {
    fn resolve(self, today: NaiveDate) -> Result<Event, DatasetError> {
        let date = resolve_seed_date(&self.date, today).ok_or_else(|| DatasetError::InvalidDate {
            id: self.id,
            value: self.date.clone(),
        })?;
        let time = NaiveTime::parse_from_str(&self.time, "%H:%M").map_err(|_| DatasetError::InvalidTime {
            id: self.id,
            value: self.time.clone(),
        })?;

        Ok(Event {
            id: self.id,
            title: self.title,
            date,
            time,
            duration_minutes: self.duration,
            description: self.description,
            color: self.color,
            category: self.category,
            priority: self.priority,
            location: self.location,
            attendees: self.attendees,
        })
    }
}

/// Accepts `YYYY-MM-DD`, `today`, `today+N` and `today-N`.
pub fn resolve_seed_date(value: &str, today: NaiveDate) -> Option<NaiveDate> {
    let value = value.trim();
    let Some(offset) = value.strip_prefix("today") else {
        return NaiveDate::parse_from_str(value, "%Y-%m-%d").ok();
    };

    if offset.is_empty() {
        return Some(today);
    }
    if let Some(days) = offset.strip_prefix('+') {
        let days: u64 = days.parse().ok()?;
        today.checked_add_days(Days::new(days))
    } else if let Some(days) = offset.strip_prefix('-') {
        let days: u64 = days.parse().ok()?;
        today.checked_sub_days(Days::new(days))
    } else {
        None
    }
}
