use chrono::Utc;
use thiserror::Error;

use super::event::{Event, EventDraft, EventId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("No event ids left after {0}")]
    IdsExhausted(EventId),
}

/// Hands out event ids from the wall clock (milliseconds), bumped past the
/// last issued id so two events created in the same millisecond still get
/// distinct, increasing ids.
#[derive(Debug, Clone, Default)]
pub struct IdSource {
    last: EventId,
}

impl IdSource {
    pub fn starting_after(last: EventId) -> Self {
        Self { last }
    }

    pub fn next_at(&mut self, now_millis: EventId) -> Result<EventId, StoreError> {
        let bumped = self.last.checked_add(1).ok_or(StoreError::IdsExhausted(self.last))?;
        let id = now_millis.max(bumped);
        self.last = id;
        Ok(id)
    }

    pub fn next(&mut self) -> Result<EventId, StoreError> {
        self.next_at(Utc::now().timestamp_millis())
    }
}

/// The session's event collection, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
    ids: IdSource,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        let last = events.iter().map(|e| e.id).max().unwrap_or(0);
        Self {
            events,
            ids: IdSource::starting_after(last),
        }
    }

    pub fn add(&mut self, draft: EventDraft) -> Result<EventId, StoreError> {
        let id = self.ids.next()?;
        Ok(self.push(draft, id))
    }

    pub fn add_at(&mut self, draft: EventDraft, now_millis: EventId) -> Result<EventId, StoreError> {
        let id = self.ids.next_at(now_millis)?;
        Ok(self.push(draft, id))
    }

    fn push(&mut self, draft: EventDraft, id: EventId) -> EventId {
        tracing::debug!("Adding event {} ({})", id, draft.title);
        self.events.push(draft.into_event(id));
        id
    }

    pub fn remove(&mut self, id: EventId) -> Option<Event> {
        let idx = self.events.iter().position(|e| e.id == id)?;
        tracing::debug!("Removing event {}", id);
        Some(self.events.remove(idx))
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
