use std::fmt;

use super::event::Event;
use super::reference::ReferenceList;

/// One filter axis: everything, or a single reference id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    pub fn matches(&self, id: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == id,
        }
    }

    /// `All → first id → … → last id → All`.
    pub fn cycle(&self, list: &ReferenceList) -> Self {
        let current = match self {
            Selection::All => None,
            Selection::Only(id) => Some(id.as_str()),
        };
        match list.cycle(current) {
            Some(id) => Selection::Only(id),
            None => Selection::All,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "all"),
            Selection::Only(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventFilter {
    pub category: Selection,
    pub priority: Selection,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        self.category.matches(&event.category) && self.priority.matches(&event.priority)
    }

    pub fn is_active(&self) -> bool {
        self.category != Selection::All || self.priority != Selection::All
    }

    /// Keeps collection order.
    pub fn apply<'a, I>(&self, events: I) -> Vec<&'a Event>
    where
        I: IntoIterator<Item = &'a Event>,
    {
        events.into_iter().filter(|e| self.matches(e)).collect()
    }
}
