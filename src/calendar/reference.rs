use serde::{Deserialize, Serialize};

use super::event::EventColor;

pub const DEFAULT_CATEGORY: &str = "personal";
pub const DEFAULT_PRIORITY: &str = "medium";

/// A category or priority entry from the bundled dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceItem {
    pub id: String,
    pub name: String,
    pub color: EventColor,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferenceList {
    items: Vec<ReferenceItem>,
}

impl ReferenceList {
    pub fn new(items: Vec<ReferenceItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ReferenceItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ReferenceItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Events may carry ids that are not in the list; those display as the
    /// raw id with the gray tag.
    pub fn lookup(&self, id: &str) -> ReferenceItem {
        self.get(id).cloned().unwrap_or_else(|| ReferenceItem {
            id: id.to_string(),
            name: id.to_string(),
            color: EventColor::Gray,
        })
    }

    /// Steps through `None → first → … → last → None`.
    pub fn cycle(&self, current: Option<&str>) -> Option<String> {
        let position = current.and_then(|id| self.items.iter().position(|item| item.id == id));
        match position {
            None => self.items.first().map(|item| item.id.clone()),
            Some(idx) => self.items.get(idx + 1).map(|item| item.id.clone()),
        }
    }

    pub fn cycle_back(&self, current: Option<&str>) -> Option<String> {
        let position = current.and_then(|id| self.items.iter().position(|item| item.id == id));
        match position {
            None => self.items.last().map(|item| item.id.clone()),
            Some(0) => None,
            Some(idx) => self.items.get(idx - 1).map(|item| item.id.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priorities() -> ReferenceList {
        ReferenceList::new(vec![
            ReferenceItem { id: "low".into(), name: "Low".into(), color: EventColor::Green },
            ReferenceItem { id: "medium".into(), name: "Medium".into(), color: EventColor::Orange },
            ReferenceItem { id: "high".into(), name: "High".into(), color: EventColor::Red },
        ])
    }

    #[test]
    fn lookup_returns_known_item() {
        let list = priorities();
        let item = list.lookup("high");

        assert_eq!(item.name, "High");
        assert_eq!(item.color, EventColor::Red);
    }

    #[test]
    fn lookup_falls_back_to_raw_id_in_gray() {
        let list = priorities();
        let item = list.lookup("urgent");

        assert_eq!(item.name, "urgent");
        assert_eq!(item.color, EventColor::Gray);
    }

    #[test]
    fn cycle_walks_the_list_then_returns_to_none() {
        let list = priorities();

        let first = list.cycle(None);
        assert_eq!(first.as_deref(), Some("low"));
        let second = list.cycle(first.as_deref());
        assert_eq!(second.as_deref(), Some("medium"));
        let third = list.cycle(second.as_deref());
        assert_eq!(third.as_deref(), Some("high"));
        assert_eq!(list.cycle(third.as_deref()), None);
    }

    #[test]
    fn cycle_back_runs_in_reverse() {
        let list = priorities();

        assert_eq!(list.cycle_back(None).as_deref(), Some("high"));
        assert_eq!(list.cycle_back(Some("medium")).as_deref(), Some("low"));
        assert_eq!(list.cycle_back(Some("low")), None);
    }

    #[test]
    fn cycle_from_unknown_id_restarts() {
        let list = priorities();
        assert_eq!(list.cycle(Some("urgent")).as_deref(), Some("low"));
    }
}
