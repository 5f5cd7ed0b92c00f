pub mod event;
pub mod reference;
pub mod store;
pub mod filter;
pub mod dataset;

pub use event::{Event, EventColor, EventDraft, EventId};
pub use reference::{ReferenceItem, ReferenceList, DEFAULT_CATEGORY, DEFAULT_PRIORITY};
pub use store::{EventStore, IdSource, StoreError};
pub use filter::{EventFilter, Selection};
pub use dataset::{Dataset, DatasetError};
