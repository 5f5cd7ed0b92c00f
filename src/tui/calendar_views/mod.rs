pub mod month;
pub mod event_list;
pub mod stats;
