pub mod calendar;
pub mod input;
pub mod ui;
pub mod storage;
pub mod app;
pub mod form;
pub mod contact;
pub mod toast;
pub mod timers;

pub use calendar::{Event, EventColor, EventId};
pub use app::{AppState, Mode, Section};

pub use input::{normal_mode, command_mode};
