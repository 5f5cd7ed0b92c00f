mod session;
mod presentation;
mod calendar_views;
mod sections;
mod dialogs;

pub use session::run_tui;
