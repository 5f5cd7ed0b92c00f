pub mod event_form;
pub mod event_details;
pub mod delete_confirmation;
pub mod help;
pub mod toasts;
