pub mod theme;
pub mod month_view;
pub mod details_view;
