pub mod event_list;
pub mod month_view;
pub mod theme;
