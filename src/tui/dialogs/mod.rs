pub mod confirmation;
pub mod day_details;
pub mod event_form;
pub mod help;
