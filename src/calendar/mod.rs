pub mod event;
pub mod intake;
pub mod month_cursor;

pub use event::{date_key, parse_date_key, Event};
pub use intake::ValidationError;
pub use month_cursor::{days_in_month, MonthCursor};
