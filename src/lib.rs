pub mod app;
pub mod calendar;
pub mod input;
pub mod prompt;
pub mod storage;
pub mod ui;

pub use app::{AppState, Focus, Mode};
pub use calendar::{Event, MonthCursor};
pub use storage::{EventStore, StoreError};
