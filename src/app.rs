use chrono::{Datelike, Days, NaiveDate};

use crate::calendar::{date_key, intake, MonthCursor};
use crate::prompt::{Notice, Prompt, CLEAR_QUESTION, REMOVE_QUESTION};
use crate::storage::{EntryId, EventStore};
use crate::ui::event_list::{self, EventListView};
use crate::ui::month_view::{self, MonthLayout};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    Insert,
    Command,
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Calendar,
    List,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    Remove(EntryId),
    ClearAll,
}

impl PendingAction {
    pub fn question(&self) -> &'static str {
        match self {
            PendingAction::Remove(_) => REMOVE_QUESTION,
            PendingAction::ClearAll => CLEAR_QUESTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Date,
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventForm {
    pub date: String,
    pub text: String,
    pub active_field: FormField,
}

impl EventForm {
    pub fn new(date: String) -> Self {
        Self {
            date,
            text: String::new(),
            active_field: FormField::Text,
        }
    }

    pub fn next_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Date => FormField::Text,
            FormField::Text => FormField::Date,
        };
    }

    pub fn active_buffer(&mut self) -> &mut String {
        match self.active_field {
            FormField::Date => &mut self.date,
            FormField::Text => &mut self.text,
        }
    }

    pub fn reset(&mut self) {
        self.date.clear();
        self.text.clear();
        self.active_field = FormField::Date;
    }
}

pub struct AppState {
    pub mode: Mode,
    pub focus: Focus,
    pub store: EventStore,
    pub cursor: MonthCursor,
    pub selected_day: u32,
    pub selected_row: usize,
    pub today: NaiveDate,
    pub event_form: Option<EventForm>,
    pub pending: Option<PendingAction>,
    pub day_details: Option<String>,
    pub notice: Option<Notice>,
    pub command_buffer: String,
    pub show_help: bool,
    pub help_scroll: usize,
    pub theme: Theme,
}

impl AppState {
    pub fn new(store: EventStore) -> Self {
        Self::new_at(store, chrono::Local::now().date_naive())
    }

    pub fn new_at(store: EventStore, today: NaiveDate) -> Self {
        Self {
            mode: Mode::Normal,
            focus: Focus::Calendar,
            store,
            cursor: MonthCursor::containing(today),
            selected_day: today.day(),
            selected_row: 0,
            today,
            event_form: None,
            pending: None,
            day_details: None,
            notice: None,
            command_buffer: String::new(),
            show_help: false,
            help_scroll: 0,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn switch_theme(&mut self, name: &str) {
        self.theme = Theme::get_by_name(name);
        tracing::info!("Switched theme to {}", self.theme.name);
        let message = if self.theme.name.eq_ignore_ascii_case(name) {
            format!("Theme: {}", self.theme.name)
        } else {
            format!("Unknown theme '{}', using {}", name, self.theme.name)
        };
        self.notice = Some(Notice::Info(message));
    }

    pub fn month_layout(&self) -> MonthLayout {
        month_view::calculate_layout(&self.cursor, &self.store, self.today)
    }

    pub fn event_list(&self) -> EventListView {
        event_list::build(&self.store)
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.cursor.year(), self.cursor.month(), self.selected_day)
    }

    pub fn selected_date_key(&self) -> String {
        self.selected_date()
            .map(date_key)
            .unwrap_or_else(|| format!("{:02}/{:02}/{}", self.selected_day, self.cursor.month(), self.cursor.year()))
    }

    pub fn previous_month(&mut self) {
        self.cursor.previous();
        self.clamp_selected_day();
    }

    pub fn next_month(&mut self) {
        self.cursor.next();
        self.clamp_selected_day();
    }

    pub fn goto_month(&mut self, cursor: MonthCursor) {
        self.cursor = cursor;
        self.clamp_selected_day();
    }

    pub fn jump_to_today(&mut self) {
        self.cursor = MonthCursor::containing(self.today);
        self.selected_day = self.today.day();
    }

    /// Moves the selected day, carrying the cursor into neighbouring months.
    pub fn move_selected_day(&mut self, delta: i64) {
        let Some(current) = self.selected_date() else { return };
        let moved = if delta >= 0 {
            current.checked_add_days(Days::new(delta as u64))
        } else {
            current.checked_sub_days(Days::new(delta.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.cursor = MonthCursor::containing(date);
            self.selected_day = date.day();
        }
    }

    fn clamp_selected_day(&mut self) {
        self.selected_day = self.selected_day.clamp(1, self.cursor.days_in_month().max(1));
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Calendar => Focus::List,
            Focus::List => Focus::Calendar,
        };
    }

    pub fn move_row_down(&mut self) {
        if self.selected_row + 1 < self.store.len() {
            self.selected_row += 1;
        }
    }

    pub fn move_row_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    fn clamp_selected_row(&mut self) {
        self.selected_row = self.selected_row.min(self.store.len().saturating_sub(1));
    }

    pub fn open_day_details(&mut self) {
        self.day_details = month_view::day_summary(&self.store, &self.selected_date_key());
    }

    pub fn open_form(&mut self) {
        self.event_form = Some(EventForm::new(self.selected_date_key()));
        self.mode = Mode::Insert;
    }

    pub fn close_form(&mut self) {
        self.event_form = None;
        self.mode = Mode::Normal;
    }

    /// Validates and stores a new event. Nothing is written unless every
    /// check passes.
    pub fn add_event(&mut self, date: &str, text: &str, prompt: &mut dyn Prompt) -> bool {
        let event = match intake::validate(date, text) {
            Ok(event) => event,
            Err(e) => {
                tracing::info!("Rejected event input: {}", e);
                prompt.notify(Notice::Error(e.to_string()));
                return false;
            }
        };

        match self.store.add(event) {
            Ok(_) => {
                prompt.notify(Notice::Success("Event added successfully!".to_string()));
                true
            }
            Err(e) => {
                tracing::error!("Failed to save event: {}", e);
                prompt.notify(Notice::Error(format!("Failed to save event: {}", e)));
                false
            }
        }
    }

    pub fn submit_form(&mut self, prompt: &mut dyn Prompt) -> bool {
        let Some(form) = self.event_form.as_ref() else {
            return false;
        };
        let (date, text) = (form.date.clone(), form.text.clone());

        let added = self.add_event(&date, &text, prompt);
        if added && let Some(form) = self.event_form.as_mut() {
            form.reset();
            self.close_form();
        }
        added
    }

    pub fn request_remove_selected(&mut self) {
        if let Some(id) = self.event_list().row_id(self.selected_row) {
            self.pending = Some(PendingAction::Remove(id));
            self.mode = Mode::Confirm;
        }
    }

    pub fn request_clear(&mut self) {
        self.pending = Some(PendingAction::ClearAll);
        self.mode = Mode::Confirm;
    }

    pub fn resolve_pending(&mut self, prompt: &mut dyn Prompt) {
        match self.pending.take() {
            Some(PendingAction::Remove(id)) => {
                self.remove_event(id, prompt);
            }
            Some(PendingAction::ClearAll) => {
                self.clear_events(prompt);
            }
            None => {}
        }
        self.mode = Mode::Normal;
    }

    pub fn remove_event(&mut self, id: EntryId, prompt: &mut dyn Prompt) -> bool {
        if !prompt.confirm(REMOVE_QUESTION) {
            return false;
        }

        let removed = match self.store.remove(id) {
            Ok(removed) => removed.is_some(),
            Err(e) => {
                tracing::error!("Failed to remove event: {}", e);
                prompt.notify(Notice::Error(format!("Failed to remove event: {}", e)));
                false
            }
        };
        self.clamp_selected_row();
        removed
    }

    pub fn clear_events(&mut self, prompt: &mut dyn Prompt) -> bool {
        if !prompt.confirm(CLEAR_QUESTION) {
            return false;
        }

        match self.store.clear() {
            Ok(()) => {
                self.selected_row = 0;
                prompt.notify(Notice::Success("All events have been cleared.".to_string()));
                true
            }
            Err(e) => {
                tracing::error!("Failed to clear events: {}", e);
                prompt.notify(Notice::Error(format!("Failed to clear events: {}", e)));
                false
            }
        }
    }
}
