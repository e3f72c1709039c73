use chrono::{Datelike, NaiveDate};

use crate::calendar::{date_key, MonthCursor};
use crate::storage::EventStore;

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub title: String,
    /// Empty cells before day 1, i.e. its weekday counted from Sunday.
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub day: u32,
    pub date_key: String,
    pub is_today: bool,
    pub has_events: bool,
}

impl MonthLayout {
    /// Rows of seven, `None` for the padding before day 1 and after the last day.
    pub fn weeks(&self) -> Vec<Vec<Option<&DayCell>>> {
        let mut slots: Vec<Option<&DayCell>> = (0..self.leading_blanks).map(|_| None).collect();
        slots.extend(self.days.iter().map(Some));
        while slots.len() % 7 != 0 {
            slots.push(None);
        }
        slots.chunks(7).map(|week| week.to_vec()).collect()
    }

    pub fn cell(&self, day: u32) -> Option<&DayCell> {
        self.days.get(day.checked_sub(1)? as usize)
    }

    pub fn marked_days(&self) -> impl Iterator<Item = &DayCell> {
        self.days.iter().filter(|cell| cell.has_events)
    }

    /// Plain-text grid: `*` follows days with events, today is bracketed.
    pub fn render_text(&self) -> String {
        let mut lines = vec![self.title.clone(), WEEKDAYS.map(|d| format!("{:<5}", d)).concat()];

        for week in self.weeks() {
            let row: String = week
                .iter()
                .map(|slot| match slot {
                    None => "     ".to_string(),
                    Some(cell) => {
                        let marker = if cell.has_events { "*" } else { " " };
                        if cell.is_today {
                            format!("[{:>2}]{}", cell.day, marker)
                        } else {
                            format!(" {:>2} {}", cell.day, marker)
                        }
                    }
                })
                .collect();
            lines.push(row.trim_end().to_string());
        }

        lines.join("\n")
    }
}

pub fn calculate_layout(cursor: &MonthCursor, store: &EventStore, today: NaiveDate) -> MonthLayout {
    let year = cursor.year();
    let month = cursor.month();
    let title = cursor.title();

    let Some(first_day) = cursor.first_day() else {
        return MonthLayout { year, month, title, leading_blanks: 0, days: Vec::new() };
    };

    let days = (1..=cursor.days_in_month())
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .map(|date| {
            let key = date_key(date);
            DayCell {
                day: date.day(),
                is_today: date == today,
                has_events: store.has_events_on(&key),
                date_key: key,
            }
        })
        .collect();

    MonthLayout {
        year,
        month,
        title,
        leading_blanks: first_day.weekday().num_days_from_sunday(),
        days,
    }
}

/// Text shown when a marked day is selected; `None` for days without events.
pub fn day_summary(store: &EventStore, date_key: &str) -> Option<String> {
    let lines: Vec<String> = store
        .events_on(date_key)
        .map(|event| format!("• {}", event.text))
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(format!("Events on {}:\n{}", date_key, lines.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Event;
    use crate::storage::{MemoryStore, DEFAULT_KEY};
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn empty_store() -> EventStore {
        EventStore::load(Box::new(MemoryStore::new()), DEFAULT_KEY).unwrap()
    }

    fn cursor(year: i32, month: u32) -> MonthCursor {
        MonthCursor::new(year, month).unwrap()
    }

    #[test]
    fn leading_blanks_match_weekday_of_first() {
        // 1 September 2024 was a Sunday, 1 January 2025 a Wednesday.
        let store = empty_store();
        let today = date(2000, 1, 1);

        assert_eq!(calculate_layout(&cursor(2024, 9), &store, today).leading_blanks, 0);
        assert_eq!(calculate_layout(&cursor(2025, 1), &store, today).leading_blanks, 3);
    }

    #[test]
    fn one_cell_per_day_including_leap_day() {
        let store = empty_store();
        let layout = calculate_layout(&cursor(2024, 2), &store, date(2000, 1, 1));

        assert_eq!(layout.days.len(), 29);
        assert_eq!(layout.days.last().unwrap().date_key, "29/02/2024");
    }

    #[test]
    fn today_is_marked_only_in_its_own_month() {
        let store = empty_store();
        let today = date(2026, 10, 17);

        let current = calculate_layout(&cursor(2026, 10), &store, today);
        let today_cells: Vec<u32> = current.days.iter().filter(|c| c.is_today).map(|c| c.day).collect();
        assert_eq!(today_cells, vec![17]);

        let next_year = calculate_layout(&cursor(2027, 10), &store, today);
        assert!(next_year.days.iter().all(|c| !c.is_today));
    }

    #[test]
    fn cells_with_events_are_marked() {
        let mut store = empty_store();
        store.add(Event::new("10/01/2025", "Meeting")).unwrap();
        store.add(Event::new("1/1/2025", "Unpadded")).unwrap();

        let layout = calculate_layout(&cursor(2025, 1), &store, date(2000, 1, 1));

        let marked: Vec<u32> = layout.marked_days().map(|c| c.day).collect();
        assert_eq!(marked, vec![10]);
    }

    #[test]
    fn empty_store_has_no_markers() {
        let layout = calculate_layout(&cursor(2025, 1), &empty_store(), date(2000, 1, 1));
        assert_eq!(layout.marked_days().count(), 0);
    }

    #[test]
    fn weeks_are_padded_to_seven() {
        let layout = calculate_layout(&cursor(2025, 1), &empty_store(), date(2000, 1, 1));
        let weeks = layout.weeks();

        assert_eq!(weeks.len(), 5);
        assert!(weeks.iter().all(|w| w.len() == 7));
        assert!(weeks[0][2].is_none());
        assert_eq!(weeks[0][3].unwrap().day, 1);
    }

    #[test]
    fn cell_lookup_is_one_based() {
        let layout = calculate_layout(&cursor(2025, 1), &empty_store(), date(2000, 1, 1));
        assert_eq!(layout.cell(1).unwrap().date_key, "01/01/2025");
        assert!(layout.cell(0).is_none());
        assert!(layout.cell(32).is_none());
    }

    #[test]
    fn day_summary_lists_every_event_on_date() {
        let mut store = empty_store();
        store.add(Event::new("10/01/2025", "Standup")).unwrap();
        store.add(Event::new("11/01/2025", "Other day")).unwrap();
        store.add(Event::new("10/01/2025", "Retro")).unwrap();

        assert_eq!(
            day_summary(&store, "10/01/2025").as_deref(),
            Some("Events on 10/01/2025:\n• Standup\n• Retro")
        );
        assert_eq!(day_summary(&store, "12/01/2025"), None);
    }

    #[test]
    fn text_rendering_marks_events_and_today() {
        let mut store = empty_store();
        store.add(Event::new("02/02/2025", "Fair")).unwrap();

        let layout = calculate_layout(&cursor(2025, 2), &store, date(2025, 2, 3));
        let text = layout.render_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "February 2025");
        assert!(lines[1].starts_with("Sun  Mon"));
        assert!(lines[3].contains("  2 *"));
        assert!(lines[3].contains("[ 3]"));
    }
}
