use chrono::{Datelike, Days, NaiveDate};

/// Year and month currently shown by the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// Cursor on the month containing `date`; the day is dropped.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn today() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn previous(&mut self) {
        if self.month == 1 {
            self.year -= 1;
            self.month = 12;
        } else {
            self.month -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.month == 12 {
            self.year += 1;
            self.month = 1;
        } else {
            self.month += 1;
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// "October 2026"
    pub fn title(&self) -> String {
        self.first_day()
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| format!("{:02}/{}", self.month, self.year))
    }
}

/// Day before the first of the following month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    next_month_first
        .and_then(|first| first.checked_sub_days(Days::new(1)))
        .map(|last| last.day())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_leap(year: i32) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    #[test]
    fn february_has_29_days_in_leap_year() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn february_has_28_days_in_common_year() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn next_from_december_rolls_into_january() {
        let mut cursor = MonthCursor::new(2024, 12).unwrap();
        cursor.next();
        assert_eq!((cursor.year(), cursor.month()), (2025, 1));
    }

    #[test]
    fn previous_from_january_rolls_into_december() {
        let mut cursor = MonthCursor::new(2024, 1).unwrap();
        cursor.previous();
        assert_eq!((cursor.year(), cursor.month()), (2023, 12));
    }

    #[test]
    fn containing_ignores_day_of_month() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(MonthCursor::containing(date), MonthCursor::new(2026, 10).unwrap());
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(MonthCursor::new(2024, 13).is_none());
        assert!(MonthCursor::new(2024, 0).is_none());
    }

    #[test]
    fn title_uses_full_month_name() {
        assert_eq!(MonthCursor::new(2026, 10).unwrap().title(), "October 2026");
    }

    proptest! {
        #[test]
        fn days_in_month_matches_calendar(year in 1i32..=9999, month in 1u32..=12) {
            let expected = match month {
                1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
                4 | 6 | 9 | 11 => 30,
                _ if is_leap(year) => 29,
                _ => 28,
            };
            prop_assert_eq!(days_in_month(year, month), expected);
        }

        #[test]
        fn next_then_previous_is_identity(year in 1i32..=9998, month in 1u32..=12) {
            let original = MonthCursor::new(year, month).unwrap();
            let mut cursor = original;
            cursor.next();
            cursor.previous();
            prop_assert_eq!(cursor, original);
        }
    }
}
