//! Upcoming-birthday window.
//!
//! A birthday matches when its month/day (year ignored) satisfies
//!
//! ```text
//! (month == today.month    AND day >= today.day)
//! OR (month == upcoming.month AND day <= upcoming.day)
//! ```
//!
//! When `today` and `upcoming` fall in the same month the two clauses
//! together cover that whole month. A window spanning three or more
//! calendar months does not match birthdays in the months between them.

use chrono::{Datelike, Days, NaiveDate};

pub use contactbook_schema::query::DEFAULT_WINDOW_DAYS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    today: NaiveDate,
    upcoming: NaiveDate,
}

impl BirthdayWindow {
    /// Returns `None` if `today + days` overflows the calendar.
    pub fn new(today: NaiveDate, days: u32) -> Option<Self> {
        let upcoming = today.checked_add_days(Days::new(u64::from(days)))?;
        Some(Self { today, upcoming })
    }

    pub fn upcoming(&self) -> NaiveDate {
        self.upcoming
    }

    pub fn matches(&self, birthday: NaiveDate) -> bool {
        (birthday.month() == self.today.month() && birthday.day() >= self.today.day())
            || (birthday.month() == self.upcoming.month() && birthday.day() <= self.upcoming.day())
    }

    /// `(today.month, today.day, upcoming.month, upcoming.day)` in bind order.
    pub(crate) fn bounds(&self) -> (u32, u32, u32, u32) {
        (
            self.today.month(),
            self.today.day(),
            self.upcoming.month(),
            self.upcoming.day(),
        )
    }
}
