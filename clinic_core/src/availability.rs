//! Bookable date generation.
//!
//! Appointments can be requested on weekdays only. Dates are derived fresh
//! from "today" every time they are needed and never stored.

use crate::BookableDate;
use chrono::{Datelike, Local, NaiveDate, Weekday};

/// Number of bookable dates offered by default
pub const DEFAULT_HORIZON: usize = 30;

/// Source of the current date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

impl BookableDate {
    /// Build the display record for a calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date,
            weekday_label: date.format("%a").to_string(),
            day_of_month: date.day(),
            full_label: date.format("%B %-d").to_string(),
        }
    }
}

/// Generate the next `count` weekdays starting at `reference` (inclusive)
///
/// The result is strictly increasing and never contains a Saturday or
/// Sunday. `count == 0` yields an empty list.
pub fn generate_bookable_dates(reference: NaiveDate, count: usize) -> Vec<BookableDate> {
    let mut dates = Vec::with_capacity(count);
    let mut day = Some(reference);

    while dates.len() < count {
        // Only runs out at the end of chrono's representable range
        let Some(current) = day else { break };

        if !is_weekend(current) {
            dates.push(BookableDate::from_date(current));
        }
        day = current.succ_opt();
    }

    dates
}

/// Bookable dates starting from the clock's current day
pub fn bookable_dates_from(clock: &dyn Clock, count: usize) -> Vec<BookableDate> {
    generate_bookable_dates(clock.today(), count)
}
