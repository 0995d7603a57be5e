use crate::core::bucket::DayBuckets;
use chrono::{Datelike, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One cell of the monthly grid: either padding before day 1, or a day of
/// the month annotated with what the buckets hold for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarCell {
    Empty,
    Day {
        date: NaiveDate,
        has_arrival: bool,
        has_teaching: bool,
        is_today: bool,
    },
}

/// The padded day-by-day layout of one month. Rebuilt per navigation
/// request; never cached across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub year: i32,
    pub month0: u32, // zero-based month index (0 = January)
    pub cells: Vec<CalendarCell>,
}

impl CalendarGrid {
    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|c| matches!(c, CalendarCell::Empty))
            .count()
    }

    pub fn day_count(&self) -> usize {
        self.cells.len() - self.leading_blanks()
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month0 as usize]
    }
}

/// First day of the month for a zero-based month index.
fn first_of_month(year: i32, month0: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap()
}

/// Number of days in the month, derived from date arithmetic so leap
/// years come out of chrono rather than a hard-coded table.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let first = first_of_month(year, month0);
    let next = match month0 {
        11 => first_of_month(year + 1, 0),
        _ => first_of_month(year, month0 + 1),
    };
    (next - first).num_days() as u32
}

/// Weekday of the first of the month, Sunday = 0.
pub fn first_weekday(year: i32, month0: u32) -> u32 {
    first_of_month(year, month0).weekday().num_days_from_sunday()
}

/// Inclusive first/last date of a month, the fetch window for the
/// single-staff calendar view.
pub fn month_bounds(year: i32, month0: u32) -> (NaiveDate, NaiveDate) {
    let first = first_of_month(year, month0);
    let last = NaiveDate::from_ymd_opt(year, month0 + 1, days_in_month(year, month0)).unwrap();
    (first, last)
}

/// Build the monthly grid: as many leading empty cells as the weekday of
/// day 1, then one cell per day. `today` is injected by the caller instead
/// of being read from a clock, so the result is a pure function of its
/// inputs.
pub fn build_calendar(
    year: i32,
    month0: u32,
    buckets: &DayBuckets,
    today: NaiveDate,
) -> CalendarGrid {
    let mut cells = Vec::new();

    for _ in 0..first_weekday(year, month0) {
        cells.push(CalendarCell::Empty);
    }

    for day in 1..=days_in_month(year, month0) {
        let date = NaiveDate::from_ymd_opt(year, month0 + 1, day).unwrap();
        let (has_arrival, has_teaching) = match buckets.get(date) {
            Some(bucket) => (bucket.arrival.is_some(), !bucket.teaching.is_empty()),
            None => (false, false),
        };
        cells.push(CalendarCell::Day {
            date,
            has_arrival,
            has_teaching,
            is_today: date == today,
        });
    }

    CalendarGrid {
        year,
        month0,
        cells,
    }
}

/// Month-navigation state: `prev`/`next` move one month with automatic
/// year rollover at the January/December boundary, and clear any selected
/// day. Navigation is unbounded in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month0: u32,
    selected: Option<NaiveDate>,
}

impl MonthCursor {
    pub fn new(year: i32, month0: u32) -> Self {
        Self {
            year,
            month0,
            selected: None,
        }
    }

    pub fn prev(&mut self) {
        if self.month0 == 0 {
            self.year -= 1;
            self.month0 = 11;
        } else {
            self.month0 -= 1;
        }
        self.selected = None;
    }

    pub fn next(&mut self) {
        if self.month0 == 11 {
            self.year += 1;
            self.month0 = 0;
        } else {
            self.month0 += 1;
        }
        self.selected = None;
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }
}
