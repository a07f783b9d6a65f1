//! # workdays
//!
//! Working days of an ISO week for a country and subdivision, computed
//! from a declarative holiday calendar (fixed-date and Easter-relative
//! holidays, optionally restricted to some subdivisions).
//!
//! This crate is a **façade** over the workspace crates.  The free
//! functions below use the built-in calendar table and the system clock;
//! build a [`WorkWeek`] directly to inject either.
//!
//! ## Quick start
//!
//! ```rust
//! use workdays::Date;
//!
//! // Christmas week 2012 in Bavaria: Tuesday and Wednesday are holidays
//! let days = workdays::work_days("DE", "BY", Some(52), Some(2012)).unwrap();
//! assert_eq!(days.len(), 4);
//!
//! assert!(workdays::is_holiday("DE", "BY", Date::from_ymd(2013, 1, 6).unwrap()));
//! assert_eq!(
//!     workdays::easter_sunday(Some(2013)).unwrap(),
//!     Date::from_ymd(2013, 3, 31).unwrap()
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors and the argument model.
pub use wd_core as core;

/// Dates, Easter, calendars, and work weeks.
pub use wd_time as time;

pub use wd_core::{Arg, Error, Field, Number, Result};
pub use wd_time::{
    Calendar, CalendarTable, Clock, CountryCalendar, Date, EasterOffsetHoliday, FixedClock,
    FixedHoliday, Month, SystemClock, Weekday, WorkWeek, WorkWeekQuery,
};

/// Working days (Monday–Saturday, minus holidays) of ISO `week` of `year`
/// in `subdivision` of `country`, in ascending order.
///
/// `None` for week or year means the current one.
pub fn work_days(
    country: &str,
    subdivision: &str,
    week: Option<u32>,
    year: Option<i32>,
) -> Result<Vec<Date>> {
    WorkWeek::new(CalendarTable::builtin()).work_days(country, subdivision, week, year)
}

/// Return `true` if `date` is a holiday in `subdivision` of `country`.
///
/// Unknown countries and subdivisions have no holidays.
pub fn is_holiday(country: &str, subdivision: &str, date: Date) -> bool {
    CalendarTable::builtin().is_holiday(country, subdivision, date)
}

/// Easter Sunday of `year`, or of the current year if `None`.
pub fn easter_sunday(year: Option<i32>) -> Result<Date> {
    let year = year.unwrap_or_else(|| SystemClock.today().year());
    wd_time::easter_sunday(year)
}
